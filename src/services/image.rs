//! Image host allow-list and the fetch behind the `/image` proxy.
//!
//! DESIGN
//! ======
//! Remote images are only shown when their host matches the allow-list, and
//! then through the site's own proxy so the browser never contacts an
//! arbitrary host. Patterns are an exact host, `*.host` (exactly one extra
//! label) or `**.host` (one or more extra labels). Only `https` URLs match
//! unless plain `http` is switched on. Site-relative paths are served as-is;
//! everything else becomes the placeholder image.
//!
//! The proxy client re-checks every redirect hop against the same list and
//! stops at the first disallowed one, so an allowed host cannot bounce the
//! fetch elsewhere.

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;

use std::time::Duration;

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect;
use sha2::{Digest, Sha256};

pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &[
    "i.ibb.co",
    "**.ibb.co",
    "imgur.com",
    "**.imgur.com",
    "cloudinary.com",
    "**.cloudinary.com",
    "upload.wikimedia.org",
    "dzakifadh.dev",
];
pub const PLACEHOLDER_PATH: &str = "/assets/placeholder.svg";
pub const PROXY_PATH: &str = "/image";
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
pub const MAX_REDIRECTS: usize = 5;

// =============================================================================
// HOST PATTERNS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    Exact(String),
    OneLabel(String),
    AnyDepth(String),
}

impl HostPattern {
    /// Parse one pattern. Blank input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_lowercase();
        if let Some(base) = raw.strip_prefix("**.") {
            let base = base.trim_end_matches('.');
            return (!base.is_empty()).then(|| Self::AnyDepth(base.to_owned()));
        }
        if let Some(base) = raw.strip_prefix("*.") {
            let base = base.trim_end_matches('.');
            return (!base.is_empty()).then(|| Self::OneLabel(base.to_owned()));
        }
        let exact = raw.trim_end_matches('.');
        (!exact.is_empty()).then(|| Self::Exact(exact.to_owned()))
    }

    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        match self {
            Self::Exact(exact) => host == *exact,
            Self::OneLabel(base) => subdomain_prefix(&host, base).is_some_and(|prefix| !prefix.contains('.')),
            Self::AnyDepth(base) => subdomain_prefix(&host, base).is_some(),
        }
    }
}

/// The labels in front of `.base`, if `host` is a strict subdomain of it.
fn subdomain_prefix<'a>(host: &'a str, base: &str) -> Option<&'a str> {
    let prefix = host.strip_suffix(base)?.strip_suffix('.')?;
    (!prefix.is_empty() && !prefix.split('.').any(str::is_empty)).then_some(prefix)
}

// =============================================================================
// POLICY
// =============================================================================

/// Where an image reference should be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Site-relative path, used unchanged.
    Local(String),
    /// Allowed remote image, routed through the proxy.
    Proxied(String),
    /// Missing or disallowed; shows the placeholder.
    Blocked,
}

impl ImageSource {
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Local(path) | Self::Proxied(path) => path,
            Self::Blocked => PLACEHOLDER_PATH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImagePolicy {
    patterns: Vec<HostPattern>,
    allow_http: bool,
}

impl ImagePolicy {
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns.into_iter().filter_map(|p| HostPattern::parse(p.as_ref())).collect(),
            allow_http: false,
        }
    }

    /// Accept plain `http` URLs as well as `https`.
    #[must_use]
    pub fn allowing_http(mut self, allow: bool) -> Self {
        self.allow_http = allow;
        self
    }

    /// True for an `https` URL (or `http`, when enabled) whose host matches
    /// a pattern.
    #[must_use]
    pub fn allows(&self, url: &Url) -> bool {
        let scheme_ok = match url.scheme() {
            "https" => true,
            "http" => self.allow_http,
            _ => false,
        };
        if !scheme_ok {
            return false;
        }
        url.host_str()
            .is_some_and(|host| self.patterns.iter().any(|p| p.matches(host)))
    }

    #[must_use]
    pub fn resolve(&self, src: &str) -> ImageSource {
        let src = src.trim();
        if src.is_empty() {
            return ImageSource::Blocked;
        }
        if src.starts_with('/') && !src.starts_with("//") {
            return ImageSource::Local(src.to_owned());
        }
        match Url::parse(src) {
            Ok(url) if self.allows(&url) => proxied_source(url.as_str()),
            _ => ImageSource::Blocked,
        }
    }

    /// HTTP client for the proxy: follows at most `MAX_REDIRECTS` hops, and
    /// only to URLs this policy allows. A refused hop surfaces as the 3xx
    /// response itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn proxy_client(&self, connect_timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
        let policy = self.clone();
        reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .redirect(redirect::Policy::custom(move |attempt| {
                if attempt.previous().len() > MAX_REDIRECTS || !policy.allows(attempt.url()) {
                    attempt.stop()
                } else {
                    attempt.follow()
                }
            }))
            .build()
    }
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_HOSTS)
    }
}

/// `/image?url=<encoded>` for a remote URL.
fn proxied_source(remote: &str) -> ImageSource {
    Url::parse_with_params("http://localhost/image", &[("url", remote)]).map_or(ImageSource::Blocked, |url| {
        ImageSource::Proxied(format!("{PROXY_PATH}?{}", url.query().unwrap_or_default()))
    })
}

// =============================================================================
// PROXY FETCH
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ImageProxyError {
    #[error("invalid image url: {0}")]
    InvalidUrl(String),
    #[error("image host not allowed: {0}")]
    HostNotAllowed(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),
    #[error("upstream response is not an image: {0}")]
    NotAnImage(String),
    #[error("image exceeds the size limit")]
    TooLarge,
}

#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub content_type: String,
    pub body: Vec<u8>,
    pub etag: String,
}

/// Fetch an allowed remote image for the proxy.
///
/// # Errors
///
/// Fails when the URL is invalid or not allowed, the upstream request fails,
/// the final response comes from a host outside the policy or carries a
/// non-success status (a refused redirect included), the body is not an
/// image, or the body exceeds `MAX_IMAGE_BYTES`.
pub async fn fetch_image(
    client: &reqwest::Client,
    policy: &ImagePolicy,
    raw: &str,
    timeout: Duration,
) -> Result<FetchedImage, ImageProxyError> {
    let url = Url::parse(raw.trim()).map_err(|_| ImageProxyError::InvalidUrl(raw.to_owned()))?;
    if !policy.allows(&url) {
        return Err(ImageProxyError::HostNotAllowed(url.host_str().unwrap_or_default().to_owned()));
    }

    let mut response = client.get(url.clone()).timeout(timeout).send().await?;
    if !policy.allows(response.url()) {
        return Err(ImageProxyError::HostNotAllowed(response.url().host_str().unwrap_or_default().to_owned()));
    }
    if !response.status().is_success() {
        return Err(ImageProxyError::UpstreamStatus(response.status().as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();
    if !content_type.starts_with("image/") {
        return Err(ImageProxyError::NotAnImage(content_type));
    }
    if response.content_length().is_some_and(|len| len > MAX_IMAGE_BYTES as u64) {
        return Err(ImageProxyError::TooLarge);
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > MAX_IMAGE_BYTES {
            return Err(ImageProxyError::TooLarge);
        }
        body.extend_from_slice(&chunk);
    }

    tracing::debug!(%url, bytes = body.len(), "proxied image");
    let etag = etag_for(&body);
    Ok(FetchedImage { content_type, body, etag })
}

/// Strong ETag: quoted SHA-256 hex of the body.
#[must_use]
pub fn etag_for(body: &[u8]) -> String {
    let digest = Sha256::digest(body);
    let hex = digest.iter().map(|b| format!("{b:02x}")).collect::<String>();
    format!("\"{hex}\"")
}

/// True when an `If-None-Match` header value names `etag` (or is `*`).
#[must_use]
pub fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match
        .split(',')
        .map(|tag| tag.trim().trim_start_matches("W/"))
        .any(|tag| tag == "*" || tag == etag)
}
