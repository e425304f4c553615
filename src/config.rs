//! Site configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::services::image::DEFAULT_ALLOWED_HOSTS;
use crate::services::pagination::DEFAULT_PER_PAGE;
use crate::store::firestore::DEFAULT_FIRESTORE_BASE_URL;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CONTENT_FETCH_TIMEOUT_MS: u64 = 4000;
pub const DEFAULT_IMAGE_PROXY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ASSETS_DIR: &str = "public";
pub const DEFAULT_PKG_DIR: &str = "pkg";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown CONTENT_BACKEND: {0}")]
    UnknownBackend(String),
    #[error("{0} is required for the selected backend")]
    Missing(&'static str),
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Where content documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Postgres { database_url: String, max_connections: u32 },
    Firestore { project_id: String, api_key: Option<String>, base_url: String },
    Memory { seed_path: Option<PathBuf> },
}

impl Backend {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres { .. } => "postgres",
            Self::Firestore { .. } => "firestore",
            Self::Memory { .. } => "memory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub backend: Backend,
    /// YAML file replacing the built-in site content and fallbacks.
    pub defaults_path: Option<PathBuf>,
    pub fetch_timeout: Duration,
    pub projects_per_page: usize,
    pub image_allowed_hosts: Vec<String>,
    /// Also proxy plain `http` images. Off unless explicitly enabled.
    pub image_allow_http: bool,
    pub image_proxy_timeout: Duration,
    pub assets_dir: PathBuf,
    pub pkg_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// - `PORT`: default 3000
    /// - `CONTENT_BACKEND`: `postgres`, `firestore` or `memory`; defaults to
    ///   `postgres` when `DATABASE_URL` is set, `memory` otherwise
    /// - `DATABASE_URL`, `DB_MAX_CONNECTIONS`
    /// - `FIRESTORE_PROJECT_ID`, `FIRESTORE_API_KEY`, `FIRESTORE_BASE_URL`
    /// - `CONTENT_SEED_PATH`: YAML seed for the memory backend
    /// - `CONTENT_DEFAULTS_PATH`: YAML site content and fallbacks
    /// - `CONTENT_FETCH_TIMEOUT_MS`: default 4000
    /// - `PROJECTS_PER_PAGE`: default 6
    /// - `IMAGE_ALLOWED_HOSTS`: comma-separated host patterns
    /// - `IMAGE_PROXY_ALLOW_HTTP`: `true` to proxy plain `http` images
    /// - `IMAGE_PROXY_TIMEOUT_SECS`: default 10
    /// - `SITE_ASSETS_DIR`, `SITE_PKG_DIR`
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown backend, a missing backend setting, or
    /// an unparseable `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from any key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`SiteConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let database_url = var("DATABASE_URL");
        let backend_name = var("CONTENT_BACKEND")
            .unwrap_or_else(|| if database_url.is_some() { "postgres" } else { "memory" }.to_owned());
        let backend = match backend_name.to_ascii_lowercase().as_str() {
            "postgres" => Backend::Postgres {
                database_url: database_url.ok_or(ConfigError::Missing("DATABASE_URL"))?,
                max_connections: parse_or(var("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS),
            },
            "firestore" => Backend::Firestore {
                project_id: var("FIRESTORE_PROJECT_ID").ok_or(ConfigError::Missing("FIRESTORE_PROJECT_ID"))?,
                api_key: var("FIRESTORE_API_KEY"),
                base_url: var("FIRESTORE_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_owned())
                    .trim_end_matches('/')
                    .to_owned(),
            },
            "memory" => Backend::Memory { seed_path: var("CONTENT_SEED_PATH").map(PathBuf::from) },
            _ => return Err(ConfigError::UnknownBackend(backend_name)),
        };

        let image_allowed_hosts = var("IMAGE_ALLOWED_HOSTS").map_or_else(
            || DEFAULT_ALLOWED_HOSTS.iter().map(|h| (*h).to_owned()).collect(),
            |raw| raw.split(',').map(|h| h.trim().to_owned()).filter(|h| !h.is_empty()).collect(),
        );

        Ok(Self {
            port,
            backend,
            defaults_path: var("CONTENT_DEFAULTS_PATH").map(PathBuf::from),
            fetch_timeout: Duration::from_millis(parse_or(
                var("CONTENT_FETCH_TIMEOUT_MS"),
                DEFAULT_CONTENT_FETCH_TIMEOUT_MS,
            )),
            projects_per_page: parse_or(var("PROJECTS_PER_PAGE"), DEFAULT_PER_PAGE).max(1),
            image_allowed_hosts,
            image_allow_http: parse_or(var("IMAGE_PROXY_ALLOW_HTTP"), false),
            image_proxy_timeout: Duration::from_secs(parse_or(
                var("IMAGE_PROXY_TIMEOUT_SECS"),
                DEFAULT_IMAGE_PROXY_TIMEOUT_SECS,
            )),
            assets_dir: PathBuf::from(var("SITE_ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_owned())),
            pkg_dir: PathBuf::from(var("SITE_PKG_DIR").unwrap_or_else(|| DEFAULT_PKG_DIR.to_owned())),
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend: Backend::Memory { seed_path: None },
            defaults_path: None,
            fetch_timeout: Duration::from_millis(DEFAULT_CONTENT_FETCH_TIMEOUT_MS),
            projects_per_page: DEFAULT_PER_PAGE,
            image_allowed_hosts: DEFAULT_ALLOWED_HOSTS.iter().map(|h| (*h).to_owned()).collect(),
            image_allow_http: false,
            image_proxy_timeout: Duration::from_secs(DEFAULT_IMAGE_PROXY_TIMEOUT_SECS),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            pkg_dir: PathBuf::from(DEFAULT_PKG_DIR),
        }
    }
}

/// Parsed value, or `default` when absent or unparseable.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse().ok()).unwrap_or(default)
}
