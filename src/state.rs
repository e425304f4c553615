//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the content store, the site content and fallbacks, typed config, the
//! image allow-list and the image proxy's HTTP client, whose redirects are
//! bound to that allow-list. Everything is built once at startup and
//! read-only afterwards.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::defaults::SiteContent;
use crate::services::image::ImagePolicy;
use crate::services::pagination::Pagination;
use crate::services::portfolio::Portfolio;
use crate::store::DocumentStore;

/// Shared application state. Clone is required by Axum; all fields are
/// `Arc`-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub content: Arc<SiteContent>,
    pub config: Arc<SiteConfig>,
    pub images: Arc<ImagePolicy>,
    pub image_client: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the image proxy client cannot be built.
    pub fn new(store: Arc<dyn DocumentStore>, content: SiteContent, config: SiteConfig) -> Result<Self, reqwest::Error> {
        let images = ImagePolicy::new(&config.image_allowed_hosts).allowing_http(config.image_allow_http);
        let image_client = images.proxy_client(config.image_proxy_timeout)?;
        Ok(Self {
            store,
            content: Arc::new(content),
            config: Arc::new(config),
            images: Arc::new(images),
            image_client,
        })
    }

    /// Section loaders bound to this state.
    #[must_use]
    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio::new(self.store.as_ref(), &self.content, self.config.fetch_timeout)
    }

    /// Pagination for `total` projects with the configured page size.
    #[must_use]
    pub fn project_pages(&self, total: usize) -> Pagination {
        Pagination::new(total, self.config.projects_per_page)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
