mod config;
mod content;
mod db;
mod routes;
mod services;
mod state;
mod store;
mod views;

use std::sync::Arc;

use config::{Backend, ConfigError, SiteConfig};
use content::defaults::{DefaultsError, SiteContent};
use store::firestore::FirestoreStore;
use store::memory::MemoryStore;
use store::postgres::PgDocumentStore;
use store::{DocumentStore, StoreError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("site content: {0}")]
    Defaults(#[from] DefaultsError),
    #[error("content store: {0}")]
    Store(#[from] StoreError),
    #[error("database init failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = SiteConfig::from_env()?;
    let content = match &config.defaults_path {
        Some(path) => {
            let content = SiteContent::from_yaml_file(path)?;
            tracing::info!(path = %path.display(), "site content loaded");
            content
        }
        None => SiteContent::builtin(),
    };

    let http = reqwest::Client::builder()
        .connect_timeout(config.image_proxy_timeout)
        .build()?;
    tracing::info!(backend = config.backend.name(), "opening content store");
    let store = build_store(&config.backend, http).await?;
    tracing::info!(backend = store.backend(), "content store ready");

    let port = config.port;
    let state = state::AppState::new(store, content, config)?;
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "folio listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_store(backend: &Backend, http: reqwest::Client) -> Result<Arc<dyn DocumentStore>, StartupError> {
    let store: Arc<dyn DocumentStore> = match backend {
        Backend::Postgres { database_url, max_connections } => {
            let pool = db::init_pool(database_url, *max_connections).await?;
            Arc::new(PgDocumentStore::new(pool))
        }
        Backend::Firestore { project_id, api_key, base_url } => {
            Arc::new(FirestoreStore::new(http, base_url, project_id.clone(), api_key.clone()))
        }
        Backend::Memory { seed_path: Some(path) } => Arc::new(MemoryStore::from_yaml_file(path).await?),
        Backend::Memory { seed_path: None } => {
            tracing::warn!("no content seed configured; every section will show default content");
            Arc::new(MemoryStore::new())
        }
    };
    Ok(store)
}
