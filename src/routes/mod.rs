//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered pages, the read-only JSON API,
//! the image proxy, static assets under `/assets` and the reveal wasm bundle
//! under `/pkg`. Unknown paths render the not-found page.

pub mod api;
pub mod image;
pub mod pages;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes, open to any origin.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/about", get(api::about))
        .route("/api/milestones", get(api::milestones))
        .route("/api/skills", get(api::skills))
        .route("/api/projects", get(api::projects))
        .route("/api/projects/{id}", get(api::project))
        .layer(cors)
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);
    let pkg = ServeDir::new(&state.config.pkg_dir);

    Router::new()
        .route("/", get(pages::home))
        .route("/projects", get(pages::projects))
        .route("/projects/{id}", get(pages::project))
        .route("/image", get(image::proxy))
        .route("/healthz", get(healthz))
        .merge(api_routes())
        .nest_service("/assets", assets)
        .nest_service("/pkg", pkg)
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
