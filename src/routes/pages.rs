//! Server-rendered page handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::state::AppState;
use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Requested 1-based page; anything unparseable is page 1.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// `GET /` — home page. `?page=N` selects the projects page.
pub async fn home(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let home = state.portfolio().load_home().await;
    let pages = state.project_pages(home.projects.items.len());
    Html(views::home_page(&state.content, home, pages, query.page(), state.images.clone()))
}

/// `GET /projects` — paginated project index.
pub async fn projects(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let projects = state.portfolio().load_projects().await;
    let pages = state.project_pages(projects.items.len());
    Html(views::projects_page(&state.content, projects, pages, query.page(), state.images.clone()))
}

/// `GET /projects/:id` — project detail, 404 when no project has the id.
pub async fn project(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let lookup = state.portfolio().find_project(&id).await;
    match views::project_page(&state.content, lookup, state.images.clone()) {
        Some(html) => Html(html).into_response(),
        None => not_found_response(&state, "Project not found"),
    }
}

/// Fallback for unknown paths.
pub async fn not_found(State(state): State<AppState>) -> Response {
    not_found_response(&state, "Page not found")
}

fn not_found_response(state: &AppState, message: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found_page(&state.content, message))).into_response()
}
