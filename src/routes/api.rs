//! Read-only JSON views of the site sections.
//!
//! Each response carries the records plus `source` (`remote`, `empty` or
//! `unavailable`) and the notice shown on the page, if any.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::content::{Milestone, Profile, Project, Skill};
use crate::services::portfolio::ProjectLookup;
use crate::services::section::Section;
use crate::state::AppState;

/// `GET /api/about`
pub async fn about(State(state): State<AppState>) -> Json<Section<Profile>> {
    Json(state.portfolio().load_about().await)
}

/// `GET /api/milestones` — newest first.
pub async fn milestones(State(state): State<AppState>) -> Json<Section<Milestone>> {
    Json(state.portfolio().load_milestones().await)
}

/// `GET /api/skills` — ordered by id.
pub async fn skills(State(state): State<AppState>) -> Json<Section<Skill>> {
    Json(state.portfolio().load_skills().await)
}

/// `GET /api/projects`
pub async fn projects(State(state): State<AppState>) -> Json<Section<Project>> {
    Json(state.portfolio().load_projects().await)
}

/// `GET /api/projects/:id`
pub async fn project(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<ProjectLookup>, StatusCode> {
    let lookup = state.portfolio().find_project(&id).await;
    if lookup.project.is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(lookup))
}
