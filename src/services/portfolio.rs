//! Section loaders used by pages and the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each loader reads one collection through `section::fetch_with_fallback`
//! with the fallback records from `SiteContent`, then applies that
//! section's ordering. The home page runs its four reads concurrently; there
//! is no cache between requests.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod tests;

use std::time::Duration;

use serde::Serialize;

use super::milestone;
use super::section::{Collection, Section, fetch_with_fallback};
use crate::content::defaults::SiteContent;
use crate::content::{FromDocument, Milestone, Profile, Project, Skill};
use crate::store::DocumentStore;

/// Borrowed handles for one request's reads.
#[derive(Clone, Copy)]
pub struct Portfolio<'a> {
    store: &'a dyn DocumentStore,
    content: &'a SiteContent,
    timeout: Duration,
}

/// Everything the home page shows.
#[derive(Debug, Clone, Serialize)]
pub struct HomeContent {
    pub about: Section<Profile>,
    pub milestones: Section<Milestone>,
    pub skills: Section<Skill>,
    pub projects: Section<Project>,
}

/// A single project, or `None` when no project has the id.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectLookup {
    pub project: Option<Project>,
    pub notice: Option<String>,
}

impl<'a> Portfolio<'a> {
    #[must_use]
    pub fn new(store: &'a dyn DocumentStore, content: &'a SiteContent, timeout: Duration) -> Self {
        Self { store, content, timeout }
    }

    /// Biography: the first document of `about`.
    pub async fn load_about(&self) -> Section<Profile> {
        fetch_with_fallback(
            self.store,
            &Collection::ABOUT,
            self.timeout,
            Profile::from_document,
            std::slice::from_ref(&self.content.profile),
        )
        .await
        .map_items(|items| items.into_iter().take(1).collect())
    }

    /// Milestones, newest start first.
    pub async fn load_milestones(&self) -> Section<Milestone> {
        fetch_with_fallback(
            self.store,
            &Collection::MILESTONES,
            self.timeout,
            Milestone::from_document,
            &self.content.milestones,
        )
        .await
        .map_items(|mut items| {
            milestone::sort_newest_first(&mut items);
            items
        })
    }

    /// Skills, ordered by document id.
    pub async fn load_skills(&self) -> Section<Skill> {
        fetch_with_fallback(self.store, &Collection::SKILLS, self.timeout, Skill::from_document, &self.content.skills)
            .await
            .map_items(|mut items| {
                items.sort_by(|a, b| a.id.cmp(&b.id));
                items
            })
    }

    /// Projects in store order.
    pub async fn load_projects(&self) -> Section<Project> {
        fetch_with_fallback(
            self.store,
            &Collection::PROJECTS,
            self.timeout,
            Project::from_document,
            &self.content.projects,
        )
        .await
    }

    pub async fn load_home(&self) -> HomeContent {
        let (about, milestones, skills, projects) =
            tokio::join!(self.load_about(), self.load_milestones(), self.load_skills(), self.load_projects());
        HomeContent { about, milestones, skills, projects }
    }

    /// Look a project up by id among the loaded (or fallback) projects.
    pub async fn find_project(&self, id: &str) -> ProjectLookup {
        let section = self.load_projects().await;
        let project = section.items.into_iter().find(|p| p.id == id);
        if project.is_none() {
            tracing::debug!(%id, "project not found");
        }
        ProjectLookup { project, notice: section.notice }
    }
}

impl HomeContent {
    /// The profile to render; the fallback profile always exists.
    #[must_use]
    pub fn profile<'a>(&'a self, fallback: &'a Profile) -> &'a Profile {
        self.about.items.first().unwrap_or(fallback)
    }
}
