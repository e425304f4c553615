//! Fetch one collection with fallback.
//!
//! DESIGN
//! ======
//! Every section of the site reads its collection the same way, so the
//! read, the timeout and the fallback decision live here once:
//!
//! - non-empty result: mapped records, `Remote`;
//! - empty result: the fallback records, `Empty`, no notice;
//! - store error or timeout: the fallback records, `Unavailable`, with the
//!   collection's notice. The notice never appears without the fallback.
//!
//! Errors never leave this module. A failure is logged and rendered.

#[cfg(test)]
#[path = "section_test.rs"]
mod tests;

use std::time::Duration;

use serde::Serialize;

use crate::store::{Document, DocumentStore, StoreError};

/// A named collection and the notice shown when it cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub name: &'static str,
    pub notice: &'static str,
}

impl Collection {
    pub const ABOUT: Self = Self { name: "about", notice: "Failed to load about information" };
    pub const MILESTONES: Self =
        Self { name: "milestones", notice: "Failed to load experience. Using default experience instead." };
    pub const SKILLS: Self = Self { name: "skills", notice: "Failed to load skills. Using default skills instead." };
    pub const PROJECTS: Self =
        Self { name: "projects", notice: "Failed to load projects. Using default projects instead." };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Remote,
    Empty,
    Unavailable,
}

/// Records for one section, where they came from, and an optional notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<T> {
    pub items: Vec<T>,
    pub source: ContentSource,
    pub notice: Option<String>,
}

impl<T> Section<T> {
    /// Transform the records, keeping source and notice.
    #[must_use]
    pub fn map_items<U>(self, f: impl FnOnce(Vec<T>) -> Vec<U>) -> Section<U> {
        Section { items: f(self.items), source: self.source, notice: self.notice }
    }
}

/// Read `collection`, map each document, and fall back when needed.
pub async fn fetch_with_fallback<T, F>(
    store: &dyn DocumentStore,
    collection: &Collection,
    timeout: Duration,
    map: F,
    fallback: &[T],
) -> Section<T>
where
    T: Clone,
    F: Fn(&Document) -> T,
{
    let result = match tokio::time::timeout(timeout, store.list(collection.name)).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout(timeout)),
    };

    match result {
        Ok(docs) if !docs.is_empty() => {
            tracing::debug!(collection = collection.name, count = docs.len(), "section loaded");
            Section { items: docs.iter().map(map).collect(), source: ContentSource::Remote, notice: None }
        }
        Ok(_) => {
            tracing::debug!(collection = collection.name, "collection empty, using fallback");
            Section { items: fallback.to_vec(), source: ContentSource::Empty, notice: None }
        }
        Err(e) => {
            tracing::warn!(
                collection = collection.name,
                backend = store.backend(),
                error = %e,
                "section read failed, using fallback"
            );
            Section {
                items: fallback.to_vec(),
                source: ContentSource::Unavailable,
                notice: Some(collection.notice.to_owned()),
            }
        }
    }
}
