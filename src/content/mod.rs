//! Content records and their document mappers.
//!
//! DESIGN
//! ======
//! Records are flat and read-only. Mapping from a store document never fails:
//! a missing or wrongly-typed field becomes an empty string or list, and an
//! optional field becomes `None`. Field names follow the stored camelCase
//! names so the same records round-trip through YAML defaults and the JSON
//! API unchanged.

pub mod defaults;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::Document;

// =============================================================================
// RECORDS
// =============================================================================

/// Biography shown in the About section. Collection `about`, first document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub subtitle: String,
    pub bio1: String,
    pub bio2: String,
    pub bio3: String,
    pub image_url: String,
    pub resume_url: String,
}

/// One entry of the Experience timeline. Collection `milestones`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    /// `DD/MM/YYYY-DD/MM/YYYY` or `DD/MM/YYYY-present`.
    pub year: String,
    pub title: String,
    pub description: String,
}

/// Collection `skills`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub image: String,
}

/// Collection `projects`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub technologies: Vec<String>,
    pub image: String,
    pub link: String,
    pub github: Option<String>,
    pub demo_url: Option<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
}

/// A challenge and the solution at the same position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengePair {
    pub challenge: String,
    pub solution: Option<String>,
}

impl Project {
    /// Pair challenges with solutions by position. A challenge without a
    /// solution at its index gets `None`; surplus solutions are returned
    /// separately rather than dropped.
    #[must_use]
    pub fn challenge_pairs(&self) -> (Vec<ChallengePair>, Vec<String>) {
        let pairs = self
            .challenges
            .iter()
            .enumerate()
            .map(|(i, challenge)| ChallengePair { challenge: challenge.clone(), solution: self.solutions.get(i).cloned() })
            .collect();
        let unpaired = self
            .solutions
            .iter()
            .skip(self.challenges.len())
            .cloned()
            .collect();
        (pairs, unpaired)
    }

    /// Long description when present, otherwise the card description.
    #[must_use]
    pub fn body_text(&self) -> &str {
        self.detailed_description.as_deref().unwrap_or(&self.description)
    }
}

// =============================================================================
// DOCUMENT MAPPING
// =============================================================================

pub trait FromDocument {
    fn from_document(doc: &Document) -> Self;
}

impl FromDocument for Profile {
    fn from_document(doc: &Document) -> Self {
        Self {
            name: text(doc, "name"),
            subtitle: text(doc, "subtitle"),
            bio1: text(doc, "bio1"),
            bio2: text(doc, "bio2"),
            bio3: text(doc, "bio3"),
            image_url: text(doc, "imageUrl"),
            resume_url: text(doc, "resumeUrl"),
        }
    }
}

impl FromDocument for Milestone {
    fn from_document(doc: &Document) -> Self {
        Self { year: text(doc, "year"), title: text(doc, "title"), description: text(doc, "description") }
    }
}

impl FromDocument for Skill {
    fn from_document(doc: &Document) -> Self {
        Self { id: doc.id.clone(), name: text(doc, "name"), image: text(doc, "image") }
    }
}

impl FromDocument for Project {
    fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            title: text(doc, "title"),
            description: text(doc, "description"),
            detailed_description: optional_text(doc, "detailedDescription"),
            technologies: list(doc, "technologies"),
            image: text(doc, "image"),
            link: text(doc, "link"),
            github: optional_text(doc, "github"),
            demo_url: optional_text(doc, "demoUrl"),
            features: list(doc, "features"),
            challenges: list(doc, "challenges"),
            solutions: list(doc, "solutions"),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Field as text; empty when missing or not a scalar.
pub(crate) fn text(doc: &Document, key: &str) -> String {
    doc.get(key).and_then(scalar_text).unwrap_or_default()
}

/// Field as text; `None` when missing, blank, or not a scalar.
pub(crate) fn optional_text(doc: &Document, key: &str) -> Option<String> {
    doc.get(key)
        .and_then(scalar_text)
        .filter(|s| !s.trim().is_empty())
}

/// Field as a list of text; scalar entries only, empty when not an array.
pub(crate) fn list(doc: &Document, key: &str) -> Vec<String> {
    doc.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(scalar_text).collect())
        .unwrap_or_default()
}
