//! In-memory document store.
//!
//! Used for local development (seeded from a YAML file) and as the default
//! backend when no database is configured. The seed file maps collection
//! names to lists of documents; a document's `id` field becomes its id,
//! otherwise `<collection>-<position>` is used.

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::{Document, DocumentStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML seed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Seed`] if the YAML is not a map of document lists.
    pub fn from_yaml_str(raw: &str) -> Result<Self, StoreError> {
        let parsed: HashMap<String, Vec<Map<String, Value>>> =
            serde_yaml::from_str(raw).map_err(|e| StoreError::Seed(e.to_string()))?;

        let collections = parsed
            .into_iter()
            .map(|(name, docs)| {
                let docs = docs
                    .into_iter()
                    .enumerate()
                    .map(|(position, fields)| {
                        let id = fields
                            .get("id")
                            .and_then(Value::as_str)
                            .map_or_else(|| format!("{name}-{position}"), str::to_owned);
                        Document::new(id, fields)
                    })
                    .collect();
                (name, docs)
            })
            .collect();

        Ok(Self { collections: RwLock::new(collections) })
    }

    /// Read and parse a YAML seed file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Seed`] if the file cannot be read or parsed.
    pub async fn from_yaml_file(path: &Path) -> Result<Self, StoreError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Seed(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&raw)
    }

    /// Replace the contents of one collection.
    pub async fn insert_collection(&self, collection: &str, documents: Vec<Document>) {
        self.collections
            .write()
            .await
            .insert(collection.to_owned(), documents);
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
}
