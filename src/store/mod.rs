//! Document store adapters.
//!
//! DESIGN
//! ======
//! Content lives in named collections of flat documents. The site only ever
//! lists a whole collection, so `DocumentStore` has a single read operation.
//! Backends: Postgres (`documents` table with a JSONB body), Firestore over
//! its REST API, and an in-memory store seeded from YAML.

pub mod firestore;
pub mod memory;
pub mod postgres;

use std::time::Duration;

use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store returned status {status} for collection {collection}")]
    Status { collection: String, status: u16 },
    #[error("read timed out after {0:?}")]
    Timeout(Duration),
    #[error("seed error: {0}")]
    Seed(String),
}

/// One document: its identifier and its top-level fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self { id: id.into(), fields }
    }

    /// Build from a JSON body. Non-object bodies yield no fields.
    #[must_use]
    pub fn from_value(id: impl Into<String>, body: Value) -> Self {
        let fields = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(id, fields)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// List every document of `collection` in store order.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}
