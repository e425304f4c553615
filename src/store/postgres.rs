//! Postgres-backed document store.
//!
//! Documents live in one `documents` table keyed by `(collection, id)` with
//! the fields in a JSONB `body`. Store order is insertion order.

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;

use sqlx::PgPool;

use super::{Document, DocumentStore, StoreError};

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query_as::<_, (String, serde_json::Value)>(
            "SELECT id, body
             FROM documents
             WHERE collection = $1
             ORDER BY created_at ASC, id ASC",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, body)| Document::from_value(id, body))
            .collect())
    }
}
