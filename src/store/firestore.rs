//! Firestore document store over the REST API.
//!
//! DESIGN
//! ======
//! Lists a collection with `GET .../documents/{collection}`, following
//! `nextPageToken` until the listing is exhausted. Firestore wraps every field
//! in a typed value (`{"stringValue": "..."}`); `decode_value` unwraps those
//! into plain JSON so the content mappers see the same shape as other
//! backends. Unknown value kinds decode to `null`.

#[cfg(test)]
#[path = "firestore_test.rs"]
mod tests;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{Document, DocumentStore, StoreError};

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: u32 = 300;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

pub struct FirestoreStore {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreStore {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str, project_id: String, api_key: Option<String>) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_owned(), project_id, api_key }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/projects/{}/databases/(default)/documents/{collection}", self.base_url, self.project_id)
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirestoreStore {
    fn backend(&self) -> &'static str {
        "firestore"
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let url = self.collection_url(collection);
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .query(&[("pageSize", PAGE_SIZE.to_string())]);
            if let Some(key) = &self.api_key {
                request = request.query(&[("key", key)]);
            }
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(StoreError::Status { collection: collection.to_owned(), status: status.as_u16() });
            }

            let page: ListDocumentsResponse = response.json().await?;
            documents.extend(page.documents.into_iter().map(decode_document));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(documents)
    }
}

fn decode_document(doc: FirestoreDocument) -> Document {
    let id = doc.name.rsplit('/').next().unwrap_or_default().to_owned();
    Document::new(id, decode_fields(&doc.fields))
}

fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

/// Unwrap one Firestore typed value into plain JSON.
pub(crate) fn decode_value(value: &Value) -> Value {
    let Some(typed) = value.as_object() else {
        return Value::Null;
    };
    let Some((kind, inner)) = typed.iter().next() else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" | "booleanValue" | "doubleValue"
        | "geoPointValue" => inner.clone(),
        // Firestore sends 64-bit integers as strings.
        "integerValue" => inner
            .as_str()
            .and_then(|raw| raw.parse::<i64>().ok())
            .map_or_else(|| inner.clone(), Value::from),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => Value::Object(
            inner
                .get("fields")
                .and_then(Value::as_object)
                .map(decode_fields)
                .unwrap_or_default(),
        ),
        _ => Value::Null,
    }
}
