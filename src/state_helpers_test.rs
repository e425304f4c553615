use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::http::StatusCode;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::routing::get;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use serde_json::json;

use crate::store::memory::MemoryStore;
use crate::store::{Document, StoreError};

/// A store whose every read fails.
pub struct FailingStore;

#[async_trait::async_trait]
impl DocumentStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Status { collection: collection.to_owned(), status: 503 })
    }
}

/// Wraps a store and delays every read.
pub struct SlowStore {
    inner: MemoryStore,
    delay: Duration,
}

impl SlowStore {
    #[must_use]
    pub fn new(inner: MemoryStore, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait::async_trait]
impl DocumentStore for SlowStore {
    fn backend(&self) -> &'static str {
        "slow"
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list(collection).await
    }
}

#[must_use]
pub fn skill_doc(id: &str, name: &str) -> Document {
    Document::from_value(id, json!({ "name": name, "image": format!("/assets/images/{id}.svg") }))
}

#[must_use]
pub fn project_doc(id: &str, title: &str) -> Document {
    Document::from_value(
        id,
        json!({
            "title": title,
            "description": format!("{title} description"),
            "technologies": ["Rust", "Axum"],
            "image": "https://i.ibb.co/demo/cover.png",
            "link": "https://example.com",
            "features": ["Server rendered", "Fast"],
            "challenges": ["Cold starts"],
            "solutions": ["Warm pool"]
        }),
    )
}

/// A memory store with every collection populated.
pub async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store
        .insert_collection(
            "about",
            vec![Document::from_value(
                "main",
                json!({ "name": "Remote Person", "subtitle": "Engineer", "bio1": "I like [Rust].", "imageUrl": "/assets/me.png" }),
            )],
        )
        .await;
    store
        .insert_collection(
            "milestones",
            vec![
                Document::from_value("m1", json!({ "year": "04/03/2024-05/04/2025", "title": "Older" })),
                Document::from_value("m2", json!({ "year": "15/08/2025-present", "title": "Current" })),
            ],
        )
        .await;
    store
        .insert_collection("skills", vec![skill_doc("2", "Tokio"), skill_doc("1", "Rust")])
        .await;
    store
        .insert_collection("projects", vec![project_doc("zeta", "Zeta"), project_doc("alpha", "Alpha")])
        .await;
    store
}

/// `AppState` over the given store with default config and built-in content.
#[must_use]
pub fn test_app_state(store: Arc<dyn DocumentStore>) -> AppState {
    let config = SiteConfig { fetch_timeout: Duration::from_millis(300), ..SiteConfig::default() };
    AppState::new(store, SiteContent::builtin(), config).unwrap()
}

// =============================================================================
// IMAGE HOST STUB
// =============================================================================

/// Bytes served by the stub's `/cat.png`.
pub const STUB_IMAGE: &[u8] = b"\x89PNG stub image";

/// Local image hosts on `127.0.0.1`.
///
/// `base` serves:
/// - `/cat.png`: a small PNG
/// - `/page.html`: HTML
/// - `/hop`: 302 to `/cat.png` on the same host
/// - `/bounce`: 302 to `/secret` via `localhost`, a different host
/// - `/secret`: a PNG that counts its hits
///
/// `endless` answers any request with a PNG that has no length and streams
/// past `MAX_IMAGE_BYTES`.
pub struct ImageStub {
    pub base: String,
    pub endless: String,
    pub secret_hits: Arc<AtomicUsize>,
}

impl ImageStub {
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

pub async fn spawn_image_stub() -> ImageStub {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let secret_hits = Arc::new(AtomicUsize::new(0));

    let hits = Arc::clone(&secret_hits);
    let app = axum::Router::new()
        .route("/cat.png", get(|| async { ([(CONTENT_TYPE, "image/png")], STUB_IMAGE) }))
        .route("/page.html", get(|| async { ([(CONTENT_TYPE, "text/html")], "<p>not an image</p>") }))
        .route(
            "/hop",
            get(move || async move { (StatusCode::FOUND, [(LOCATION, format!("http://127.0.0.1:{port}/cat.png"))]) }),
        )
        .route(
            "/bounce",
            get(move || async move { (StatusCode::FOUND, [(LOCATION, format!("http://localhost:{port}/secret"))]) }),
        )
        .route(
            "/secret",
            get(move || {
                hits.fetch_add(1, Ordering::SeqCst);
                async { ([(CONTENT_TYPE, "image/png")], STUB_IMAGE) }
            }),
        );
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let endless = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endless_addr = endless.local_addr().unwrap();
    tokio::spawn(serve_endless_image(endless));

    ImageStub { base: format!("http://127.0.0.1:{port}"), endless: format!("http://{endless_addr}/endless.png"), secret_hits }
}

/// Raw HTTP/1.1: headers without a length, then 64 KiB chunks until the
/// client hangs up.
async fn serve_endless_image(listener: tokio::net::TcpListener) {
    const HEAD: &[u8] = b"HTTP/1.1 200 OK\r\ncontent-type: image/png\r\nconnection: close\r\n\r\n";
    let chunk = vec![0u8; 64 * 1024];
    while let Ok((mut socket, _)) = listener.accept().await {
        let chunk = chunk.clone();
        tokio::spawn(async move {
            let mut request = [0u8; 1024];
            if socket.read(&mut request).await.is_err() || socket.write_all(HEAD).await.is_err() {
                return;
            }
            while socket.write_all(&chunk).await.is_ok() {}
        });
    }
}
