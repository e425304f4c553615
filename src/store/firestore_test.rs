use super::*;
use serde_json::json;

#[test]
fn decode_value_unwraps_scalars() {
    assert_eq!(decode_value(&json!({"stringValue": "React"})), json!("React"));
    assert_eq!(decode_value(&json!({"booleanValue": true})), json!(true));
    assert_eq!(decode_value(&json!({"doubleValue": 1.5})), json!(1.5));
    assert_eq!(decode_value(&json!({"integerValue": "42"})), json!(42));
    assert_eq!(decode_value(&json!({"nullValue": null})), Value::Null);
    assert_eq!(
        decode_value(&json!({"timestampValue": "2024-03-04T00:00:00Z"})),
        json!("2024-03-04T00:00:00Z")
    );
}

#[test]
fn decode_value_unwraps_arrays_and_maps() {
    let raw = json!({
        "arrayValue": {"values": [{"stringValue": "Rust"}, {"stringValue": "Axum"}]}
    });
    assert_eq!(decode_value(&raw), json!(["Rust", "Axum"]));

    let raw = json!({
        "mapValue": {"fields": {"label": {"stringValue": "demo"}, "n": {"integerValue": "3"}}}
    });
    assert_eq!(decode_value(&raw), json!({"label": "demo", "n": 3}));
}

#[test]
fn decode_value_handles_empty_and_unknown() {
    assert_eq!(decode_value(&json!({"arrayValue": {}})), json!([]));
    assert_eq!(decode_value(&json!({"mapValue": {}})), json!({}));
    assert_eq!(decode_value(&json!({"mysteryValue": 1})), Value::Null);
    assert_eq!(decode_value(&json!("bare")), Value::Null);
    assert_eq!(decode_value(&json!({})), Value::Null);
}

#[test]
fn list_response_without_documents_is_empty() {
    let page: ListDocumentsResponse = serde_json::from_value(json!({})).unwrap();
    assert!(page.documents.is_empty());
    assert!(page.next_page_token.is_none());
}

#[test]
fn decode_document_takes_id_from_resource_name() {
    let page: ListDocumentsResponse = serde_json::from_value(json!({
        "documents": [{
            "name": "projects/demo/databases/(default)/documents/skills/02-rust",
            "fields": {"name": {"stringValue": "Rust"}, "image": {"stringValue": "/images/rust.svg"}}
        }],
        "nextPageToken": "abc"
    }))
    .unwrap();
    assert_eq!(page.next_page_token.as_deref(), Some("abc"));

    let doc = decode_document(page.documents.into_iter().next().unwrap());
    assert_eq!(doc.id, "02-rust");
    assert_eq!(doc.get("name"), Some(&json!("Rust")));
    assert_eq!(doc.get("image"), Some(&json!("/images/rust.svg")));
}

#[test]
fn collection_url_trims_trailing_slash() {
    let store = FirestoreStore::new(reqwest::Client::new(), "https://firestore.example.test/v1/", "site".into(), None);
    assert_eq!(
        store.collection_url("skills"),
        "https://firestore.example.test/v1/projects/site/databases/(default)/documents/skills"
    );
}

mod paging {
    use super::*;
    use axum::Router;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use std::collections::HashMap;

    const PATH: &str = "/v1/projects/site/databases/(default)/documents/skills";

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1")
    }

    async fn two_pages(Query(params): Query<HashMap<String, String>>) -> axum::Json<Value> {
        let doc = |id: &str, name: &str| {
            json!({
                "name": format!("projects/site/databases/(default)/documents/skills/{id}"),
                "fields": {"name": {"stringValue": name}}
            })
        };
        match params.get("pageToken").map(String::as_str) {
            None => axum::Json(json!({"documents": [doc("a", "Rust")], "nextPageToken": "page-2"})),
            Some(_) => axum::Json(json!({"documents": [doc("b", "Tokio")]})),
        }
    }

    #[tokio::test]
    async fn list_follows_page_tokens() {
        let base = serve(Router::new().route(PATH, get(two_pages))).await;
        let store = FirestoreStore::new(reqwest::Client::new(), &base, "site".into(), Some("k".into()));

        let docs = store.list("skills").await.unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(docs[1].get("name"), Some(&json!("Tokio")));
    }

    #[tokio::test]
    async fn error_status_is_reported_with_collection() {
        let base = serve(Router::new().route(PATH, get(|| async { StatusCode::FORBIDDEN }))).await;
        let store = FirestoreStore::new(reqwest::Client::new(), &base, "site".into(), None);

        let err = store.list("skills").await.unwrap_err();
        assert!(matches!(err, StoreError::Status { ref collection, status: 403 } if collection == "skills"));
    }
}
