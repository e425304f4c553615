use super::*;
use crate::content::{FromDocument, Skill};
use crate::state::test_helpers::{FailingStore, SlowStore, skill_doc};
use crate::store::memory::MemoryStore;

const TIMEOUT: Duration = Duration::from_millis(200);

fn fallback() -> Vec<Skill> {
    vec![Skill { id: String::new(), name: "Fallback".into(), image: "/assets/f.svg".into() }]
}

#[tokio::test]
async fn non_empty_collection_is_remote() {
    let store = MemoryStore::new();
    store.insert_collection("skills", vec![skill_doc("1", "Rust")]).await;

    let section = fetch_with_fallback(&store, &Collection::SKILLS, TIMEOUT, Skill::from_document, &fallback()).await;
    assert_eq!(section.source, ContentSource::Remote);
    assert_eq!(section.items.len(), 1);
    assert_eq!(section.items[0].name, "Rust");
    assert!(section.notice.is_none());
}

#[tokio::test]
async fn empty_collection_uses_fallback_silently() {
    let store = MemoryStore::new();
    let section = fetch_with_fallback(&store, &Collection::SKILLS, TIMEOUT, Skill::from_document, &fallback()).await;
    assert_eq!(section.source, ContentSource::Empty);
    assert_eq!(section.items, fallback());
    assert!(section.notice.is_none());
}

#[tokio::test]
async fn failure_yields_fallback_and_notice() {
    let section =
        fetch_with_fallback(&FailingStore, &Collection::PROJECTS, TIMEOUT, Skill::from_document, &fallback()).await;
    assert_eq!(section.source, ContentSource::Unavailable);
    assert_eq!(section.items, fallback());
    assert_eq!(section.notice.as_deref(), Some(Collection::PROJECTS.notice));
}

#[tokio::test]
async fn slow_read_times_out_into_fallback() {
    let inner = MemoryStore::new();
    inner.insert_collection("skills", vec![skill_doc("1", "Rust")]).await;
    let store = SlowStore::new(inner, Duration::from_secs(5));

    let section =
        fetch_with_fallback(&store, &Collection::SKILLS, Duration::from_millis(20), Skill::from_document, &fallback())
            .await;
    assert_eq!(section.source, ContentSource::Unavailable);
    assert_eq!(section.items, fallback());
    assert!(section.notice.is_some());
}

#[tokio::test]
async fn notice_never_appears_without_fallback() {
    let empty: Vec<Skill> = Vec::new();
    let section = fetch_with_fallback(&FailingStore, &Collection::SKILLS, TIMEOUT, Skill::from_document, &empty).await;
    assert!(section.notice.is_some());
    assert_eq!(section.items, empty);
    assert_eq!(section.source, ContentSource::Unavailable);
}

#[test]
fn map_items_keeps_source_and_notice() {
    let section = Section { items: vec![3, 1, 2], source: ContentSource::Unavailable, notice: Some("n".to_owned()) };
    let mapped = section.map_items(|mut items| {
        items.sort_unstable();
        items
    });
    assert_eq!(mapped.items, vec![1, 2, 3]);
    assert_eq!(mapped.source, ContentSource::Unavailable);
    assert_eq!(mapped.notice.as_deref(), Some("n"));
}

#[test]
fn source_serializes_snake_case() {
    assert_eq!(serde_json::to_value(ContentSource::Unavailable).unwrap(), serde_json::json!("unavailable"));
}
