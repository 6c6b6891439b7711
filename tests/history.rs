use std::path::PathBuf;

use postcraft::history::{HistoryStore, PostDraft};

fn temp_store_path(tag: &str) -> PathBuf {
    let unique = format!(
        "postcraft-history-{}-{}-{:x}.json",
        tag,
        std::process::id(),
        rand::random::<u32>()
    );
    std::env::temp_dir().join(unique)
}

fn draft(content: &str, score: u32) -> PostDraft {
    PostDraft {
        content: content.to_string(),
        topic: "testing".to_string(),
        tone: "professional".to_string(),
        score,
    }
}

#[tokio::test]
async fn save_orders_newest_first() {
    let path = temp_store_path("order");
    let store = HistoryStore::load(path.clone(), 50).await.unwrap();

    store.save(draft("first", 10)).await.unwrap();
    store.save(draft("second", 20)).await.unwrap();
    store.save(draft("third", 30)).await.unwrap();

    let records = store.list().await;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].content, "third");
    assert_eq!(records[2].content, "first");

    let _ = tokio::fs::remove_file(path).await;
}

#[tokio::test]
async fn store_caps_at_limit() {
    let path = temp_store_path("cap");
    let store = HistoryStore::load(path.clone(), 2).await.unwrap();

    store.save(draft("one", 1)).await.unwrap();
    store.save(draft("two", 2)).await.unwrap();
    store.save(draft("three", 3)).await.unwrap();

    let records = store.list().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].content, "three");
    assert_eq!(records[1].content, "two");

    let _ = tokio::fs::remove_file(path).await;
}

#[tokio::test]
async fn delete_by_id_and_reload() {
    let path = temp_store_path("delete");
    let store = HistoryStore::load(path.clone(), 50).await.unwrap();

    let kept = store.save(draft("keep me", 40)).await.unwrap();
    let doomed = store.save(draft("delete me", 50)).await.unwrap();

    assert!(store.delete(&doomed.id).await.unwrap());
    assert!(!store.delete("missing-id").await.unwrap());

    // Records survive a reload from disk.
    let reloaded = HistoryStore::load(path.clone(), 50).await.unwrap();
    let records = reloaded.list().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, kept.id);

    let _ = tokio::fs::remove_file(path).await;
}

#[tokio::test]
async fn update_content_sets_timestamp() {
    let path = temp_store_path("update");
    let store = HistoryStore::load(path.clone(), 50).await.unwrap();

    let record = store.save(draft("original", 60)).await.unwrap();
    assert!(record.updated_at_ms.is_none());

    assert!(store
        .update_content(&record.id, "revised".to_string())
        .await
        .unwrap());
    assert!(!store
        .update_content("missing-id", "revised".to_string())
        .await
        .unwrap());

    let records = store.list().await;
    assert_eq!(records[0].content, "revised");
    assert!(records[0].updated_at_ms.is_some());

    let _ = tokio::fs::remove_file(path).await;
}

#[tokio::test]
async fn clear_empties_the_store() {
    let path = temp_store_path("clear");
    let store = HistoryStore::load(path.clone(), 50).await.unwrap();

    store.save(draft("a", 1)).await.unwrap();
    store.save(draft("b", 2)).await.unwrap();
    store.clear().await.unwrap();

    assert!(store.list().await.is_empty());

    let _ = tokio::fs::remove_file(path).await;
}
