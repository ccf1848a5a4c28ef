use std::time::Duration;

use docforge::application::ports::{ObjectStorage, StorageError};
use docforge::domain::StorageKey;
use docforge::infrastructure::storage::LocalObjectStorage;

fn create_test_store() -> (tempfile::TempDir, LocalObjectStorage) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalObjectStorage::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_stored_object_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let key = StorageKey::from_raw("uploads/1-a.txt");

    store
        .put(&key, b"test content".to_vec(), "text/plain")
        .await
        .unwrap();

    let fetched = store.fetch(&key).await.unwrap();
    assert_eq!(fetched, b"test content");
}

#[tokio::test]
async fn given_objects_under_two_prefixes_when_listing_uploads_then_returns_only_uploads() {
    let (_dir, store) = create_test_store();
    for key in ["uploads/1-a.txt", "uploads/2-b.txt", "results/report.pdf"] {
        store
            .put(&StorageKey::from_raw(key), b"x".to_vec(), "text/plain")
            .await
            .unwrap();
    }

    let mut keys: Vec<String> = store
        .list("uploads/")
        .await
        .unwrap()
        .into_iter()
        .map(|k| k.to_string())
        .collect();
    keys.sort();

    assert_eq!(keys, vec!["uploads/1-a.txt", "uploads/2-b.txt"]);
}

#[tokio::test]
async fn given_stored_object_when_deleting_then_fetch_returns_not_found() {
    let (_dir, store) = create_test_store();
    let key = StorageKey::from_raw("uploads/1-a.txt");
    store.put(&key, b"data".to_vec(), "text/plain").await.unwrap();

    store.delete(&key).await.unwrap();

    let result = store.fetch(&key).await;
    assert!(matches!(result, Err(StorageError::NotFound(_))));
}

#[tokio::test]
async fn given_key_when_presigning_then_returns_file_url_inside_root() {
    let (dir, store) = create_test_store();
    let key = StorageKey::from_raw("results/report.pdf");

    let url = store
        .presign_download(&key, Duration::from_secs(600))
        .await
        .unwrap();

    assert!(url.starts_with("file://"));
    assert!(url.ends_with("results/report.pdf"));
    let root = dir.path().canonicalize().unwrap();
    assert!(url.contains(root.to_str().unwrap()));
}

#[tokio::test]
async fn given_key_with_reserved_characters_when_listing_then_returns_key_as_stored() {
    let (_dir, store) = create_test_store();
    let key = StorageKey::from_raw("uploads/1-report [final] #2.pdf");
    store.put(&key, b"%PDF".to_vec(), "application/pdf").await.unwrap();

    let listed = store.list("uploads/").await.unwrap();

    assert_eq!(listed, vec![key.clone()]);
    assert_eq!(store.fetch(&listed[0]).await.unwrap(), b"%PDF");
}
