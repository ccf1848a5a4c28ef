use std::sync::Arc;

use docforge::application::ports::{ObjectStorage, VectorIndex};
use docforge::application::services::{IndexSyncError, IndexSynchronizer};
use docforge::domain::{StorageKey, UploadedFile};
use docforge::infrastructure::storage::LocalObjectStorage;
use docforge::infrastructure::text_processing::FixedSizeSplitter;

use crate::helpers::{
    FixedEmbedder, MemoryStorage, RecordingIndex, UnavailableIndex, Utf8FileLoader,
};

fn synchronizer(
    storage: Arc<MemoryStorage>,
    index: Arc<dyn VectorIndex>,
    chunk_size: usize,
) -> IndexSynchronizer {
    IndexSynchronizer::new(
        storage,
        Arc::new(Utf8FileLoader),
        Arc::new(FixedSizeSplitter::new(chunk_size).unwrap()),
        Arc::new(FixedEmbedder),
        index,
    )
}

fn file(key: &str, name: &str) -> UploadedFile {
    UploadedFile::new(StorageKey::from_raw(key), name)
}

#[tokio::test]
async fn given_stale_uploads_when_synchronizing_then_deletes_only_keys_outside_request() {
    let storage = Arc::new(MemoryStorage::with_objects(&[
        ("uploads/1-old.txt", "old"),
        ("uploads/2-new.txt", "new text"),
        ("results/keep.pdf", "%PDF"),
    ]));
    let index = Arc::new(RecordingIndex::default());

    let summary = synchronizer(storage.clone(), index, 100)
        .synchronize(&[file("uploads/2-new.txt", "new.txt")])
        .await
        .unwrap();

    assert_eq!(summary.deleted_uploads, 1);
    assert_eq!(
        storage.deleted(),
        vec![StorageKey::from_raw("uploads/1-old.txt")]
    );
    assert_eq!(
        storage.keys(),
        vec!["results/keep.pdf".to_string(), "uploads/2-new.txt".to_string()]
    );
}

#[tokio::test]
async fn given_several_files_when_synchronizing_then_concatenates_text_before_chunking() {
    let storage = Arc::new(MemoryStorage::with_objects(&[
        ("uploads/1-a.txt", "abcd"),
        ("uploads/2-b.txt", "efgh"),
    ]));
    let index = Arc::new(RecordingIndex::default());

    let summary = synchronizer(storage, index.clone(), 3)
        .synchronize(&[file("uploads/1-a.txt", "a.txt"), file("uploads/2-b.txt", "b.txt")])
        .await
        .unwrap();

    let texts: Vec<String> = index.upserted().into_iter().map(|v| v.text).collect();
    assert_eq!(texts, vec!["abc", "def", "gh"]);
    assert_eq!(summary.chunks_indexed, 3);
}

#[tokio::test]
async fn given_populated_index_when_synchronizing_then_purges_before_upsert() {
    let storage = Arc::new(MemoryStorage::with_objects(&[("uploads/1-a.txt", "first")]));
    let index = Arc::new(RecordingIndex::default());
    let sync = synchronizer(storage.clone(), index.clone(), 100);

    sync.synchronize(&[file("uploads/1-a.txt", "a.txt")])
        .await
        .unwrap();
    storage.insert("uploads/2-b.txt", b"second");
    let summary = sync
        .synchronize(&[file("uploads/2-b.txt", "b.txt")])
        .await
        .unwrap();

    assert!(summary.index_reset);
    assert_eq!(index.purges(), 1);
    assert_eq!(index.record_count().await.unwrap(), 1);
}

#[tokio::test]
async fn given_empty_files_when_synchronizing_then_skips_upsert() {
    let storage = Arc::new(MemoryStorage::with_objects(&[("uploads/1-a.txt", "")]));
    let index = Arc::new(RecordingIndex::default());

    let summary = synchronizer(storage, index.clone(), 100)
        .synchronize(&[file("uploads/1-a.txt", "a.txt")])
        .await
        .unwrap();

    assert_eq!(summary.chunks_indexed, 0);
    assert!(index.upserted().is_empty());
}

#[tokio::test]
async fn given_unreadable_file_when_synchronizing_then_skips_it_and_indexes_the_rest() {
    let storage = Arc::new(MemoryStorage::with_objects(&[("uploads/2-good.txt", "good")]));
    storage.insert("uploads/1-bad.bin", &[0xff, 0xfe, 0xfd]);
    let index = Arc::new(RecordingIndex::default());

    let summary = synchronizer(storage, index.clone(), 100)
        .synchronize(&[
            file("uploads/1-bad.bin", "bad.bin"),
            file("uploads/2-good.txt", "good.txt"),
        ])
        .await
        .unwrap();

    assert_eq!(summary.chunks_indexed, 1);
    assert_eq!(index.upserted()[0].text, "good");
}

#[tokio::test]
async fn given_missing_object_when_synchronizing_then_fails_with_storage_error() {
    let storage = Arc::new(MemoryStorage::default());
    let index = Arc::new(RecordingIndex::default());

    let result = synchronizer(storage, index, 100)
        .synchronize(&[file("uploads/1-gone.txt", "gone.txt")])
        .await;

    assert!(matches!(result, Err(IndexSyncError::Storage(_))));
}

#[tokio::test]
async fn given_unreachable_index_when_synchronizing_then_reset_is_skipped_but_upsert_fails() {
    let storage = Arc::new(MemoryStorage::with_objects(&[("uploads/1-a.txt", "text")]));

    let result = synchronizer(storage, Arc::new(UnavailableIndex), 100)
        .synchronize(&[file("uploads/1-a.txt", "a.txt")])
        .await;

    assert!(matches!(result, Err(IndexSyncError::Index(_))));
}

#[tokio::test]
async fn given_upload_name_with_reserved_characters_when_synchronizing_then_keeps_current_upload() {
    let dir = tempfile::TempDir::new().unwrap();
    let storage = Arc::new(LocalObjectStorage::new(dir.path().to_path_buf()).unwrap());
    let current = StorageKey::from_raw("uploads/2-report [final] #2.txt");
    let stale = StorageKey::from_raw("uploads/1-notes {draft}.txt");
    storage
        .put(&current, b"current text".to_vec(), "text/plain")
        .await
        .unwrap();
    storage
        .put(&stale, b"old text".to_vec(), "text/plain")
        .await
        .unwrap();
    let index = Arc::new(RecordingIndex::default());
    let sync = IndexSynchronizer::new(
        storage.clone(),
        Arc::new(Utf8FileLoader),
        Arc::new(FixedSizeSplitter::new(100).unwrap()),
        Arc::new(FixedEmbedder),
        index.clone(),
    );

    let summary = sync
        .synchronize(&[UploadedFile::new(current.clone(), "report [final] #2.txt")])
        .await
        .unwrap();

    assert_eq!(summary.deleted_uploads, 1);
    assert_eq!(storage.list("uploads/").await.unwrap(), vec![current]);
    assert_eq!(index.upserted()[0].text, "current text");
}
