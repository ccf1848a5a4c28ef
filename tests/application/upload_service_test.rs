use std::sync::Arc;
use std::time::Duration;

use docforge::application::services::{UploadError, UploadService};

use crate::helpers::MemoryStorage;

#[tokio::test]
async fn given_file_name_when_presigning_then_key_is_under_uploads() {
    let service = UploadService::new(Arc::new(MemoryStorage::default()), Duration::from_secs(300));

    let presigned = service.presign("a.pdf").await.unwrap();

    assert!(presigned.key.is_upload());
    assert!(presigned.key.as_str().ends_with("-a.pdf"));
    assert!(presigned.upload_url.contains("method=PUT"));
    assert!(presigned.upload_url.contains("expires=300"));
}

#[tokio::test]
async fn given_path_like_name_when_presigning_then_keeps_only_base_name() {
    let service = UploadService::new(Arc::new(MemoryStorage::default()), Duration::from_secs(300));

    let presigned = service.presign("../secrets/a.pdf").await.unwrap();

    assert!(!presigned.key.as_str().contains(".."));
    assert!(presigned.key.as_str().ends_with("-a.pdf"));
}

#[tokio::test]
async fn given_blank_name_when_presigning_then_returns_missing_file_name() {
    let service = UploadService::new(Arc::new(MemoryStorage::default()), Duration::from_secs(300));

    let result = service.presign("  ").await;

    assert!(matches!(result, Err(UploadError::MissingFileName)));
}
