use std::time::Duration;

use crate::domain::StorageKey;

#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put(
        &self,
        key: &StorageKey,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    async fn fetch(&self, key: &StorageKey) -> Result<Vec<u8>, StorageError>;

    async fn delete(&self, key: &StorageKey) -> Result<(), StorageError>;

    /// Every key under `prefix`, in no particular order.
    async fn list(&self, prefix: &str) -> Result<Vec<StorageKey>, StorageError>;

    /// URL that lets the holder PUT an object at `key` until it expires.
    async fn presign_upload(
        &self,
        key: &StorageKey,
        expires_in: Duration,
    ) -> Result<String, StorageError>;

    /// URL that lets the holder GET the object at `key` until it expires.
    async fn presign_download(
        &self,
        key: &StorageKey,
        expires_in: Duration,
    ) -> Result<String, StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage configuration invalid: {0}")]
    Configuration(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("list failed: {0}")]
    ListFailed(String),
    #[error("signing failed: {0}")]
    SigningFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
