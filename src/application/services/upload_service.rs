use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::application::ports::{ObjectStorage, StorageError};
use crate::domain::StorageKey;

/// Issues presigned PUT URLs for client uploads under `uploads/`.
pub struct UploadService {
    storage: Arc<dyn ObjectStorage>,
    link_ttl: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUpload {
    pub upload_url: String,
    pub key: StorageKey,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>, link_ttl: Duration) -> Self {
        Self { storage, link_ttl }
    }

    pub async fn presign(&self, file_name: &str) -> Result<PresignedUpload, UploadError> {
        let file_name = base_name(file_name);
        if file_name.is_empty() {
            return Err(UploadError::MissingFileName);
        }

        let key = StorageKey::for_upload(file_name, Utc::now().timestamp_millis());
        let upload_url = self.storage.presign_upload(&key, self.link_ttl).await?;

        Ok(PresignedUpload { upload_url, key })
    }
}

/// Last path segment, so a client-supplied name cannot escape `uploads/`.
fn base_name(file_name: &str) -> &str {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Missing fileName")]
    MissingFileName,
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}
