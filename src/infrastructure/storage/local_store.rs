use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures::TryStreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ObjectStorage, StorageError};
use crate::domain::StorageKey;

use super::store_path::{to_storage_key, to_store_path};

/// Directory-backed storage for local runs. "Signed" URLs are plain `file://`
/// links and never expire.
pub struct LocalObjectStorage {
    inner: Arc<LocalFileSystem>,
}

impl LocalObjectStorage {
    pub fn new(base_path: PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&base_path)?;
        let root = base_path.canonicalize()?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| StorageError::Configuration(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    /// Points at the file as written on disk, with reserved characters encoded.
    fn file_url(&self, key: &StorageKey) -> Result<String, StorageError> {
        let path = self
            .inner
            .path_to_filesystem(&to_store_path(key))
            .map_err(|e| StorageError::SigningFailed(e.to_string()))?;
        Ok(format!("file://{}", path.display()))
    }
}

#[async_trait::async_trait]
impl ObjectStorage for LocalObjectStorage {
    async fn put(
        &self,
        key: &StorageKey,
        data: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        self.inner
            .put(&to_store_path(key), PutPayload::from(data))
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;
        Ok(())
    }

    async fn fetch(&self, key: &StorageKey) -> Result<Vec<u8>, StorageError> {
        let result = self
            .inner
            .get(&to_store_path(key))
            .await
            .map_err(|e| StorageError::NotFound(e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, key: &StorageKey) -> Result<(), StorageError> {
        self.inner
            .delete(&to_store_path(key))
            .await
            .map_err(|e| StorageError::DeleteFailed(e.to_string()))
    }

    async fn list(&self, prefix: &str) -> Result<Vec<StorageKey>, StorageError> {
        let prefix = StorePath::from(prefix.trim_end_matches('/'));
        let objects: Vec<_> = self
            .inner
            .list(Some(&prefix))
            .try_collect()
            .await
            .map_err(|e| StorageError::ListFailed(e.to_string()))?;

        Ok(objects
            .into_iter()
            .map(|meta| to_storage_key(&meta.location))
            .collect())
    }

    async fn presign_upload(
        &self,
        key: &StorageKey,
        _expires_in: Duration,
    ) -> Result<String, StorageError> {
        self.file_url(key)
    }

    async fn presign_download(
        &self,
        key: &StorageKey,
        _expires_in: Duration,
    ) -> Result<String, StorageError> {
        self.file_url(key)
    }
}
