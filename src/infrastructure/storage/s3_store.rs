use std::sync::Arc;
use std::time::Duration;

use futures::TryStreamExt;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path as StorePath;
use object_store::signer::Signer;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use reqwest::Method;
use tracing::{debug, instrument};

use crate::application::ports::{ObjectStorage, StorageError};
use crate::domain::StorageKey;

use super::store_path::{to_storage_key, to_store_path};

pub struct S3ObjectStorage {
    inner: Arc<AmazonS3>,
    bucket: String,
}

pub struct S3Credentials<'a> {
    pub bucket: &'a str,
    pub region: &'a str,
    pub access_key_id: Option<&'a str>,
    pub secret_access_key: Option<&'a str>,
    pub endpoint: Option<&'a str>,
}

impl S3ObjectStorage {
    /// Credentials left unset fall back to the `AWS_*` environment variables.
    pub fn new(credentials: S3Credentials<'_>) -> Result<Self, StorageError> {
        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(credentials.bucket)
            .with_region(credentials.region);

        if let Some(key_id) = credentials.access_key_id {
            builder = builder.with_access_key_id(key_id);
        }
        if let Some(secret) = credentials.secret_access_key {
            builder = builder.with_secret_access_key(secret);
        }
        if let Some(endpoint) = credentials.endpoint {
            builder = builder
                .with_endpoint(endpoint)
                .with_allow_http(endpoint.starts_with("http://"));
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
            bucket: credentials.bucket.to_string(),
        })
    }

    async fn sign(
        &self,
        method: Method,
        key: &StorageKey,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        let store_path = to_store_path(key);
        let url = self
            .inner
            .signed_url(method, &store_path, expires_in)
            .await
            .map_err(|e| StorageError::SigningFailed(e.to_string()))?;
        Ok(url.to_string())
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3ObjectStorage {
    #[instrument(skip(self, data), fields(bucket = %self.bucket, key = %key, size = data.len()))]
    async fn put(
        &self,
        key: &StorageKey,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());

        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.inner
            .put_opts(&to_store_path(key), PutPayload::from(data), options)
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        debug!("object_stored");
        Ok(())
    }

    async fn fetch(&self, key: &StorageKey) -> Result<Vec<u8>, StorageError> {
        let result = self
            .inner
            .get(&to_store_path(key))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => StorageError::NotFound(key.to_string()),
                other => StorageError::DownloadFailed(other.to_string()),
            })?;

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

    #[instrument(skip(self), fields(bucket = %self.bucket))]
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
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        self.sign(Method::PUT, key, expires_in).await
    }

    async fn presign_download(
        &self,
        key: &StorageKey,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        self.sign(Method::GET, key, expires_in).await
    }
}
