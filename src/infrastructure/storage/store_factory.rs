use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ObjectStorage, StorageError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalObjectStorage;
use super::s3_store::{S3Credentials, S3ObjectStorage};

pub struct ObjectStorageFactory;

impl ObjectStorageFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn ObjectStorage>, StorageError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let store = LocalObjectStorage::new(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::S3 => {
                let bucket = settings
                    .bucket
                    .as_deref()
                    .ok_or_else(|| StorageError::Configuration("storage.bucket required".into()))?;
                let store = S3ObjectStorage::new(S3Credentials {
                    bucket,
                    region: &settings.region,
                    access_key_id: settings.access_key_id.as_deref(),
                    secret_access_key: settings.secret_access_key.as_deref(),
                    endpoint: settings.endpoint.as_deref(),
                })?;
                Ok(Arc::new(store))
            }
        }
    }
}
