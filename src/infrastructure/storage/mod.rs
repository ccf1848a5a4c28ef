mod local_store;
mod s3_store;
mod store_factory;
mod store_path;

pub use local_store::LocalObjectStorage;
pub use s3_store::{S3Credentials, S3ObjectStorage};
pub use store_factory::ObjectStorageFactory;
