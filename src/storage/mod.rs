pub mod backend;
pub mod local;
pub mod mime;
pub mod s3;

pub use backend::{StorageBackend, StorageError};
pub use local::LocalStorage;
pub use s3::S3Storage;

use crate::config::{Config, StorageDriver};
use std::sync::Arc;

/// Build the storage backend selected by configuration. Called once at
/// startup; the returned handle lives in the application state for the
/// rest of the process.
pub async fn create_storage(config: &Config) -> Result<Arc<dyn StorageBackend>, StorageError> {
    match config.storage_driver {
        StorageDriver::Local => Ok(Arc::new(LocalStorage::new(config)?)),
        StorageDriver::S3 => Ok(Arc::new(S3Storage::new(config).await?)),
    }
}
