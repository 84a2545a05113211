use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A required setting is missing or invalid. Raised at backend
    /// construction, never deferred to first use.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied folder or name base contains a path separator or
    /// parent-directory sequence.
    #[error("invalid path component: {0:?}")]
    InvalidPathComponent(String),

    /// Filesystem backend failure (directory creation or file write).
    #[error("storage i/o error")]
    Io(#[from] std::io::Error),

    /// Object-store provider failure, original error preserved for
    /// diagnostics.
    #[error("object store error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Capability interface implemented by every storage backend.
///
/// `upload` persists the bytes under a freshly generated key; keys are
/// never reused, so an upload can never overwrite an existing object.
/// `public_url_from_key` is a pure function of the key and the backend's
/// frozen configuration: callers persist keys, never derived URLs.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Store `bytes` and return the new object's key.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        mime_type: Option<&str>,
        folder: &str,
        name_base: &str,
    ) -> Result<String, StorageError>;

    /// Derive the publicly resolvable URL for a stored key. No I/O.
    fn public_url_from_key(&self, key: &str) -> String;
}

/// Build a storage key: `{folder}/{name_base}-{epoch_millis}.{ext}`.
///
/// Millisecond clock resolution is the sole uniqueness disambiguator;
/// two uploads with identical folder and name base in the same
/// millisecond collide. Accepted at one-upload-per-user-action rates.
pub fn make_key(folder: &str, name_base: &str, ext: &str) -> Result<String, StorageError> {
    validate_component(folder)?;
    validate_component(name_base)?;
    let millis = chrono::Utc::now().timestamp_millis();
    Ok(format!("{}/{}-{}.{}", folder, name_base, millis, ext))
}

/// Reject empty components and anything that could escape the storage
/// root when the key is joined onto a filesystem path.
fn validate_component(component: &str) -> Result<(), StorageError> {
    if component.is_empty()
        || component.contains('/')
        || component.contains('\\')
        || component.contains("..")
    {
        return Err(StorageError::InvalidPathComponent(component.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn millis_of(key: &str) -> i64 {
        let stem = key.rsplit_once('.').unwrap().0;
        stem.rsplit_once('-').unwrap().1.parse().unwrap()
    }

    #[test]
    fn key_has_folder_name_millis_ext_shape() {
        let key = make_key("Fotos_Perfil", "u_42", "png").unwrap();
        assert!(key.starts_with("Fotos_Perfil/u_42-"));
        assert!(key.ends_with(".png"));
        // 13-digit epoch millis for any contemporary clock
        assert_eq!(millis_of(&key).to_string().len(), 13);
    }

    #[test]
    fn key_millis_are_non_decreasing() {
        let first = make_key("art", "a_1", "jpg").unwrap();
        let second = make_key("art", "a_1", "jpg").unwrap();
        assert!(millis_of(&second) >= millis_of(&first));
    }

    #[test]
    fn traversal_components_are_rejected() {
        for bad in ["", "..", "a/../b", "a/b", "a\\b", "..secret"] {
            assert!(matches!(
                make_key(bad, "u_1", "png"),
                Err(StorageError::InvalidPathComponent(_))
            ));
            assert!(matches!(
                make_key("Fotos_Perfil", bad, "png"),
                Err(StorageError::InvalidPathComponent(_))
            ));
        }
    }
}
