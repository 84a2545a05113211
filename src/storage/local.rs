use super::backend::{make_key, StorageBackend, StorageError};
use super::mime;
use crate::config::Config;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Filesystem-backed storage. Objects land under `{base_dir}/{key}` and
/// are served by the `/static` mount, so derived URLs are `/static/{key}`.
pub struct LocalStorage {
    base_dir: PathBuf,
}

impl LocalStorage {
    /// Create the backend, eagerly creating the root directory.
    /// Creation is idempotent; an existing directory is not an error.
    pub fn new(config: &Config) -> Result<Self, StorageError> {
        Self::with_base_dir(&config.local_upload_dir)
    }

    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir)?;
        Ok(LocalStorage { base_dir })
    }
}

#[async_trait]
impl StorageBackend for LocalStorage {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        mime_type: Option<&str>,
        folder: &str,
        name_base: &str,
    ) -> Result<String, StorageError> {
        let ext = mime::extension_exact(mime_type);
        let key = make_key(folder, name_base, ext)?;

        let dir = self.base_dir.join(folder);
        tokio::fs::create_dir_all(&dir).await?;

        // tokio::fs::write opens, writes and closes in one call, so the
        // handle is released on every exit path including write failure.
        let path = self.base_dir.join(&key);
        tokio::fs::write(&path, bytes).await?;

        Ok(key)
    }

    fn public_url_from_key(&self, key: &str) -> String {
        format!("/static/{}", key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_round_trips_bytes() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalStorage::with_base_dir(root.path()).unwrap();

        let bytes = b"\x89PNG\r\n\x1a\nfake-image-data".to_vec();
        let key = storage
            .upload(bytes.clone(), Some("image/png"), "Fotos_Perfil", "u_42")
            .await
            .unwrap();

        assert!(key.starts_with("Fotos_Perfil/u_42-"));
        assert!(key.ends_with(".png"));

        let stored = tokio::fs::read(root.path().join(&key)).await.unwrap();
        assert_eq!(stored, bytes);
    }

    #[tokio::test]
    async fn unknown_mime_stores_as_bin() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalStorage::with_base_dir(root.path()).unwrap();

        let key = storage
            .upload(vec![1, 2, 3], Some("application/pdf"), "docs", "d_1")
            .await
            .unwrap();
        assert!(key.ends_with(".bin"));
        assert!(root.path().join(&key).exists());
    }

    #[tokio::test]
    async fn traversal_in_folder_is_rejected_before_any_write() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalStorage::with_base_dir(root.path()).unwrap();

        let err = storage
            .upload(vec![1], Some("image/png"), "../escape", "u_1")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidPathComponent(_)));
        // nothing was created outside or inside the root
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn failed_write_yields_no_key_and_no_stored_object() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalStorage::with_base_dir(root.path()).unwrap();

        // a plain file where the folder directory should go makes the
        // write path fail regardless of the user running the tests
        std::fs::write(root.path().join("Fotos_Perfil"), b"blocker").unwrap();

        let err = storage
            .upload(vec![1, 2, 3], Some("image/png"), "Fotos_Perfil", "u_7")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));

        // no object landed anywhere under the root: the blocker file is
        // still the only entry, so no key could be resolvable
        let entries: Vec<_> = std::fs::read_dir(root.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].file_type().unwrap().is_file());
    }

    #[test]
    fn construction_is_idempotent_for_existing_dirs() {
        let root = tempfile::tempdir().unwrap();
        LocalStorage::with_base_dir(root.path()).unwrap();
        LocalStorage::with_base_dir(root.path()).unwrap();
    }

    #[test]
    fn public_url_is_static_mount_plus_key_and_pure() {
        let root = tempfile::tempdir().unwrap();
        let storage = LocalStorage::with_base_dir(root.path()).unwrap();

        let key = "Fotos_Perfil/u_42-1724500000000.png";
        assert_eq!(
            storage.public_url_from_key(key),
            "/static/Fotos_Perfil/u_42-1724500000000.png"
        );
        assert_eq!(
            storage.public_url_from_key(key),
            storage.public_url_from_key(key)
        );
    }
}
