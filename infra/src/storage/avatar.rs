//! Filesystem implementation of the avatar content store.
//!
//! Decoded avatar bytes are written under `<upload_root>/Images`, which
//! is created on demand. The caller embeds a random identifier in the
//! file name, so concurrent uploads cannot collide on the destination.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use ag_core::errors::DomainError;
use ag_core::services::registration::AvatarStorage;

/// Avatar store writing images to the local filesystem
pub struct FilesystemAvatarStorage {
    /// Root directory for uploaded content
    upload_root: PathBuf,
}

impl FilesystemAvatarStorage {
    /// Create a new filesystem avatar store rooted at `upload_root`
    pub fn new(upload_root: impl Into<PathBuf>) -> Self {
        Self {
            upload_root: upload_root.into(),
        }
    }

    fn images_dir(&self) -> PathBuf {
        self.upload_root.join("Images")
    }
}

#[async_trait]
impl AvatarStorage for FilesystemAvatarStorage {
    async fn store(&self, bytes: &[u8], file_name: &str) -> Result<String, DomainError> {
        let images_dir = self.images_dir();

        fs::create_dir_all(&images_dir)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create upload directory: {}", e),
            })?;

        let file_path = images_dir.join(file_name);
        fs::write(&file_path, bytes)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to write avatar file: {}", e),
            })?;

        tracing::debug!(path = %file_path.display(), "stored avatar image");
        Ok(file_path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn stores_bytes_and_returns_path() {
        let root = std::env::temp_dir().join(format!("authgate-avatar-{}", Uuid::new_v4()));
        let storage = FilesystemAvatarStorage::new(&root);

        let bytes = vec![0xFFu8, 0xD8, 0xFF, 0xE0];
        let file_name = format!("{}_Ada_Lovelace.jpeg", Uuid::new_v4());

        let path = storage.store(&bytes, &file_name).await.unwrap();
        assert!(path.contains("Images"));
        assert!(path.ends_with(&file_name));

        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, bytes);

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn creates_images_directory_on_demand() {
        let root = std::env::temp_dir().join(format!("authgate-avatar-{}", Uuid::new_v4()));
        let storage = FilesystemAvatarStorage::new(&root);

        assert!(!root.exists());
        storage.store(b"img", "probe.jpeg").await.unwrap();
        assert!(root.join("Images").is_dir());

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
