//! Avatar image kept as `avatar.<ext>` in the data directory.
//!
//! There is no metadata record; the file is discovered by listing the
//! directory and matching the `avatar.` prefix.

use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, warn};

use super::{
    avatar_content_type, avatar_file_name, validate_avatar, AvatarStore, StoreError,
    MAX_AVATAR_BYTES,
};
use crate::core::models::{AvatarImage, AvatarUpload};

/// Fixed base name of the avatar file.
pub const AVATAR_BASE: &str = "avatar";

#[derive(Clone, Debug)]
pub struct DirAvatarStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl DirAvatarStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_bytes: MAX_AVATAR_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Every file matching the avatar prefix. Normally zero or one.
    async fn list_avatars(&self) -> std::io::Result<Vec<String>> {
        let prefix = format!("{}.", AVATAR_BASE);
        let mut found = Vec::new();

        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(&prefix) && entry.file_type().await?.is_file() {
                    found.push(name.to_string());
                }
            }
        }

        found.sort();
        Ok(found)
    }

    async fn remove_all(&self) -> Result<(), StoreError> {
        let existing = match self.list_avatars().await {
            Ok(existing) => existing,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        for name in existing {
            match fs::remove_file(self.dir.join(&name)).await {
                Ok(()) => info!("Removed avatar {}", name),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl AvatarStore for DirAvatarStore {
    async fn find(&self) -> Option<String> {
        match self.list_avatars().await {
            Ok(found) => found.into_iter().next(),
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!("Failed to list {:?}: {}", self.dir, e);
                }
                None
            }
        }
    }

    async fn read(&self) -> Result<Option<AvatarImage>, StoreError> {
        let Some(file_name) = self.find().await else {
            return Ok(None);
        };

        let data = match fs::read(self.dir.join(&file_name)).await {
            Ok(data) => data,
            // Removed between listing and reading.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(AvatarImage {
            content_type: avatar_content_type(&file_name).to_string(),
            file_name,
            data: Bytes::from(data),
        }))
    }

    async fn store(&self, upload: AvatarUpload) -> Result<String, StoreError> {
        validate_avatar(&upload, self.max_bytes)?;

        fs::create_dir_all(&self.dir).await?;
        self.remove_all().await?;

        let file_name = avatar_file_name(upload.file_name.as_deref());
        fs::write(self.dir.join(&file_name), &upload.data).await?;

        info!("Stored avatar {} ({} bytes)", file_name, upload.data.len());
        Ok(file_name)
    }

    async fn remove(&self) -> Result<(), StoreError> {
        self.remove_all().await
    }
}
