//! In-memory stores with the same contracts as the file-backed ones.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::io;

use super::{
    avatar_content_type, avatar_file_name, validate_avatar, AvatarStore, ContentStore,
    CredentialStore, StoreError, MAX_AVATAR_BYTES,
};
use crate::content::SiteContent;
use crate::core::models::{AvatarImage, AvatarUpload, Credential};

fn write_refused() -> StoreError {
    StoreError::Io(io::Error::new(
        io::ErrorKind::PermissionDenied,
        "memory store is read-only",
    ))
}

#[derive(Default)]
pub struct MemoryContentStore {
    doc: Mutex<Option<SiteContent>>,
    read_only: bool,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: SiteContent) -> Self {
        Self {
            doc: Mutex::new(Some(content)),
            read_only: false,
        }
    }

    /// A store whose saves always fail.
    pub fn read_only() -> Self {
        Self {
            doc: Mutex::new(None),
            read_only: true,
        }
    }

    /// What is actually stored, without the default fallback.
    pub fn stored(&self) -> Option<SiteContent> {
        self.doc.lock().clone()
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn load(&self) -> SiteContent {
        self.doc.lock().clone().unwrap_or_default()
    }

    async fn save(&self, content: &SiteContent) -> Result<(), StoreError> {
        if self.read_only {
            return Err(write_refused());
        }
        *self.doc.lock() = Some(content.clone());
        Ok(())
    }

    async fn seed_if_missing(&self) -> Result<bool, StoreError> {
        let present = self.doc.lock().is_some();
        if present {
            return Ok(false);
        }
        self.save(&SiteContent::default()).await?;
        Ok(true)
    }
}

#[derive(Default)]
pub struct MemoryCredentialStore {
    credential: Mutex<Credential>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash(hash: impl Into<String>) -> Self {
        Self {
            credential: Mutex::new(Credential::with_hash(hash)),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Credential {
        self.credential.lock().clone()
    }

    async fn save(&self, credential: &Credential) -> Result<(), StoreError> {
        *self.credential.lock() = credential.clone();
        Ok(())
    }
}

pub struct MemoryAvatarStore {
    current: Mutex<Option<AvatarImage>>,
    max_bytes: usize,
}

impl MemoryAvatarStore {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
            max_bytes: MAX_AVATAR_BYTES,
        }
    }
}

impl Default for MemoryAvatarStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvatarStore for MemoryAvatarStore {
    async fn find(&self) -> Option<String> {
        self.current
            .lock()
            .as_ref()
            .map(|image| image.file_name.clone())
    }

    async fn read(&self) -> Result<Option<AvatarImage>, StoreError> {
        Ok(self.current.lock().clone())
    }

    async fn store(&self, upload: AvatarUpload) -> Result<String, StoreError> {
        validate_avatar(&upload, self.max_bytes)?;

        let file_name = avatar_file_name(upload.file_name.as_deref());
        *self.current.lock() = Some(AvatarImage {
            content_type: avatar_content_type(&file_name).to_string(),
            file_name: file_name.clone(),
            data: upload.data,
        });
        Ok(file_name)
    }

    async fn remove(&self) -> Result<(), StoreError> {
        *self.current.lock() = None;
        Ok(())
    }
}
