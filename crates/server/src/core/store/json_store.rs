//! JSON file storage
//!
//! One value per file, pretty-printed. Reads fall back to a default on any
//! failure; writes go to a temp file and are renamed over the target.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{ContentStore, CredentialStore, StoreError};
use crate::content::SiteContent;
use crate::core::models::Credential;

/// A single JSON document on disk.
pub struct JsonFileStore<T> {
    path: PathBuf,
    /// Serializes writers so two saves never interleave in the temp file.
    /// Callers still race on read-modify-write; the last save wins.
    write_lock: Mutex<()>,
    _doc: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _doc: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Read and parse the file. `Ok(None)` if it does not exist.
    pub async fn read(&self) -> Result<Option<T>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Read the file, or build `fallback()` if it is missing or unreadable.
    pub async fn load_or_else(&self, fallback: impl FnOnce() -> T + Send) -> T {
        match self.read().await {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("No file at {:?}, using default", self.path);
                fallback()
            }
            Err(e) => {
                warn!("Failed to load {:?}, using default: {}", self.path, e);
                fallback()
            }
        }
    }

    /// Save the value atomically.
    pub async fn write(&self, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.path.with_extension("tmp");

        // Write to temp file
        fs::write(&temp_path, json).await?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl ContentStore for JsonFileStore<SiteContent> {
    async fn load(&self) -> SiteContent {
        self.load_or_else(SiteContent::default).await
    }

    async fn save(&self, content: &SiteContent) -> Result<(), StoreError> {
        self.write(content).await
    }

    async fn seed_if_missing(&self) -> Result<bool, StoreError> {
        if self.exists().await {
            return Ok(false);
        }
        self.write(&SiteContent::default()).await?;
        info!("Seeded default content at {:?}", self.path);
        Ok(true)
    }
}

#[async_trait]
impl CredentialStore for JsonFileStore<Credential> {
    async fn load(&self) -> Credential {
        self.load_or_else(Credential::unset).await
    }

    async fn save(&self, credential: &Credential) -> Result<(), StoreError> {
        self.write(credential).await
    }
}
