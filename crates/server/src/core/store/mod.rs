//! Persistence for the landing page
//!
//! Three small stores, each behind an object-safe trait so handlers can run
//! against the files on disk or against the in-memory fakes in tests.

pub mod avatar_dir;
pub mod json_store;
pub mod memory;

use async_trait::async_trait;
use std::io;
use thiserror::Error;

use crate::content::SiteContent;
use crate::core::models::{AvatarImage, AvatarUpload, Credential};

pub use avatar_dir::DirAvatarStore;
pub use json_store::JsonFileStore;
pub use memory::{MemoryAvatarStore, MemoryContentStore, MemoryCredentialStore};

/// Largest accepted avatar image.
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

/// Errors raised by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upload rejected: {0}")]
    Rejected(#[from] AvatarRejection),
}

/// Why an avatar upload was refused. The previous avatar is left in place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AvatarRejection {
    #[error("not an image: {0}")]
    NotImage(String),

    #[error("image is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
}

/// The landing page document.
///
/// `load` never fails: a missing or corrupt file yields a fresh default
/// document. `save` overwrites the whole document.
#[async_trait]
pub trait ContentStore: Send + Sync + 'static {
    async fn load(&self) -> SiteContent;
    async fn save(&self, content: &SiteContent) -> Result<(), StoreError>;
    /// Write the defaults if nothing is stored yet. Returns `true` if it did.
    async fn seed_if_missing(&self) -> Result<bool, StoreError>;
}

/// The single admin credential. `load` never fails; absence means unset.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    async fn load(&self) -> Credential;
    async fn save(&self, credential: &Credential) -> Result<(), StoreError>;
}

/// At most one avatar image.
#[async_trait]
pub trait AvatarStore: Send + Sync + 'static {
    /// File name of the current avatar, if any.
    async fn find(&self) -> Option<String>;
    async fn read(&self) -> Result<Option<AvatarImage>, StoreError>;
    /// Validate, drop any previous avatar, then store. Returns the new file name.
    async fn store(&self, upload: AvatarUpload) -> Result<String, StoreError>;
    async fn remove(&self) -> Result<(), StoreError>;
}

/// Checks an upload against the image-only and size rules.
pub fn validate_avatar(upload: &AvatarUpload, limit: usize) -> Result<(), AvatarRejection> {
    let is_image = upload
        .content_type
        .parse::<mime::Mime>()
        .map(|m| m.type_() == mime::IMAGE)
        .unwrap_or(false);
    if !is_image {
        return Err(AvatarRejection::NotImage(upload.content_type.clone()));
    }

    if upload.data.len() > limit {
        return Err(AvatarRejection::TooLarge {
            size: upload.data.len(),
            limit,
        });
    }

    Ok(())
}

/// `avatar.<ext>` with the lower-cased extension of the client file name,
/// `avatar.jpg` when there is none.
pub fn avatar_file_name(original: Option<&str>) -> String {
    let ext = original
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| "jpg".to_string());
    format!("{}.{}", avatar_dir::AVATAR_BASE, ext)
}

/// Content type served for a stored avatar, from its extension.
pub fn avatar_content_type(file_name: &str) -> mime::Mime {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let known = match ext.as_deref() {
        Some("jpg") | Some("jpeg") => Some(mime::IMAGE_JPEG),
        Some("png") => Some(mime::IMAGE_PNG),
        Some("gif") => Some(mime::IMAGE_GIF),
        Some("svg") => Some(mime::IMAGE_SVG),
        Some("bmp") => Some(mime::IMAGE_BMP),
        Some("webp") => "image/webp".parse().ok(),
        Some("ico") => "image/x-icon".parse().ok(),
        Some("avif") => "image/avif".parse().ok(),
        _ => None,
    };
    known.unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn upload(content_type: &str, len: usize) -> AvatarUpload {
        AvatarUpload {
            data: Bytes::from(vec![7u8; len]),
            content_type: content_type.to_string(),
            file_name: Some("me.png".to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_images_up_to_limit() {
        assert!(validate_avatar(&upload("image/png", 10), 10).is_ok());
        assert!(validate_avatar(&upload("image/webp", 0), 10).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_images() {
        assert_eq!(
            validate_avatar(&upload("text/plain", 1), 10),
            Err(AvatarRejection::NotImage("text/plain".into()))
        );
        assert!(validate_avatar(&upload("", 1), 10).is_err());
        assert!(validate_avatar(&upload("application/octet-stream", 1), 10).is_err());
    }

    #[test]
    fn test_validate_rejects_oversized() {
        assert_eq!(
            validate_avatar(&upload("image/png", 11), 10),
            Err(AvatarRejection::TooLarge { size: 11, limit: 10 })
        );
    }

    #[test]
    fn test_avatar_file_name() {
        assert_eq!(avatar_file_name(Some("Photo.PNG")), "avatar.png");
        assert_eq!(avatar_file_name(Some("archive.tar.gz")), "avatar.gz");
        assert_eq!(avatar_file_name(Some("noext")), "avatar.jpg");
        assert_eq!(avatar_file_name(Some("../../etc/passwd.webp")), "avatar.webp");
        assert_eq!(avatar_file_name(None), "avatar.jpg");
    }

    #[test]
    fn test_avatar_content_type() {
        assert_eq!(avatar_content_type("avatar.jpg"), mime::IMAGE_JPEG);
        assert_eq!(avatar_content_type("avatar.PNG"), mime::IMAGE_PNG);
        assert_eq!(avatar_content_type("avatar.webp").essence_str(), "image/webp");
        assert_eq!(avatar_content_type("avatar.xyz"), mime::APPLICATION_OCTET_STREAM);
    }
}
