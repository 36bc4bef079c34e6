//! Avatar handlers
//!
//! The profile picture shown in the "about" block. Public read, admin
//! upload and delete.

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::core::config::AppState;
use crate::core::error::{Error, Result};
use crate::core::models::{AvatarUpload, OkResponse};

/// Multipart field carrying the image.
pub const AVATAR_FIELD: &str = "avatar";

/// GET /avatar
pub async fn get_avatar(State(state): State<AppState>) -> Result<(HeaderMap, Bytes)> {
    info!("GET /avatar");

    let image = state.avatar.read().await?.ok_or(Error::NotFound)?;

    let mut headers = HeaderMap::new();
    let content_type = HeaderValue::from_str(&image.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    headers.insert(header::CONTENT_TYPE, content_type);
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

    Ok((headers, image.data))
}

/// POST /avatar
pub async fn upload_avatar(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OkResponse>> {
    info!("POST /avatar - uploading avatar");

    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Failed to read multipart field: {}", e);
        Error::InvalidInput(e.body_text())
    })? {
        if field.name() != Some(AVATAR_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().unwrap_or("").to_string();
        let data = field.bytes().await.map_err(|e| {
            warn!("Failed to read avatar data: {}", e);
            Error::InvalidInput(e.body_text())
        })?;

        upload = Some(AvatarUpload {
            data,
            content_type,
            file_name,
        });
    }

    let upload = upload.ok_or(Error::MissingFile)?;
    let stored = state.avatar.store(upload).await?;

    info!("Avatar updated: {}", stored);
    Ok(Json(OkResponse::new()))
}

/// DELETE /avatar
pub async fn delete_avatar(State(state): State<AppState>) -> Result<Json<OkResponse>> {
    info!("DELETE /avatar");
    state.avatar.remove().await?;
    Ok(Json(OkResponse::new()))
}
