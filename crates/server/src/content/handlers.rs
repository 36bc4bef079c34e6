//! Content handlers

use axum::{extract::State, routing::post, routing::MethodRouter, Json};
use serde_json::Value;
use tracing::{info, warn};

use super::model::{Section, SiteData};
use crate::core::config::AppState;
use crate::core::error::{ApiJson, Error, Result};
use crate::core::models::OkResponse;

/// GET /data
pub async fn get_data(State(state): State<AppState>) -> Json<SiteData> {
    info!("GET /data");
    let content = state.content.load().await;
    let has_avatar = state.avatar.find().await.is_some();
    Json(SiteData {
        content,
        has_avatar,
    })
}

/// Load, swap one top-level field, save. The body is not validated.
pub async fn replace_section(state: &AppState, section: Section, body: Value) -> Result<()> {
    let mut content = state.content.load().await;
    content.replace(section, body);
    state.content.save(&content).await.map_err(|e| {
        warn!("Failed to save {}: {}", section, e);
        Error::from(e)
    })
}

/// POST handler replacing `section` with the request body.
pub fn section_route(section: Section) -> MethodRouter<AppState> {
    post(
        move |State(state): State<AppState>, ApiJson(body): ApiJson<Value>| async move {
            info!("POST /{}", section);
            replace_section(&state, section, body).await?;
            Ok::<_, Error>(Json(OkResponse::new()))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use crate::core::config::ServerConfig;
    use crate::core::models::AvatarUpload;
    use crate::core::store::{
        AvatarStore, MemoryAvatarStore, MemoryContentStore, MemoryCredentialStore,
    };
    use bytes::Bytes;
    use serde_json::json;
    use std::sync::Arc;

    fn state_with(content: Arc<MemoryContentStore>) -> AppState {
        AppState::new(
            ServerConfig::default(),
            content,
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(MemoryAvatarStore::new()),
        )
    }

    #[tokio::test]
    async fn test_replace_section_persists() {
        let content = Arc::new(MemoryContentStore::new());
        let state = state_with(content.clone());

        let channels = json!([{"title": "Only", "price": 1500, "tags": ["a", "b"]}]);
        replace_section(&state, Section::Channels, channels.clone())
            .await
            .unwrap();

        let stored = content.stored().unwrap();
        assert_eq!(stored.channels, channels);
        assert_eq!(stored.services, SiteContent::default().services);
    }

    #[tokio::test]
    async fn test_replace_section_keeps_existing_document() {
        let mut existing = SiteContent::default();
        existing.hero = json!({"title": "Mine", "order": 1});
        existing.about = json!({"name": "Me"});
        let content = Arc::new(MemoryContentStore::with_content(existing));
        let state = state_with(content.clone());

        replace_section(&state, Section::Cta, json!({"title": 7}))
            .await
            .unwrap();

        let stored = content.stored().unwrap();
        assert_eq!(stored.hero, json!({"title": "Mine", "order": 1}));
        assert_eq!(stored.about, json!({"name": "Me"}));
        assert_eq!(stored.cta, json!({"title": 7}));
    }

    #[tokio::test]
    async fn test_replace_section_accepts_any_shape() {
        let content = Arc::new(MemoryContentStore::new());
        let state = state_with(content.clone());

        replace_section(&state, Section::Services, json!("nope"))
            .await
            .unwrap();
        replace_section(&state, Section::Hero, Value::Null).await.unwrap();

        let stored = content.stored().unwrap();
        assert_eq!(stored.services, "nope");
        assert!(stored.hero.is_null());
    }

    #[tokio::test]
    async fn test_replace_section_write_failure_is_storage_error() {
        let state = state_with(Arc::new(MemoryContentStore::read_only()));

        let err = replace_section(&state, Section::Hero, json!({"title": "x"}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[tokio::test]
    async fn test_get_data_reports_avatar() {
        let avatar = Arc::new(MemoryAvatarStore::new());
        let state = AppState::new(
            ServerConfig::default(),
            Arc::new(MemoryContentStore::new()),
            Arc::new(MemoryCredentialStore::new()),
            avatar.clone(),
        );

        let Json(data) = get_data(State(state.clone())).await;
        assert!(!data.has_avatar);
        assert_eq!(data.content, SiteContent::default());

        avatar
            .store(AvatarUpload {
                data: Bytes::from_static(b"img"),
                content_type: "image/png".into(),
                file_name: None,
            })
            .await
            .unwrap();

        let Json(data) = get_data(State(state)).await;
        assert!(data.has_avatar);
    }
}
