//! Auth handlers

use crate::core::config::AppState;
use crate::core::error::{ApiJson, Result};
use crate::core::models::{AuthStatusResponse, OkResponse, TokenResponse};
use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use super::super::AuthState;

/// Hash fields are taken as raw JSON: a number, object or null never
/// matches and never fails extraction.
#[derive(Debug, Deserialize)]
pub struct PasswordRequest {
    #[serde(rename = "passwordHash")]
    pub password_hash: Option<Value>,
}

impl PasswordRequest {
    pub fn hash(&self) -> Option<&str> {
        self.password_hash.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(rename = "currentPasswordHash")]
    pub current_password_hash: Option<Value>,
}

impl ResetRequest {
    pub fn hash(&self) -> Option<&str> {
        self.current_password_hash.as_ref().and_then(Value::as_str)
    }
}

/// GET /auth/status
pub async fn status(State(state): State<AppState>) -> Json<AuthStatusResponse> {
    info!("GET /auth/status");
    Json(AuthStatusResponse {
        has_password: state.auth.state().await == AuthState::Configured,
    })
}

/// POST /auth/setup
pub async fn setup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PasswordRequest>,
) -> Result<Json<OkResponse>> {
    info!("POST /auth/setup");
    state.auth.setup(req.hash()).await?;
    Ok(Json(OkResponse::new()))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PasswordRequest>,
) -> Result<Json<TokenResponse>> {
    info!("POST /auth/login");
    match state.auth.login(req.hash()).await {
        Ok(token) => {
            info!("Admin logged in");
            Ok(Json(TokenResponse { ok: true, token }))
        }
        Err(e) => {
            warn!("Login failed: {:?}", e);
            Err(e)
        }
    }
}

/// POST /auth/reset
pub async fn reset(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ResetRequest>,
) -> Result<Json<OkResponse>> {
    info!("POST /auth/reset");
    state.auth.reset(req.hash()).await?;
    Ok(Json(OkResponse::new()))
}
