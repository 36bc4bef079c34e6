use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::store::StoreError;

#[derive(Debug)]
pub enum Error {
    // Auth Errors
    NotConfigured,
    Unauthorized,
    WrongPassword,
    AlreadyConfigured,
    InvalidHash,

    // Input Errors
    InvalidInput(String),
    MissingFile,

    // Avatar
    NotFound,

    // Generic
    Storage(String),
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotConfigured | Error::Unauthorized | Error::WrongPassword => {
                StatusCode::UNAUTHORIZED
            }
            Error::AlreadyConfigured
            | Error::InvalidHash
            | Error::InvalidInput(_)
            | Error::MissingFile => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Error::NotConfigured => "No password set".to_string(),
            Error::Unauthorized => "Unauthorized".to_string(),
            Error::WrongPassword => "Wrong password".to_string(),
            Error::AlreadyConfigured => "Password already set".to_string(),
            Error::InvalidHash => "Invalid hash".to_string(),
            Error::InvalidInput(msg) => msg.clone(),
            Error::MissingFile => "No file".to_string(),
            Error::NotFound => "Not found".to_string(),
            // Storage details stay in the log, not on the wire.
            Error::Storage(_) => "Storage failure".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Error::Storage(detail) = &self {
            tracing::error!("Storage failure: {}", detail);
        }

        let body = Json(json!({ "error": self.message() }));

        (self.status(), body).into_response()
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected(reason) => Error::InvalidInput(reason.to_string()),
            other => Error::Storage(other.to_string()),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidInput(rejection.body_text())
    }
}

/// `Json` with rejections reported as `{"error": ...}` bodies.
#[derive(Debug, axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::AvatarRejection;

    #[test]
    fn test_auth_errors_are_unauthorized() {
        assert_eq!(Error::NotConfigured.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::WrongPassword.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_input_errors_are_bad_request() {
        assert_eq!(Error::AlreadyConfigured.status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::InvalidHash.status(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::MissingFile.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            Error::InvalidInput("nope".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_storage_message_hides_detail() {
        let err = Error::Storage("/secret/path: permission denied".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Storage failure");
    }

    #[test]
    fn test_rejected_upload_is_bad_request() {
        let err: Error = StoreError::Rejected(AvatarRejection::NotImage("text/plain".into())).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("text/plain"));
    }
}
