use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The single admin credential record.
///
/// `password_hash` is whatever the client produced; the server never hashes
/// it again. `None` means no password has been configured yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(
        rename = "passwordHash",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub password_hash: Option<String>,
}

impl Credential {
    pub fn with_hash(hash: impl Into<String>) -> Self {
        Self {
            password_hash: Some(hash.into()),
        }
    }

    /// The "password removed" record, persisted as `{}`.
    pub fn unset() -> Self {
        Self::default()
    }

    /// The configured hash. An empty stored string counts as unset.
    pub fn hash(&self) -> Option<&str> {
        self.password_hash.as_deref().filter(|hash| !hash.is_empty())
    }
}

/// An avatar image as received from a client.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub data: Bytes,
    /// Declared mime type of the upload.
    pub content_type: String,
    /// Original client-side file name, used only for its extension.
    pub file_name: Option<String>,
}

/// The stored avatar image.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarImage {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub ok: bool,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct AuthStatusResponse {
    #[serde(rename = "hasPassword")]
    pub has_password: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_credential_serializes_empty() {
        let json = serde_json::to_string(&Credential::unset()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_credential_wire_name() {
        let cred: Credential = serde_json::from_str(r#"{"passwordHash":"abcdefghij"}"#).unwrap();
        assert_eq!(cred.hash(), Some("abcdefghij"));

        let empty: Credential = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.hash(), None);
    }

    #[test]
    fn test_empty_stored_hash_is_unset() {
        let cred: Credential = serde_json::from_str(r#"{"passwordHash":""}"#).unwrap();
        assert_eq!(cred.hash(), None);
    }
}
