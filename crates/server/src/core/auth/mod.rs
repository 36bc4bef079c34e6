//! Authentication Module
//!
//! One administrator, one shared secret. The client hashes the password
//! itself and sends the hash; the server stores it as-is and hands the same
//! value back as the bearer token. There are no sessions and no expiry: the
//! token stays valid until the password is reset.

pub mod handlers;
pub mod middleware;

use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::{info, warn};

use crate::core::error::{Error, Result};
use crate::core::models::Credential;
use crate::core::store::CredentialStore;

/// Shortest password hash accepted by setup.
pub const MIN_HASH_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unconfigured,
    Configured,
}

impl AuthState {
    pub fn of(credential: &Credential) -> Self {
        match credential.hash() {
            Some(_) => AuthState::Configured,
            None => AuthState::Unconfigured,
        }
    }
}

fn hashes_match(stored: &str, presented: &str) -> bool {
    stored.as_bytes().ct_eq(presented.as_bytes()).into()
}

/// True when a password is configured and `presented` equals it exactly.
pub fn is_authorized(stored: Option<&str>, presented: &str) -> bool {
    match stored {
        Some(stored) => hashes_match(stored, presented),
        None => false,
    }
}

/// Token carried by an `Authorization` header value.
///
/// The `Bearer ` prefix is optional; a missing header is an empty token.
pub fn bearer_token(header: Option<&str>) -> &str {
    let value = header.unwrap_or("");
    value.strip_prefix("Bearer ").unwrap_or(value)
}

/// Auth gate over the credential store.
pub struct AuthManager {
    credentials: Arc<dyn CredentialStore>,
}

impl AuthManager {
    pub fn new(credentials: Arc<dyn CredentialStore>) -> Self {
        Self { credentials }
    }

    pub async fn state(&self) -> AuthState {
        AuthState::of(&self.credentials.load().await)
    }

    /// Unconfigured -> Configured.
    pub async fn setup(&self, candidate: Option<&str>) -> Result<()> {
        if self.state().await == AuthState::Configured {
            warn!("[Auth] Setup refused: password already set");
            return Err(Error::AlreadyConfigured);
        }

        let hash = match candidate {
            Some(hash) if hash.chars().count() >= MIN_HASH_LEN => hash,
            _ => return Err(Error::InvalidHash),
        };

        self.credentials.save(&Credential::with_hash(hash)).await?;
        info!("[Auth] Password configured");
        Ok(())
    }

    /// Returns the bearer token (the stored hash) when `candidate` matches.
    pub async fn login(&self, candidate: Option<&str>) -> Result<String> {
        let credential = self.credentials.load().await;
        let stored = credential.hash().ok_or(Error::NotConfigured)?;

        match candidate {
            Some(candidate) if hashes_match(stored, candidate) => Ok(stored.to_string()),
            _ => Err(Error::WrongPassword),
        }
    }

    /// Configured -> Unconfigured, given the current hash.
    pub async fn reset(&self, current: Option<&str>) -> Result<()> {
        let credential = self.credentials.load().await;

        let matches = match (credential.hash(), current) {
            (Some(stored), Some(current)) => hashes_match(stored, current),
            _ => false,
        };
        if !matches {
            warn!("[Auth] Reset refused: wrong current password");
            return Err(Error::WrongPassword);
        }

        self.credentials.save(&Credential::unset()).await?;
        info!("[Auth] Password reset, server is unconfigured");
        Ok(())
    }

    /// Gate check for protected routes.
    pub async fn authorize(&self, presented: &str) -> Result<()> {
        let credential = self.credentials.load().await;
        match credential.hash() {
            None => Err(Error::NotConfigured),
            Some(stored) if is_authorized(Some(stored), presented) => Ok(()),
            Some(_) => Err(Error::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryCredentialStore;

    const HASH: &str = "abcdefghij";

    fn manager() -> AuthManager {
        AuthManager::new(Arc::new(MemoryCredentialStore::new()))
    }

    #[test]
    fn test_is_authorized() {
        assert!(is_authorized(Some(HASH), HASH));
        assert!(!is_authorized(Some(HASH), "abcdefghi"));
        assert!(!is_authorized(Some(HASH), ""));
        assert!(!is_authorized(None, ""));
        assert!(!is_authorized(None, HASH));
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(Some("Bearer abc")), "abc");
        assert_eq!(bearer_token(Some("abc")), "abc");
        assert_eq!(bearer_token(Some("Bearer ")), "");
        assert_eq!(bearer_token(None), "");
    }

    #[tokio::test]
    async fn test_setup_twice() {
        let auth = manager();
        assert_eq!(auth.state().await, AuthState::Unconfigured);

        auth.setup(Some(HASH)).await.unwrap();
        assert_eq!(auth.state().await, AuthState::Configured);

        assert!(matches!(
            auth.setup(Some("another-valid-hash")).await,
            Err(Error::AlreadyConfigured)
        ));
        assert!(matches!(auth.setup(None).await, Err(Error::AlreadyConfigured)));
        assert_eq!(auth.login(Some(HASH)).await.unwrap(), HASH);
    }

    #[tokio::test]
    async fn test_setup_validates_hash() {
        let auth = manager();
        assert!(matches!(auth.setup(None).await, Err(Error::InvalidHash)));
        assert!(matches!(auth.setup(Some("")).await, Err(Error::InvalidHash)));
        assert!(matches!(
            auth.setup(Some("123456789")).await,
            Err(Error::InvalidHash)
        ));
        assert_eq!(auth.state().await, AuthState::Unconfigured);

        auth.setup(Some("1234567890")).await.unwrap();
    }

    #[tokio::test]
    async fn test_login() {
        let auth = manager();
        assert!(matches!(auth.login(Some(HASH)).await, Err(Error::NotConfigured)));
        assert!(matches!(auth.login(None).await, Err(Error::NotConfigured)));

        auth.setup(Some(HASH)).await.unwrap();
        assert_eq!(auth.login(Some(HASH)).await.unwrap(), HASH);
        assert!(matches!(auth.login(Some("wrong-hash-value")).await, Err(Error::WrongPassword)));
        assert!(matches!(auth.login(None).await, Err(Error::WrongPassword)));
    }

    #[tokio::test]
    async fn test_reset() {
        let auth = manager();
        assert!(matches!(auth.reset(None).await, Err(Error::WrongPassword)));

        auth.setup(Some(HASH)).await.unwrap();
        assert!(matches!(auth.reset(Some("nope-nope-nope")).await, Err(Error::WrongPassword)));
        assert_eq!(auth.state().await, AuthState::Configured);

        auth.reset(Some(HASH)).await.unwrap();
        assert_eq!(auth.state().await, AuthState::Unconfigured);
        assert!(auth.login(Some(HASH)).await.is_err());
        assert!(matches!(auth.authorize(HASH).await, Err(Error::NotConfigured)));

        // Setup is open again after a reset.
        auth.setup(Some("fresh-hash-123")).await.unwrap();
    }

    #[tokio::test]
    async fn test_authorize() {
        let auth = manager();
        assert!(matches!(auth.authorize("").await, Err(Error::NotConfigured)));

        auth.setup(Some(HASH)).await.unwrap();
        auth.authorize(HASH).await.unwrap();
        assert!(matches!(auth.authorize("").await, Err(Error::Unauthorized)));
        assert!(matches!(auth.authorize("ABCDEFGHIJ").await, Err(Error::Unauthorized)));
    }

    #[tokio::test]
    async fn test_empty_stored_hash_is_unconfigured() {
        let auth = AuthManager::new(Arc::new(MemoryCredentialStore::with_hash("")));
        assert_eq!(auth.state().await, AuthState::Unconfigured);
        assert!(matches!(auth.authorize("").await, Err(Error::NotConfigured)));
        assert!(matches!(auth.login(Some("")).await, Err(Error::NotConfigured)));

        auth.setup(Some(HASH)).await.unwrap();
        assert_eq!(auth.state().await, AuthState::Configured);
    }
}
