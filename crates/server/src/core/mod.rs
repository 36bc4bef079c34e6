//! Core Service Layer
//!
//! Shared infrastructure for the landing page server: configuration,
//! errors, storage, authentication, avatar handling and routing.

pub mod auth;
pub mod avatar;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod store;

// Re-exports for convenience
pub use config::{AppState, ServerConfig};
pub use error::{Error, Result};
pub use router::router;
