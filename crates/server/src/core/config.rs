//! Server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use crate::content::SiteContent;
use crate::core::auth::AuthManager;
use crate::core::models::Credential;
use crate::core::store::{
    AvatarStore, ContentStore, CredentialStore, DirAvatarStore, JsonFileStore, MAX_AVATAR_BYTES,
};

pub const CONTENT_FILE: &str = "content.json";
pub const CREDENTIAL_FILE: &str = "credential.json";

/// Room for multipart boundaries and part headers on top of the image itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Configuration for the landing page server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Directory holding content, credential and avatar files
    pub data_dir: PathBuf,
    /// Interface to bind
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Max JSON request body in bytes
    pub max_json_body: usize,
    /// Max avatar image in bytes
    pub max_avatar_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            max_json_body: 2 * 1024 * 1024,
            max_avatar_bytes: MAX_AVATAR_BYTES,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `PORT`, `HOST` and `DATA_DIR`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            config.port = port;
        }
        if let Some(host) = std::env::var("HOST").ok().and_then(|s| s.parse().ok()) {
            config.host = host;
        }
        if let Ok(dir) = std::env::var("DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    /// Create config with custom data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn content_path(&self) -> PathBuf {
        self.data_dir.join(CONTENT_FILE)
    }

    pub fn credential_path(&self) -> PathBuf {
        self.data_dir.join(CREDENTIAL_FILE)
    }

    /// Body limit for the avatar upload route.
    pub fn avatar_body_limit(&self) -> usize {
        self.max_avatar_bytes + MULTIPART_OVERHEAD
    }

    /// Ensure the data directory exists
    pub async fn ensure_dirs(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }
}

/// App state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub content: Arc<dyn ContentStore>,
    pub auth: Arc<AuthManager>,
    pub avatar: Arc<dyn AvatarStore>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        content: Arc<dyn ContentStore>,
        credentials: Arc<dyn CredentialStore>,
        avatar: Arc<dyn AvatarStore>,
    ) -> Self {
        Self {
            config,
            content,
            auth: Arc::new(AuthManager::new(credentials)),
            avatar,
        }
    }

    /// File-backed state rooted at `config.data_dir`. Seeds the content file
    /// on first run.
    pub async fn open(config: ServerConfig) -> anyhow::Result<Self> {
        config.ensure_dirs().await?;

        let content: Arc<JsonFileStore<SiteContent>> =
            Arc::new(JsonFileStore::new(config.content_path()));
        content.seed_if_missing().await?;
        let credentials: Arc<JsonFileStore<Credential>> =
            Arc::new(JsonFileStore::new(config.credential_path()));
        let avatar =
            Arc::new(DirAvatarStore::new(&config.data_dir).with_max_bytes(config.max_avatar_bytes));

        Ok(Self::new(config, content, credentials, avatar))
    }
}
