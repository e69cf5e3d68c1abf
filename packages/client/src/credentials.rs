//! Credential storage for the Corkboard API
//!
//! Holds at most one bearer token at a time: set on successful login,
//! cleared on logout, read before every authenticated request. The token
//! persists across sessions in a TOML file under the user's home directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::error::{ClientError, ClientResult};

/// Token information stored locally
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Process-wide session object holding the bearer token.
///
/// Injected into [`ApiClient`](crate::ApiClient) rather than accessed as an
/// ambient singleton, so the ordering core stays testable without a real
/// network boundary.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: Option<PathBuf>,
    token: Option<String>,
}

impl CredentialStore {
    /// Create a store backed by `~/.corkboard/auth.toml`
    pub fn new() -> ClientResult<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| ClientError::config("Could not determine home directory"))?;

        let path = home_dir.join(".corkboard").join("auth.toml");
        Ok(Self {
            path: Some(path),
            token: None,
        })
    }

    /// Create a store that never touches disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            token: None,
        }
    }

    /// Create a store backed by an explicit file path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            token: None,
        }
    }

    /// Load a previously saved token, if any
    pub async fn init(&mut self) -> ClientResult<()> {
        if let Err(e) = self.load_token().await {
            tracing::debug!("No stored credential loaded: {}", e);
        }
        Ok(())
    }

    async fn load_token(&mut self) -> ClientResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if !path.exists() {
            return Err(ClientError::config("No stored credential found"));
        }

        let content = fs::read_to_string(path).await?;
        let stored: StoredToken = toml::from_str(&content)
            .map_err(|e| ClientError::config(format!("Invalid credential file: {}", e)))?;

        self.token = Some(stored.token);
        Ok(())
    }

    async fn save_token(&self, token: &str) -> ClientResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let stored = StoredToken {
            token: token.to_string(),
        };
        let content = toml::to_string_pretty(&stored)
            .map_err(|e| ClientError::config(format!("Failed to serialize credential: {}", e)))?;

        fs::write(path, content).await?;
        Ok(())
    }

    /// Store a token, persisting it for future sessions
    pub async fn set(&mut self, token: String) -> ClientResult<()> {
        self.save_token(&token).await?;
        self.token = Some(token);
        Ok(())
    }

    /// The current bearer token, if one is set
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is currently held
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Clear the stored token (logout)
    pub async fn clear(&mut self) -> ClientResult<()> {
        if let Some(path) = &self.path {
            if path.exists() {
                fs::remove_file(path).await?;
            }
        }
        self.token = None;
        Ok(())
    }
}
