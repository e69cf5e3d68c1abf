//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::error::{ClientError, ClientResult};

/// Default API server, matching the development backend
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the configured API URL
pub const API_URL_ENV: &str = "CORKBOARD_API_URL";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Corkboard API server
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Get the configuration file path
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".corkboard")
            .join("config.toml")
    }

    /// Resolve configuration: environment variable first, then the config
    /// file, then defaults.
    pub async fn resolve() -> ClientResult<Self> {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            return Ok(Self { api_url: url });
        }
        Self::load().await
    }

    /// Load configuration from disk
    pub async fn load() -> ClientResult<Self> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| ClientError::config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ClientError::config(format!("Invalid config format: {}", e)))
    }

    /// Save configuration to disk
    pub async fn save(&self) -> ClientResult<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ClientError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ClientError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .await
            .map_err(|e| ClientError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_config_round_trip() {
        let config = ClientConfig {
            api_url: "https://boards.example.com".to_string(),
        };
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.api_url, config.api_url);
    }
}
