//! Configuration management for folio
//!
//! Handles loading and validating configuration from TOML files, with
//! environment overrides for the values that change between deployments
//! (`PORT`, `QDRANT_URL`) and the API key, which never lives in the file —
//! the config stores the *name* of the env var that holds it.

mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Qdrant connection URL
    #[serde(default = "default_qdrant_url")]
    pub qdrant_url: String,

    /// Qdrant collection holding the biography chunks
    #[serde(default = "default_collection_name")]
    pub collection_name: String,

    /// Site owner, interpolated into the prompt template
    #[serde(default = "default_owner_name")]
    pub owner_name: String,

    /// Hosted model provider configuration
    #[serde(default)]
    pub cohere: CohereConfig,

    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind
    #[serde(default = "default_server_host")]
    pub host: String,

    /// Port to listen on (env `PORT` overrides)
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Cohere API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohereConfig {
    /// API base URL (overridable for tests)
    #[serde(default = "default_cohere_base_url")]
    pub base_url: String,

    /// Environment variable name holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Chat model identifier
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Chat sampling temperature
    #[serde(default = "default_chat_temperature")]
    pub temperature: f64,

    /// Embedding model identifier
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Embedding dimension (must match model)
    #[serde(default = "default_embedding_dimension")]
    pub embedding_dimension: usize,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub timeout_secs: u64,
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of chunks retrieved per question
    #[serde(default = "default_retrieval_top_k")]
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            qdrant_url: default_qdrant_url(),
            collection_name: default_collection_name(),
            owner_name: default_owner_name(),
            cohere: CohereConfig::default(),
            retrieval: RetrievalConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            base_url: default_cohere_base_url(),
            api_key_env: default_api_key_env(),
            chat_model: default_chat_model(),
            temperature: default_chat_temperature(),
            embedding_model: default_embedding_model(),
            embedding_dimension: default_embedding_dimension(),
            timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_retrieval_top_k(),
        }
    }
}

impl Config {
    /// Get the default config file path (~/.folio/config.toml)
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
            .join("config.toml")
    }

    /// Load configuration from a specific file path
    pub fn load(config_path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", config_path);

        if !config_path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from the default location if it
    /// exists, or fall back to built-in defaults. The site must come up
    /// with no config file at all.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Self::default_config_path();
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }

    /// Save configuration to a file (used by tests and for scaffolding)
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the provider API key from the environment, if configured.
    /// Empty or whitespace-only values count as unset.
    pub fn cohere_api_key(&self) -> Option<String> {
        std::env::var(&self.cohere.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Address string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.retrieval.top_k == 0 {
            return Err(Error::Config("retrieval.top_k must be at least 1".to_string()));
        }

        if self.cohere.embedding_dimension == 0 {
            return Err(Error::Config(
                "cohere.embedding_dimension must be positive".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.cohere.temperature) {
            return Err(Error::Config(
                "cohere.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }

        if self.collection_name.is_empty() {
            return Err(Error::Config("collection_name must not be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.collection_name, "mybio");
        assert_eq!(config.retrieval.top_k, 6);
        assert_eq!(config.cohere.chat_model, "command-r-plus");
        assert_eq!(config.cohere.embedding_model, "embed-english-v3.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        let mut config = Config::default();
        config.collection_name = "test_bio".to_string();
        config.server.port = 8080;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.collection_name, "test_bio");
        assert_eq!(loaded.server.port, 8080);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "collection_name = \"other_bio\"\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.collection_name, "other_bio");
        assert_eq!(loaded.retrieval.top_k, 6);
        assert_eq!(loaded.cohere.chat_model, "command-r-plus");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.retrieval.top_k = 0;
        assert!(config.validate().is_err());
        config.retrieval.top_k = 6;
        assert!(config.validate().is_ok());

        config.cohere.temperature = 3.0;
        assert!(config.validate().is_err());
        config.cohere.temperature = 0.4;

        config.collection_name.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file_errors() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(Config::load(&missing).is_err());
    }

    #[test]
    fn test_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9000;
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }
}
