//! Configuration module for vkn-server.
//!
//! Handles loading configuration from the TOML file, CLI arguments, and
//! environment variables. The tokens never live in the file: the access
//! token and the callback confirmation token are read from the
//! environment at startup.

pub mod file;

use crate::config::file::FileConfig;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;
use vkn_core::config::NotifierConfig;

/// Environment variable holding the community access token.
pub const ACCESS_TOKEN_ENV: &str = "VK_ACCESS_TOKEN";
/// Environment variable holding the callback confirmation token.
pub const CONFIRMATION_TOKEN_ENV: &str = "VK_CONFIRMATION_TOKEN";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("{0} environment variable not set")]
    MissingEnv(&'static str),
}

/// Loaded configuration result.
pub struct LoadedConfig {
    /// Address the HTTP server binds to.
    pub listen: SocketAddr,
    /// Immutable runtime settings handed to the event handler.
    pub notifier: NotifierConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    listen_override: Option<SocketAddr>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, listen_override: Option<SocketAddr>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    /// 4. Pull the tokens from the environment
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let mut file_config: FileConfig = toml::from_str(&config_content)?;

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }

        validate(&file_config)?;

        let access_token = require_env(ACCESS_TOKEN_ENV)?;
        let confirmation_token = require_env(CONFIRMATION_TOKEN_ENV)?;

        Ok(LoadedConfig {
            listen: file_config.server.listen,
            notifier: NotifierConfig::new(
                confirmation_token,
                access_token,
                file_config.vk.api_version,
                file_config.recipients.primary,
                file_config.recipients.control,
                file_config.group.id,
                file_config.group.name,
            ),
        })
    }
}

fn validate(config: &FileConfig) -> Result<(), ConfigError> {
    if config.group.id <= 0 {
        return Err(ConfigError::ValidationError(
            "group id must be positive".to_string(),
        ));
    }
    if config.group.name.is_empty() {
        return Err(ConfigError::ValidationError(
            "group name must not be empty".to_string(),
        ));
    }
    if config.recipients.primary == 0 {
        return Err(ConfigError::ValidationError(
            "primary recipient must be set".to_string(),
        ));
    }
    if config.recipients.control == Some(0) {
        return Err(ConfigError::ValidationError(
            "control recipient must not be zero; omit it instead".to_string(),
        ));
    }
    if config.vk.api_version.is_empty() {
        return Err(ConfigError::ValidationError(
            "api_version must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv(name))
}
