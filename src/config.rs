//! Session configuration loaded from TOML.

use crate::games::tictactoe::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial name for `X`.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Initial name for `O`.
    #[serde(default = "default_player_o")]
    player_o: String,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_player_x() -> String {
    DEFAULT_X_NAME.to_string()
}

#[instrument]
fn default_player_o() -> String {
    DEFAULT_O_NAME.to_string()
}

#[instrument]
fn default_log_filter() -> String {
    "warn,strictly_rematch=info".to_string()
}

impl SessionConfig {
    /// Creates a configuration with the given player names.
    #[instrument(skip(player_x, player_o))]
    pub fn new(player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        Self {
            player_x: player_x.into(),
            player_o: player_o.into(),
            log_filter: default_log_filter(),
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(x = %config.player_x, o = %config.player_o, "Config loaded successfully");
        Ok(config)
    }

    /// Serializes this configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Player registry seeded with the configured names.
    pub fn registry(&self) -> PlayerRegistry {
        PlayerRegistry::new(self.player_x.clone(), self.player_o.clone())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(default_player_x(), default_player_o())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
