//! # API Configuration
//!
//! Configuration management for the points API.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     POINTS_BIND_ADDR=127.0.0.1                                         │
//! │     POINTS_PORT=9000                                                   │
//! │     POINTS_INVALID_AMOUNT=reject                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $POINTS_CONFIG, or                                                 │
//! │     ~/.config/points/points.toml (Linux)                               │
//! │     ~/Library/Application Support/com.receipt.points/points.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:8080, invalid amounts score 0                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # points.toml
//! [server]
//! bind_addr = "0.0.0.0"
//! port = 8080
//!
//! [scoring]
//! invalid_amount = "zero"  # zero | reject
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "POINTS_CONFIG";

/// Configuration errors raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Invalid Amount Policy
// =============================================================================

/// What to do with a receipt whose total or item price is not a number.
///
/// ```text
/// ZERO (Default)                      REJECT
/// ──────────────                      ──────
/// • Receipt is stored with 0 points   • 400 {"msg": "... invalid amount ..."}
/// • Client still gets an id           • Nothing is stored
/// • Matches long-standing behaviour   • Client learns the receipt was bad
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidAmountPolicy {
    /// Score the whole receipt as 0.
    #[default]
    Zero,

    /// Refuse the receipt with a client error.
    Reject,
}

impl std::fmt::Display for InvalidAmountPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidAmountPolicy::Zero => write!(f, "zero"),
            InvalidAmountPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for InvalidAmountPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero" => Ok(InvalidAmountPolicy::Zero),
            "reject" => Ok(InvalidAmountPolicy::Reject),
            other => Err(ConfigError::InvalidValue {
                key: "invalid_amount".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Settings Sections
// =============================================================================

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address (default: 0.0.0.0 for all interfaces).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Scoring behaviour at the HTTP boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub invalid_amount: InvalidAmountPolicy,
}

// =============================================================================
// Main API Configuration
// =============================================================================

/// Complete API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub scoring: ScoringSettings,
}

impl ApiConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else `$POINTS_CONFIG`, else the
    ///    platform config directory)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`ApiConfig::load`] with an explicit variable lookup in place of the
    /// process environment.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(&lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.bind_addr.trim().is_empty() {
            return Err(ConfigError::Invalid("bind_addr must not be empty".into()));
        }

        if self.server.port == 0 {
            return Err(ConfigError::Invalid("port must be greater than 0".into()));
        }

        Ok(())
    }

    /// Applies `POINTS_*` overrides from a variable lookup.
    ///
    /// The lookup is `std::env::var` in production; tests pass a map.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("POINTS_BIND_ADDR") {
            debug!(addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr;
        }

        if let Some(port) = lookup("POINTS_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "POINTS_PORT".to_string(),
                value: port.clone(),
            })?;
            debug!(port = self.server.port, "Overriding port from environment");
        }

        if let Some(policy) = lookup("POINTS_INVALID_AMOUNT") {
            self.scoring.invalid_amount = policy.parse().map_err(|_| ConfigError::InvalidValue {
                key: "POINTS_INVALID_AMOUNT".to_string(),
                value: policy.clone(),
            })?;
            debug!(policy = %self.scoring.invalid_amount, "Overriding invalid amount policy from environment");
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "receipt", "points")
            .map(|dirs| dirs.config_dir().join("points.toml"))
    }
}
