//! # Configuration Management for Kinderstore
//!
//! This crate provides centralized configuration structures for all Kinderstore
//! components, including the REST API client, auth session, and dispatch system.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{ApiConfig, AuthConfig, DispatchConfig};
//!
//! // API client configuration
//! let api_config = ApiConfig::new(
//!     "https://clinic.example.org/api".to_string(),
//!     15_000,
//!     "kinderstore".to_string(),
//! );
//!
//! // Auth configuration
//! let auth_config = AuthConfig::new("KINDERSTORE_API_TOKEN".to_string());
//!
//! // Dispatch system configuration
//! let dispatch_config = DispatchConfig::new(100, true);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [api]
//! base_url = "https://clinic.example.org/api"
//! timeout_ms = 15000
//! user_agent = "kinderstore"
//!
//! [auth]
//! token_env = "KINDERSTORE_API_TOKEN"
//!
//! [dispatch]
//! max_callbacks = 100
//! log_events = true
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from kinderstore.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./kinderstore.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub dispatch: DispatchConfig,
}

/// REST API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

/// Auth session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Name of the environment variable holding the bearer token at startup
    pub token_env: String,
}

/// Dispatch system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub max_callbacks: usize,
    pub log_events: bool,
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = {
            dotenvy::dotenv()?;

            // Try to load .env file for KINDERSTORE_CONFIG path
            if let Ok(config_path) = env::var("KINDERSTORE_CONFIG") {
                Self::from_file(&config_path)
            }
            // Try to load config from DEFAULT_CONFIG_PATH
            else if Path::new(DEFAULT_CONFIG_PATH).exists() {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            // Return error if neither .env file nor default config file exists
            else {
                Err(ConfigError::Invalid(format!(
                    "Config path must be specified in .env file as KINDERSTORE_CONFIG or in {} file",
                    DEFAULT_CONFIG_PATH
                )))
            }
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        // API validations
        if self.api.base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "API base_url cannot be empty".to_string(),
            ));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "API base_url must start with http:// or https://".to_string(),
            ));
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "API timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.api.user_agent.is_empty() {
            return Err(ConfigError::Invalid(
                "API user_agent cannot be empty".to_string(),
            ));
        }

        // Auth validations
        if self.auth.token_env.is_empty() {
            return Err(ConfigError::Invalid(
                "Auth token_env cannot be empty".to_string(),
            ));
        }

        // Dispatch validations
        if self.dispatch.max_callbacks == 0 {
            return Err(ConfigError::Invalid(
                "Dispatch max_callbacks must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl ApiConfig {
    /// Create a new API client configuration
    pub fn new(base_url: String, timeout_ms: u64, user_agent: String) -> Self {
        Self {
            base_url,
            timeout_ms,
            user_agent,
        }
    }
}

impl AuthConfig {
    /// Create a new auth configuration
    pub fn new(token_env: String) -> Self {
        Self { token_env }
    }
}

impl DispatchConfig {
    /// Create a new dispatch configuration
    pub fn new(max_callbacks: usize, log_events: bool) -> Self {
        Self {
            max_callbacks,
            log_events,
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_callbacks: 100,
            log_events: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            api: ApiConfig::new(
                "https://clinic.example.org/api".to_string(),
                15_000,
                "kinderstore".to_string(),
            ),
            auth: AuthConfig::new("KINDERSTORE_API_TOKEN".to_string()),
            dispatch: DispatchConfig::default(),
        }
    }

    #[test]
    fn validate_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let mut config = valid_config();
        config.api.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let mut config = valid_config();
        config.api.base_url = "ftp://clinic.example.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = valid_config();
        config.api.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_full_toml_document() {
        let doc = r#"
            [api]
            base_url = "https://clinic.example.org/api"
            timeout_ms = 15000
            user_agent = "kinderstore"

            [auth]
            token_env = "KINDERSTORE_API_TOKEN"

            [dispatch]
            max_callbacks = 50
            log_events = true
        "#;

        let config: AppConfig = toml::from_str(doc).unwrap();
        assert_eq!(config.api.timeout_ms, 15_000);
        assert_eq!(config.dispatch.max_callbacks, 50);
        assert!(config.validate().is_ok());
    }
}
