//! # Environment-Based Configuration
//!
//! Loads [`HttpRuntimeConfig`] from environment variables so deployments can
//! be tuned without rebuilding.
//!
//! ## Environment Variables
//!
//! - `TENDERSCORE_HOST` - Bind address (default: 0.0.0.0)
//! - `TENDERSCORE_PORT` - Bind port (default: 5001)
//! - `TENDERSCORE_MAX_BODY_SIZE` - Maximum request body size in bytes (default: 2097152 / 2MB)
//! - `TENDERSCORE_ENABLE_CORS` - Enable permissive CORS (default: true)
//! - `TENDERSCORE_ENABLE_OPENAPI` - Serve the OpenAPI document (default: true)

use crate::runtime::HttpRuntimeConfig;
use std::{env, net::IpAddr};

pub const ENV_HOST: &str = "TENDERSCORE_HOST";
pub const ENV_PORT: &str = "TENDERSCORE_PORT";
pub const ENV_MAX_BODY_SIZE: &str = "TENDERSCORE_MAX_BODY_SIZE";
pub const ENV_ENABLE_CORS: &str = "TENDERSCORE_ENABLE_CORS";
pub const ENV_ENABLE_OPENAPI: &str = "TENDERSCORE_ENABLE_OPENAPI";

/// Upper bound for `max_body_size`.
pub const MAX_BODY_SIZE_LIMIT: usize = 100 * 1024 * 1024;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable '{key}': {message}")]
    InvalidEnvVar { key: String, message: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Builder for `HttpRuntimeConfig` with environment variable support
#[derive(Debug, Clone)]
pub struct HttpRuntimeConfigBuilder {
    host: IpAddr,
    port: u16,
    max_body_size: usize,
    enable_cors: bool,
    enable_openapi: bool,
}

impl Default for HttpRuntimeConfigBuilder {
    fn default() -> Self {
        let defaults = HttpRuntimeConfig::default();
        Self {
            host: defaults.host,
            port: defaults.port,
            max_body_size: defaults.max_body_size,
            enable_cors: defaults.enable_cors,
            enable_openapi: defaults.enable_openapi,
        }
    }
}

impl HttpRuntimeConfigBuilder {
    /// Create a new builder with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if any variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::default();

        if let Some(host) = get_env_ip(ENV_HOST)? {
            builder = builder.host(host);
        }
        if let Some(port) = get_env_u16(ENV_PORT)? {
            builder = builder.port(port);
        }
        if let Some(max_size) = get_env_usize(ENV_MAX_BODY_SIZE)? {
            builder = builder.max_body_size(max_size);
        }
        if let Some(cors) = get_env_bool(ENV_ENABLE_CORS)? {
            builder = builder.enable_cors(cors);
        }
        if let Some(openapi) = get_env_bool(ENV_ENABLE_OPENAPI)? {
            builder = builder.enable_openapi(openapi);
        }

        Ok(builder)
    }

    #[must_use]
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set maximum request body size in bytes
    #[must_use]
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    #[must_use]
    pub fn enable_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    /// Enable or disable the `OpenAPI` document route
    #[must_use]
    pub fn enable_openapi(mut self, enable: bool) -> Self {
        self.enable_openapi = enable;
        self
    }

    /// Validate configuration and build `HttpRuntimeConfig`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if the configuration is invalid.
    pub fn build(self) -> Result<HttpRuntimeConfig, ConfigError> {
        self.validate()?;

        Ok(HttpRuntimeConfig {
            host: self.host,
            port: self.port,
            max_body_size: self.max_body_size,
            enable_cors: self.enable_cors,
            enable_openapi: self.enable_openapi,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_size == 0 {
            return Err(ConfigError::ValidationError(
                "max_body_size must be greater than 0".to_string(),
            ));
        }
        if self.max_body_size > MAX_BODY_SIZE_LIMIT {
            return Err(ConfigError::ValidationError(
                "max_body_size must be <= 100MB".to_string(),
            ));
        }

        Ok(())
    }
}

// Environment variable helper functions

fn get_env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(key) {
        Ok(val) => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!(
                    "invalid boolean value '{val}', expected true/false/1/0/yes/no/on/off"
                ),
            }),
        },
        Err(_) => Ok(None),
    }
}

fn get_env_u16(key: &str) -> Result<Option<u16>, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .parse::<u16>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("invalid u16 value '{val}': {e}"),
            }),
        Err(_) => Ok(None),
    }
}

fn get_env_usize(key: &str) -> Result<Option<usize>, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .parse::<usize>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("invalid usize value '{val}': {e}"),
            }),
        Err(_) => Ok(None),
    }
}

fn get_env_ip(key: &str) -> Result<Option<IpAddr>, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .parse::<IpAddr>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                message: format!("invalid IP address '{val}': {e}"),
            }),
        Err(_) => Ok(None),
    }
}
