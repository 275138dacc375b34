//! Configuration management for the Nyumba web gateway
//!
//! This module handles loading and validating configuration from environment
//! variables, with support for different environments (development, staging,
//! production).

use std::env;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid environment value: {0}")]
    InvalidValue(String),

    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Parse environment from string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidValue(format!(
                "Invalid environment: '{}'. Expected: dev, staging, or prod",
                s
            ))),
        }
    }

    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Get the environment name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the listings backend REST API
    pub backend_api_url: String,

    /// Current environment
    pub environment: Environment,

    /// Server port
    pub port: u16,

    /// Timeout for backend round trips, in seconds
    pub request_timeout_secs: u64,

    /// CORS allowed origins
    pub cors_allowed_origins: Option<String>,

    /// Log level (RUST_LOG)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .map(|s| Environment::from_str(&s))
            .unwrap_or(Ok(Environment::Development))?;

        // Documented local-development default: a backend running on port 8000.
        let backend_api_url = env::var("BACKEND_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort("PORT must be a valid number".to_string()))?;

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .unwrap_or(10);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS").ok();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            backend_api_url,
            environment,
            port,
            request_timeout_secs,
            cors_allowed_origins,
            log_level,
        })
    }
}
