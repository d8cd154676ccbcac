//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `POCKETSHOP_AUTH_URL` - Login endpoint receiving the credential POST
//!
//! ## Optional
//! - `POCKETSHOP_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
//! - `POCKETSHOP_CATALOG_PATH` - External catalog JSON file; when absent the
//!   bundled demo catalog is used

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default HTTP timeout in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Login endpoint for the credential exchange
    pub auth_url: Url,
    /// Timeout applied to every HTTP request
    pub http_timeout: Duration,
    /// External catalog file; `None` means the bundled demo catalog
    pub catalog_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let auth_url = parse_url("POCKETSHOP_AUTH_URL", &get_required_env("POCKETSHOP_AUTH_URL")?)?;

        let timeout_secs = get_env_or_default(
            "POCKETSHOP_HTTP_TIMEOUT_SECS",
            &DEFAULT_HTTP_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("POCKETSHOP_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        let catalog_path = get_optional_env("POCKETSHOP_CATALOG_PATH").map(PathBuf::from);

        Ok(Self {
            auth_url,
            http_timeout: Duration::from_secs(timeout_secs),
            catalog_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a URL-valued variable.
fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_valid() {
        let url = parse_url("TEST_VAR", "https://auth.example.com/login").unwrap();
        assert_eq!(url.host_str(), Some("auth.example.com"));
    }

    #[test]
    fn test_parse_url_invalid() {
        let result = parse_url("TEST_VAR", "not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_missing_env_var_message_names_the_variable() {
        let err = get_required_env("POCKETSHOP_DOES_NOT_EXIST").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing environment variable: POCKETSHOP_DOES_NOT_EXIST"
        );
    }

    #[test]
    fn test_default_applies_when_unset() {
        let value = get_env_or_default("POCKETSHOP_DOES_NOT_EXIST", "10");
        assert_eq!(value, "10");
    }
}
