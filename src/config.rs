//! Application configuration loaded from environment variables.
//!
//! The passcode is a shared family secret, not per-user auth. It is
//! loaded once at startup and compared in constant time by the auth
//! routes.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for CORS and cookie attributes
    pub frontend_url: String,
    /// GCP project ID
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Shared passcode gating activity mutations
    pub passcode: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            passcode: env::var("JOURNAL_PASSCODE")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("JOURNAL_PASSCODE"))?,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            passcode: "good-girl-junebug".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("JOURNAL_PASSCODE", "  secret-woof  ");

        let config = Config::from_env().expect("Config should load");

        // Passcode is trimmed so a stray space in the .env file doesn't lock everyone out
        assert_eq!(config.passcode, "secret-woof");
        assert_eq!(config.port, 8080);
    }
}
