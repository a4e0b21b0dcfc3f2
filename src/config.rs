//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Service Metadata ===
    /// Service title shown on the landing page and in the API docs.
    #[serde(default = "default_app_title")]
    pub app_title: String,

    /// One-line service description.
    #[serde(default = "default_app_description")]
    pub app_description: String,

    // === Content ===
    /// Local directory served under the /static prefix.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_app_title() -> String {
    "Nudge AI".to_string()
}

fn default_app_description() -> String {
    "Nudge AI Brain".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.app_title.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "APP_TITLE must not be empty".to_string(),
            ));
        }

        if self.app_description.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "APP_DESCRIPTION must not be empty".to_string(),
            ));
        }

        if self.static_dir.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "STATIC_DIR must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_app_title(), "Nudge AI");
        assert_eq!(default_app_description(), "Nudge AI Brain");
        assert_eq!(default_static_dir(), "static");
        assert_eq!(default_port(), 8080);
    }

    #[test]
    fn validate_accepts_defaults() {
        let config = Config {
            app_title: default_app_title(),
            app_description: default_app_description(),
            static_dir: default_static_dir(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_title() {
        let config = Config {
            app_title: "  ".to_string(),
            app_description: default_app_description(),
            static_dir: default_static_dir(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_static_dir() {
        let config = Config {
            app_title: default_app_title(),
            app_description: default_app_description(),
            static_dir: String::new(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        };

        assert!(config.validate().is_err());
    }
}
