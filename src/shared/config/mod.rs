//! Application configuration module
//!
//! Provides configuration types for the application. The on-disk format
//! is a small TOML file; everything in it is optional.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Remote API base URL
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the default (empty) configuration; a file
    /// that exists but does not parse is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("config read error: {0}")]
    Io(String),
    #[error("config parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_server_url() {
        let config = AppConfig::builder()
            .server_url("https://movies.example".to_string())
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("https://movies.example"));
    }

    #[test]
    fn test_builder_rejects_non_http_url() {
        let result = AppConfig::builder()
            .server_url("ftp://movies.example".to_string())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = AppConfig::load(Path::new("/nonexistent/flixdesk-config.toml")).unwrap();
        assert!(config.server_url.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let config: AppConfig =
            toml::from_str("server_url = \"https://movies.example\"").unwrap();
        assert_eq!(config.server_url.as_deref(), Some("https://movies.example"));
    }
}
