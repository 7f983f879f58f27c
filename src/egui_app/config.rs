use std::path::PathBuf;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default remote API origin (the deployed myFlix-style backend)
const DEFAULT_API_URL: &str = "https://movies-flix-al-f68cdd84f041.herokuapp.com";

/// Application configuration wrapper.
///
/// Resolves the API base URL from, in order: the `FLIXDESK_API_URL`
/// environment variable, the optional config file, the hardcoded
/// default origin.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        if let Ok(url) = std::env::var("FLIXDESK_API_URL") {
            let app = AppConfig::builder()
                .server_url(url)
                .build()
                .unwrap_or_default();
            return Self { app };
        }

        let app = Self::config_file_path()
            .and_then(|path| AppConfig::load(&path).ok())
            .unwrap_or_default();
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default resolution
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Location of the optional TOML config file
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flixdesk").join("config.toml"))
    }
}
