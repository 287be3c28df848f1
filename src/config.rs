//! Application configuration

use std::fmt;

use anyhow::{Context, Result};

/// Default port when `PORT` is absent or unparseable.
const DEFAULT_PORT: u16 = 8000;

/// Application configuration, read once from the environment at process
/// entry and shared through the application state.
#[derive(Clone)]
pub struct AppConfig {
    /// Server port
    pub port: u16,
    /// Additional (production) CORS origins, appended after the fixed
    /// development origins
    pub cors_origins: Vec<String>,
    /// MongoDB username
    pub mongodb_username: String,
    /// MongoDB password
    pub mongodb_password: String,
    /// MongoDB host, with or without a `mongodb+srv://` prefix
    pub mongodb_host: String,
    /// MongoDB database name
    pub mongodb_database: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            mongodb_username: std::env::var("MONGODB_USERNAME")
                .context("MONGODB_USERNAME is required")?,
            mongodb_password: std::env::var("MONGODB_PASSWORD")
                .context("MONGODB_PASSWORD is required")?,
            mongodb_host: std::env::var("MONGODB_HOST").context("MONGODB_HOST is required")?,
            mongodb_database: std::env::var("MONGODB_DATABASE")
                .context("MONGODB_DATABASE is required")?,
        })
    }
}

/// Split a comma-separated origin list, dropping empty segments.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// The password must never reach a log line, so Debug is written by hand.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("mongodb_username", &self.mongodb_username)
            .field("mongodb_password", &"<redacted>")
            .field("mongodb_host", &self.mongodb_host)
            .field("mongodb_database", &self.mongodb_database)
            .finish()
    }
}
