//! Application configuration loaded from environment variables.

use axum::http::HeaderValue;
use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Document Store ===
    /// MongoDB connection string.
    pub mongo_url: String,

    /// Database holding the `contacts` and `appointments` collections.
    pub db_name: String,

    // === Server Configuration ===
    /// Comma-separated list of allowed origins, `*` for any.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_cors_origins() -> String {
    "*".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Filter directives for the log subscriber.
///
/// `--verbose` wins; otherwise `RUST_LOG` (from the process or `.env`)
/// is used when set, falling back to `info`.
pub fn log_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "lumis_api=debug,info".to_string();
    }

    rust_log
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(default_log_level)
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.mongo_url.trim().is_empty() {
            return Err("MONGO_URL is required".to_string());
        }

        if self.db_name.trim().is_empty() {
            return Err("DB_NAME is required".to_string());
        }

        self.cors_origins()?;

        Ok(())
    }

    /// Parsed CORS allow-list. `None` means every origin is allowed.
    pub fn cors_origins(&self) -> Result<Option<Vec<HeaderValue>>, String> {
        let entries: Vec<&str> = self
            .cors_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.is_empty() || entries.contains(&"*") {
            return Ok(None);
        }

        entries
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| format!("CORS_ORIGINS entry {origin:?} is not a valid origin"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
