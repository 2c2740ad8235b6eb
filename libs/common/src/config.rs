//! Client configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `COOKBOOK_*` environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;

use crate::error::ClientResult;

/// Recipe service used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// How long a notification stays on screen after it is first rendered
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 5000;

/// Configuration for the Cookbook client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the recipe service (e.g., "https://api.example.com")
    pub api_base_url: String,
    /// Directory holding the persisted session record
    pub storage_dir: PathBuf,
    /// Notification lifetime in milliseconds
    pub notification_timeout_ms: u64,
}

impl ClientConfig {
    /// Create a new ClientConfig from `cookbook.toml` (if present) and environment variables
    ///
    /// # Environment Variables
    /// - `COOKBOOK_API_BASE_URL`: Recipe service URL (default: "http://localhost:5000")
    /// - `COOKBOOK_STORAGE_DIR`: Session storage directory (default: platform data dir + "cookbook")
    /// - `COOKBOOK_NOTIFICATION_TIMEOUT_MS`: Notification lifetime (default: 5000)
    pub fn from_env() -> ClientResult<Self> {
        Self::load(None)
    }

    /// Load configuration, reading `file` instead of `cookbook.toml` when given.
    ///
    /// An explicitly named file must exist; the implicit one is optional.
    pub fn load(file: Option<&Path>) -> ClientResult<Self> {
        let builder = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default(
                "storage_dir",
                default_storage_dir().to_string_lossy().to_string(),
            )?
            .set_default(
                "notification_timeout_ms",
                DEFAULT_NOTIFICATION_TIMEOUT_MS as i64,
            )?;

        let builder = match file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("cookbook").required(false)),
        };

        let config: ClientConfig = builder
            .add_source(Environment::with_prefix("COOKBOOK").try_parsing(true))
            .build()?
            .try_deserialize()?;

        info!(
            "Loaded configuration: api_base_url={}, storage_dir={}",
            config.api_base_url,
            config.storage_dir.display()
        );
        Ok(config)
    }

    /// Notification lifetime as a Duration
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cookbook")
}
