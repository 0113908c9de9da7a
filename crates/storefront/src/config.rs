//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_STORAGE_DIR` - Directory for persisted page state
//!   (default: `data`)
//! - `STOREFRONT_NOTIFY_DISMISS_MS` - Notification self-dismiss interval in
//!   milliseconds (default: 3000)

use std::path::PathBuf;

use chrono::TimeDelta;
use thiserror::Error;

use crate::notify::DEFAULT_DISMISS_MS;

/// Default directory for persisted page state.
const DEFAULT_STORAGE_DIR: &str = "data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the file-backed storage lives in
    pub storage_dir: PathBuf,
    /// How long notifications stay visible before self-dismissing
    pub notification_dismiss: TimeDelta,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir =
            PathBuf::from(get_env_or_default("STOREFRONT_STORAGE_DIR", DEFAULT_STORAGE_DIR));

        let dismiss_ms = get_env_or_default(
            "STOREFRONT_NOTIFY_DISMISS_MS",
            &DEFAULT_DISMISS_MS.to_string(),
        );
        let dismiss_ms = parse_dismiss_ms(&dismiss_ms).map_err(|reason| {
            ConfigError::InvalidEnvVar("STOREFRONT_NOTIFY_DISMISS_MS".to_owned(), reason)
        })?;

        Ok(Self {
            storage_dir,
            notification_dismiss: TimeDelta::milliseconds(dismiss_ms),
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            notification_dismiss: TimeDelta::milliseconds(DEFAULT_DISMISS_MS),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a dismiss interval, which must be a positive millisecond count.
fn parse_dismiss_ms(value: &str) -> Result<i64, String> {
    let ms: i64 = value
        .parse()
        .map_err(|_| format!("not a valid integer: {value:?}"))?;
    if ms <= 0 {
        return Err(format!("must be positive (got {ms})"));
    }
    Ok(ms)
}
