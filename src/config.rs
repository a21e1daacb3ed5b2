//! Runtime configuration: API key, endpoint base, and transport timeout.

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.hunter.io/v2";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_VAR: &str = "HUNTER_API_KEY";
const BASE_URL_VAR: &str = "HUNTER_BASE_URL";
const TIMEOUT_VAR: &str = "HUNTER_TIMEOUT_SECS";

/// Immutable settings handed to [`Client::from_config`](crate::Client::from_config).
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Create a config with the given key and default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load from the process environment, reading a `.env` file first if one exists.
    ///
    /// Recognized variables: `HUNTER_API_KEY` (required), `HUNTER_BASE_URL`,
    /// and `HUNTER_TIMEOUT_SECS`.
    ///
    /// # Errors
    /// [`Error::MissingApiKey`] when no non-blank key is available, so a
    /// process fails at startup instead of on its first request.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from a specific `.env`-style file.
    ///
    /// Variables in the file take precedence; anything it does not set falls
    /// back to the process environment. The environment itself is left untouched.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] when the file is missing or malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |e: dotenvy::Error| Error::InvalidConfig {
            key: "config file",
            reason: format!("{}: {e}", path.display()),
        };

        let mut file_vars = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(invalid)? {
            let (key, value) = item.map_err(invalid)?;
            file_vars.insert(key, value);
        }
        debug!("Loaded {} variables from {}", file_vars.len(), path.display());

        Self::from_lookup(|key| {
            file_vars
                .get(key)
                .cloned()
                .or_else(|| std::env::var(key).ok())
        })
    }

    /// Build a config from an arbitrary variable source.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingApiKey)?;

        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| Error::InvalidConfig {
                    key: TIMEOUT_VAR,
                    reason: format!("expected whole seconds, got {raw:?}"),
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
