//! Client configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so settings are read with
//! `option_env!` when the crate is compiled and parsed once at startup.
//! `App` parses it once and hands it to `HttpAuthApi::new`; nothing reads it
//! through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_LOGIN_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a positive number of seconds")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for backend API calls, without a trailing slash.
    pub api_base_url: String,
    /// Upper bound on a single login request.
    pub login_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            login_timeout: Duration::from_secs(DEFAULT_LOGIN_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `PORTAL_API_BASE_URL`: default `/api`
    /// - `PORTAL_LOGIN_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the timeout is not a positive integer.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::parse(option_env!("PORTAL_API_BASE_URL"), option_env!("PORTAL_LOGIN_TIMEOUT_SECS"))
    }

    /// Parse raw (possibly absent) values. Blank values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the timeout is not a positive integer.
    pub fn parse(api_base_url: Option<&str>, login_timeout_secs: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = match api_base_url.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.trim_end_matches('/').to_owned(),
            _ => DEFAULT_API_BASE_URL.to_owned(),
        };

        let login_timeout = match login_timeout_secs.map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                let secs = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| ConfigError::InvalidTimeout {
                        var: "PORTAL_LOGIN_TIMEOUT_SECS",
                        value: raw.to_owned(),
                    })?;
                Duration::from_secs(secs)
            }
            _ => Duration::from_secs(DEFAULT_LOGIN_TIMEOUT_SECS),
        };

        Ok(Self { api_base_url, login_timeout })
    }

    /// Join an API path (starting with `/`) onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}
