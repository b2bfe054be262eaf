//! Client settings.
//!
//! Where the auth backend lives and how long a call may hang.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{DomainError, DomainResult};

/// Settings for the HTTP client and login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound for both the connect and the receive phase, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Path of the login endpoint, relative to `base_url`.
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_login_path() -> String {
    "auth/login".to_string()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            login_path: default_login_path(),
        }
    }
}

impl ClientSettings {
    /// Creates settings for `base_url` with the default timeout and path.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Returns the timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Checks the settings and returns the parsed base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or
    /// the timeout is zero.
    pub fn validate(&self) -> DomainResult<Url> {
        if self.timeout_secs == 0 {
            return Err(DomainError::InvalidTimeout(self.timeout_secs));
        }
        parse_base_url(&self.base_url)
    }
}

/// Parses a base URL, making sure it ends with `/` so paths append cleanly.
///
/// # Errors
///
/// Returns an error if the URL does not parse or its scheme is not http(s).
pub fn parse_base_url(raw: &str) -> DomainResult<Url> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url =
        Url::parse(&normalized).map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DomainError::InvalidUrl(format!(
            "unsupported scheme '{other}': {raw}"
        ))),
    }
}
