//! Client settings persistence.
//!
//! Stores settings in the platform-specific config directory:
//! - Linux/macOS: ~/.config/portico/settings.json
//! - Windows: %APPDATA%/portico/settings.json
//!
//! `PORTICO_BASE_URL` and `PORTICO_TIMEOUT_SECS` override the file.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use portico_domain::ClientSettings;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Overrides the base URL.
pub const BASE_URL_ENV: &str = "PORTICO_BASE_URL";

/// Overrides the timeout, in seconds.
pub const TIMEOUT_ENV: &str = "PORTICO_TIMEOUT_SECS";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// An environment override could not be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidOverride {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for client settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository;

impl SettingsRepository {
    /// Creates a new settings repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the path to the settings file.
    #[must_use]
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("portico").join("settings.json"))
    }

    /// Loads settings from the config directory and applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// an override is malformed.
    pub async fn load(&self) -> Result<ClientSettings, SettingsError> {
        let settings = match Self::settings_path() {
            Some(path) => self.load_from(&path).await?,
            None => ClientSettings::default(),
        };
        apply_overrides(settings, |name| std::env::var(name).ok())
    }

    /// Loads settings from `path`, returning defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load_from(&self, path: &Path) -> Result<ClientSettings, SettingsError> {
        if !fs::try_exists(path).await? {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ClientSettings::default());
        }

        let content = fs::read(path).await?;
        Ok(from_json_bytes(&content)?)
    }

    /// Saves settings to the config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory is unknown or the file
    /// cannot be written.
    pub async fn save(&self, settings: &ClientSettings) -> Result<(), SettingsError> {
        let path = Self::settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path, settings).await
    }

    /// Saves settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save_to(&self, path: &Path, settings: &ClientSettings) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(settings)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

/// Applies `PORTICO_*` overrides read through `lookup`.
///
/// # Errors
///
/// Returns an error if the timeout override is not a positive integer.
pub fn apply_overrides(
    mut settings: ClientSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, SettingsError> {
    if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        settings.base_url = base_url;
    }

    if let Some(raw) = lookup(TIMEOUT_ENV) {
        settings.timeout_secs = raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(SettingsError::InvalidOverride {
                name: TIMEOUT_ENV,
                value: raw,
            })?;
    }

    Ok(settings)
}
