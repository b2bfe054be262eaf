//! Local persistence.

mod settings_repository;

pub use settings_repository::{
    BASE_URL_ENV, SettingsError, SettingsRepository, TIMEOUT_ENV, apply_overrides,
};
