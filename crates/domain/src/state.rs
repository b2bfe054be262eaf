//! Login state types for UI binding.
//!
//! This module defines the state machine for a login attempt,
//! enabling the UI to display appropriate feedback at each stage.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Outcome;

/// Represents the current state of the login screen.
///
/// - `Idle`: Nothing submitted yet, show the form
/// - `Loading`: Attempt in flight, show a spinner
/// - `Success`: Credentials accepted, hand over to navigation
/// - `Failed`: Attempt rejected, show `message` verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoginState {
    /// No attempt has been made since the controller was created.
    #[default]
    Idle,

    /// An attempt is in progress.
    Loading,

    /// The last attempt was accepted.
    Success,

    /// The last attempt failed.
    Failed {
        /// Human-readable error message.
        message: String,
    },
}

impl LoginState {
    /// Creates a Failed state.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Folds a resolved login outcome into its terminal state.
    #[must_use]
    pub fn from_outcome(outcome: Outcome<bool>) -> Self {
        match outcome {
            Outcome::Success(_) => Self::Success,
            Outcome::Error(message) => Self::Failed { message },
        }
    }

    /// Returns true if the state is Idle.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if an attempt is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the last attempt succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true if the last attempt failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns true for `Success` and `Failed`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed { .. })
    }

    /// Returns the failure message if in Failed state.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Loading => f.write_str("loading"),
            Self::Success => f.write_str("success"),
            Self::Failed { message } => write!(f, "failed: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_state_idle_by_default() {
        let state = LoginState::default();
        assert!(state.is_idle());
        assert!(!state.is_loading());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_login_state_failed() {
        let state = LoginState::failed("Connection timeout. Please try again.");
        assert!(state.is_failed());
        assert!(state.is_terminal());
        assert_eq!(state.message(), Some("Connection timeout. Please try again."));
    }

    #[test]
    fn test_from_outcome() {
        assert_eq!(LoginState::from_outcome(Outcome::success(true)), LoginState::Success);
        assert_eq!(
            LoginState::from_outcome(Outcome::error("nope")),
            LoginState::failed("nope")
        );
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_value(LoginState::failed("x")).expect("serialize");
        assert_eq!(json, serde_json::json!({"state": "failed", "message": "x"}));
    }
}
