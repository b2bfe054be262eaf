//! Success/error envelope passed between layers.
//!
//! `Outcome` is what the repository hands back to the use case and what the
//! controller finally folds into a [`LoginState`](crate::LoginState). Errors
//! travel as human-readable messages because the rendering layer shows them
//! verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a domain operation: either data or a displayable message.
///
/// Exactly one side is ever populated. There are no setters; an `Outcome`
/// cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// The operation produced data.
    Success(T),
    /// The operation failed with a human-readable message.
    Error(String),
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self::Success(data)
    }

    /// Creates a failed outcome carrying `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Returns true if this is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if this is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the data, or `None` for an error.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Returns the error message, or `None` for a success.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(message) => Some(message),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_exposes_data_only() {
        let outcome = Outcome::success(true);
        assert!(outcome.is_success());
        assert!(!outcome.is_error());
        assert_eq!(outcome.data(), Some(&true));
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn test_error_exposes_message_only() {
        let outcome: Outcome<bool> = Outcome::error("Unauthorized. Please login again.");
        assert!(outcome.is_error());
        assert_eq!(outcome.data(), None);
        assert_eq!(outcome.message(), Some("Unauthorized. Please login again."));
    }

    #[test]
    fn test_data_is_stable_across_reads() {
        let outcome = Outcome::success(String::from("token"));
        let first = outcome.data().cloned();
        let second = outcome.data().cloned();
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("token"));
    }

    #[test]
    fn test_from_std_result() {
        let ok: Result<bool, std::fmt::Error> = Ok(true);
        assert_eq!(Outcome::from(ok), Outcome::success(true));

        let err: Result<bool, std::fmt::Error> = Err(std::fmt::Error);
        let outcome = Outcome::from(err);
        assert!(outcome.message().is_some_and(|m| !m.is_empty()));
    }
}
