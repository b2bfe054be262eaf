//! Transport error taxonomy
//!
//! Every failure that leaves the HTTP client is one of these variants. The
//! display text of each variant is the message shown to the user, so it is
//! part of the contract with the rendering layer.

use thiserror::Error;

/// Shown when the connect or receive phase exceeds the configured bound.
pub const TIMEOUT_MESSAGE: &str = "Connection timeout. Please try again.";

/// Shown when the server answers 401.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Please login again.";

/// Shown for every other HTTP or network failure.
pub const OTHER_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the request could not be built or the response not read.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Classified failure of an HTTP call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connect or receive phase exceeded the timeout.
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// The server answered 401.
    #[error("{}", UNAUTHORIZED_MESSAGE)]
    Unauthorized,

    /// Any other HTTP status or network failure.
    #[error("{}", OTHER_MESSAGE)]
    Other {
        /// HTTP status, when the server answered at all.
        status: Option<u16>,
    },

    /// Serialization or other local failure around the call.
    #[error("{}", UNEXPECTED_MESSAGE)]
    Unexpected {
        /// Technical detail for logs. Never shown to the user.
        detail: String,
    },
}

impl TransportError {
    /// Creates an `Unexpected` error from anything displayable.
    #[must_use]
    pub fn unexpected(detail: impl std::fmt::Display) -> Self {
        Self::Unexpected {
            detail: detail.to_string(),
        }
    }

    /// Returns the user-facing message for this error.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Timeout => TIMEOUT_MESSAGE,
            Self::Unauthorized => UNAUTHORIZED_MESSAGE,
            Self::Other { .. } => OTHER_MESSAGE,
            Self::Unexpected { .. } => UNEXPECTED_MESSAGE,
        }
    }

    /// Returns the HTTP status associated with the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Other { status } => *status,
            Self::Timeout | Self::Unexpected { .. } => None,
        }
    }
}
