//! Auth repository port
//!
//! Defines the interface to the authentication backend.

use async_trait::async_trait;

use portico_domain::{Credentials, Outcome};

/// Repository trait for authentication.
///
/// Implementations turn every failure into `Outcome::Error`; nothing
/// downstream of this trait handles errors any other way.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Attempts to log in with `credentials`.
    ///
    /// Returns `Outcome::Success(true)` when the backend accepts them and
    /// `Outcome::Error` with a displayable message otherwise.
    async fn login(&self, credentials: Credentials) -> Outcome<bool>;
}
