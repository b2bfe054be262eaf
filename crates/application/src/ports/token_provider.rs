//! Token provider port

use std::future::Future;

/// Supplies the bearer token attached to outgoing requests.
///
/// Queried once per request. Implementations must not block; returning
/// `None` or an empty string sends the request unauthenticated.
pub trait TokenProvider: Send + Sync {
    /// Returns the current access token, if any.
    fn token(&self) -> impl Future<Output = Option<String>> + Send;
}
