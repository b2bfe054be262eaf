//! In-memory access token storage.
//!
//! The interceptor only ever reads from these; writing a token is up to
//! whoever owns the session.

use std::sync::Arc;

use tokio::sync::RwLock;

use portico_application::TokenProvider;

/// Thread-safe, shareable holder for the current access token.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    /// Replaces the stored token.
    pub async fn set(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    /// Removes the stored token.
    pub async fn clear(&self) {
        *self.token.write().await = None;
    }

    /// Returns a copy of the stored token.
    pub async fn current(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}

impl TokenProvider for TokenStore {
    async fn token(&self) -> Option<String> {
        self.current().await
    }
}

/// A token fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    /// Always supplies `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Never supplies a token.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    async fn token(&self) -> Option<String> {
        self.0.clone()
    }
}
