//! Request/response interceptors.
//!
//! Interceptors are installed on the client when it is built and run for
//! every request it sends. There is no per-call way to skip them.

use async_trait::async_trait;
use tracing::debug;

use portico_application::{TokenProvider, TransportError};

use super::HttpRequestContext;

/// A failure observed by the client before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpFailure {
    /// Connecting took longer than the timeout.
    ConnectTimeout,
    /// Waiting for response data took longer than the timeout.
    ReceiveTimeout,
    /// The server answered with a non-2xx status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, for logs.
        body: String,
    },
    /// Connection refused, reset, DNS failure, TLS failure...
    Network(String),
    /// The request could not be built or the response not read.
    Local(String),
}

/// Hook invoked around every request the client sends.
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Called before the request is sent. May mutate headers.
    ///
    /// # Errors
    ///
    /// Returning an error aborts the request with that error.
    async fn on_request(&self, _ctx: &mut HttpRequestContext) -> Result<(), TransportError> {
        Ok(())
    }

    /// Called when the request fails. The first interceptor returning
    /// `Some` decides the error the caller sees; when none does, the
    /// client falls back to [`ErrorClassifier`].
    fn on_error(&self, _failure: &HttpFailure) -> Option<TransportError> {
        None
    }
}

/// Attaches `Authorization: Bearer <token>` when a token is available.
pub struct AuthInterceptor<P> {
    provider: P,
}

impl<P: TokenProvider> AuthInterceptor<P> {
    /// Creates an interceptor reading tokens from `provider`.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: TokenProvider> Interceptor for AuthInterceptor<P> {
    async fn on_request(&self, ctx: &mut HttpRequestContext) -> Result<(), TransportError> {
        match self.provider.token().await {
            Some(token) if !token.trim().is_empty() => ctx.set_bearer(token.trim()),
            _ => {
                debug!(url = %ctx.url, "no access token, sending unauthenticated");
                Ok(())
            }
        }
    }
}

/// Maps raw failures onto the transport error taxonomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Classifies a failure.
    #[must_use]
    pub fn classify(failure: &HttpFailure) -> TransportError {
        match failure {
            HttpFailure::ConnectTimeout | HttpFailure::ReceiveTimeout => TransportError::Timeout,
            HttpFailure::Status { status: 401, .. } => TransportError::Unauthorized,
            HttpFailure::Status { status, .. } => TransportError::Other {
                status: Some(*status),
            },
            HttpFailure::Network(_) => TransportError::Other { status: None },
            HttpFailure::Local(detail) => TransportError::unexpected(detail),
        }
    }
}

impl Interceptor for ErrorClassifier {
    fn on_error(&self, failure: &HttpFailure) -> Option<TransportError> {
        Some(Self::classify(failure))
    }
}
