//! Per-call request context.

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use portico_application::TransportError;

/// Everything needed to send one request.
///
/// Built by the client for each call, handed mutably to every interceptor's
/// request hook, then consumed when the request is sent.
#[derive(Debug, Clone)]
pub struct HttpRequestContext {
    /// HTTP method.
    pub method: Method,
    /// Fully resolved URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// JSON body.
    pub body: Value,
}

impl HttpRequestContext {
    /// Creates a POST context with `Accept: application/json`.
    #[must_use]
    pub fn post(url: Url, body: Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            method: Method::POST,
            url,
            headers,
            body,
        }
    }

    /// Sets `Authorization: Bearer <token>`, marking the value sensitive.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Unexpected` if the token contains characters
    /// that are not allowed in a header.
    pub fn set_bearer(&mut self, token: &str) -> Result<(), TransportError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| TransportError::unexpected(format!("invalid bearer token: {e}")))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Returns a header value as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
