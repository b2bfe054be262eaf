//! HTTP Client port

use std::future::Future;

use serde_json::Value;

use crate::TransportError;

/// Response returned by the HTTP client for a 2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, lowercase names.
    pub headers: Vec<(String, String)>,
    /// Raw body bytes. May be empty.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response with the given status and no headers or body.
    #[must_use]
    pub const fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the body as UTF-8 text, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Port for issuing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
/// Implementations classify every failure before returning it, so callers
/// only ever see a [`TransportError`].
pub trait HttpClient: Send + Sync {
    /// Posts `body` as JSON to `path`, relative to the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns a classified `TransportError` on timeout, on any non-2xx
    /// status, or on any other network failure.
    fn post(
        &self,
        path: &str,
        body: &Value,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
