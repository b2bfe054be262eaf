//! Auth repository backed by the HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use portico_application::{AuthRepository, HttpClient, TransportError};
use portico_domain::{Credentials, Outcome};

/// Default login endpoint, relative to the client's base URL.
pub const LOGIN_PATH: &str = "auth/login";

/// Shown when the backend answers 2xx but not 200.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// Logs in by posting credentials to the backend.
///
/// Status 200 is the only success. Everything else, including a transport
/// error, becomes `Outcome::Error`.
pub struct HttpAuthRepository<C> {
    client: Arc<C>,
    login_path: String,
}

impl<C: HttpClient> HttpAuthRepository<C> {
    /// Creates a repository posting to [`LOGIN_PATH`].
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            login_path: LOGIN_PATH.to_string(),
        }
    }

    /// Uses a different login endpoint.
    #[must_use]
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    /// Returns the login endpoint.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}

#[async_trait]
impl<C: HttpClient> AuthRepository for HttpAuthRepository<C> {
    async fn login(&self, credentials: Credentials) -> Outcome<bool> {
        let body = match serde_json::to_value(&credentials) {
            Ok(body) => body,
            Err(e) => {
                let error = TransportError::unexpected(e);
                warn!(%error, "failed to encode credentials");
                return Outcome::error(error.message());
            }
        };
        drop(credentials);

        match self.client.post(&self.login_path, &body).await {
            Ok(response) if response.status == 200 => Outcome::success(true),
            Ok(response) => {
                debug!(
                    status = response.status,
                    content_type = response.header("content-type"),
                    "login answered without 200"
                );
                Outcome::error(LOGIN_FAILED_MESSAGE)
            }
            Err(error) => Outcome::error(error.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_application::RawResponse;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::sync::Mutex;

    /// Mock HTTP client for testing.
    struct MockHttpClient {
        response: Result<RawResponse, TransportError>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl MockHttpClient {
        fn status(status: u16) -> Arc<Self> {
            Self::returning(Ok(RawResponse::with_status(status)))
        }

        fn error(err: TransportError) -> Arc<Self> {
            Self::returning(Err(err))
        }

        fn returning(response: Result<RawResponse, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                response,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    impl HttpClient for MockHttpClient {
        async fn post(&self, path: &str, body: &Value) -> Result<RawResponse, TransportError> {
            self.calls
                .lock()
                .expect("Lock poisoned")
                .push((path.to_string(), body.clone()));
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let client = MockHttpClient::status(200);
        let repo = HttpAuthRepository::new(Arc::clone(&client));

        repo.login(Credentials::new("a@b.com", "pw")).await;

        let calls = client.calls.lock().expect("Lock poisoned");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "auth/login");
        assert_eq!(
            calls[0].1,
            serde_json::json!({"email": "a@b.com", "password": "pw"})
        );
    }

    #[tokio::test]
    async fn test_status_200_is_success() {
        let repo = HttpAuthRepository::new(MockHttpClient::status(200));

        let outcome = repo.login(Credentials::new("a@b.com", "pw")).await;

        assert_eq!(outcome, Outcome::success(true));
        assert_eq!(outcome.message(), None);
    }

    #[tokio::test]
    async fn test_other_2xx_is_generic_error() {
        for status in [201, 204] {
            let repo = HttpAuthRepository::new(MockHttpClient::status(status));

            let outcome = repo.login(Credentials::new("a@b.com", "pw")).await;

            assert_eq!(outcome.message(), Some(LOGIN_FAILED_MESSAGE));
            assert_eq!(outcome.data(), None);
        }
    }

    #[tokio::test]
    async fn test_transport_errors_become_messages() {
        let cases = [
            (TransportError::Unauthorized, "Unauthorized. Please login again."),
            (TransportError::Timeout, "Connection timeout. Please try again."),
            (
                TransportError::Other { status: Some(500) },
                "Something went wrong. Please try again.",
            ),
            (
                TransportError::unexpected("decode"),
                "An unexpected error occurred. Please try again.",
            ),
        ];

        for (error, expected) in cases {
            let repo = HttpAuthRepository::new(MockHttpClient::error(error));

            let outcome = repo.login(Credentials::new("a@b.com", "pw")).await;

            assert_eq!(outcome, Outcome::error(expected));
        }
    }

    #[tokio::test]
    async fn test_custom_login_path() {
        let client = MockHttpClient::status(200);
        let repo = HttpAuthRepository::new(Arc::clone(&client)).with_login_path("v2/session");

        repo.login(Credentials::new("a@b.com", "pw")).await;

        assert_eq!(repo.login_path(), "v2/session");
        let calls = client.calls.lock().expect("Lock poisoned");
        assert_eq!(calls[0].0, "v2/session");
    }
}
