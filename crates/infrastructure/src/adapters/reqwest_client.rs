//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Every request passes through the installed interceptors, and every
//! failure is classified before it is returned.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use portico_application::{HttpClient, RawResponse, TransportError};
use portico_domain::{ClientSettings, DomainError, parse_base_url};

use crate::http::{ErrorClassifier, HttpFailure, HttpRequestContext, Interceptor};

/// Default bound for the connect and receive phases.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while building the client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigureError {
    /// The settings are invalid.
    #[error(transparent)]
    InvalidSettings(#[from] DomainError),

    /// reqwest refused the configuration.
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

/// HTTP client implementation using reqwest.
///
/// Built once with a base URL and a timeout; both the connect and the
/// receive phase are bounded by that timeout. Failures no interceptor
/// claims fall through to [`ErrorClassifier`], so callers never see a raw
/// `reqwest::Error`.
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl ReqwestHttpClient {
    /// Creates a client for `base_url` with a fixed `timeout`.
    ///
    /// Configuration:
    /// - Connect timeout: `timeout`
    /// - Read timeout: `timeout`
    /// - Redirects: none followed
    /// - User-Agent: "Portico/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or
    /// the client cannot be created.
    pub fn configure(base_url: &str, timeout: Duration) -> Result<Self, ConfigureError> {
        let base_url = parse_base_url(base_url)?;
        if timeout.is_zero() {
            return Err(DomainError::InvalidTimeout(0).into());
        }

        let client = Client::builder()
            .user_agent(concat!("Portico/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigureError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout,
            interceptors: Vec::new(),
        })
    }

    /// Creates a client from settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ConfigureError> {
        settings.validate()?;
        Self::configure(&settings.base_url, settings.timeout())
    }

    /// Installs an interceptor. Interceptors run in installation order.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the connect/receive timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves `path` against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, HttpFailure> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| HttpFailure::Local(format!("invalid path '{path}': {e}")))
    }

    /// Asks the interceptors to classify a failure, in installation order.
    fn classify(&self, failure: &HttpFailure) -> TransportError {
        self.interceptors
            .iter()
            .find_map(|interceptor| interceptor.on_error(failure))
            .unwrap_or_else(|| ErrorClassifier::classify(failure))
    }

    /// Sends the request and collects the response.
    async fn dispatch(&self, ctx: HttpRequestContext) -> Result<RawResponse, HttpFailure> {
        let response = self
            .client
            .request(ctx.method, ctx.url)
            .headers(ctx.headers)
            .json(&ctx.body)
            .send()
            .await
            .map_err(Self::map_error)?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        if !(200..300).contains(&status) {
            // The status alone decides the failure; the body is for logs only.
            let body = response
                .bytes()
                .await
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .unwrap_or_default();
            return Err(HttpFailure::Status { status, body });
        }

        let body = response.bytes().await.map_err(Self::map_error)?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Maps reqwest errors to unclassified failures.
    fn map_error(error: reqwest::Error) -> HttpFailure {
        if error.is_timeout() {
            return if error.is_connect() {
                HttpFailure::ConnectTimeout
            } else {
                HttpFailure::ReceiveTimeout
            };
        }

        if error.is_builder() {
            return HttpFailure::Local(error.to_string());
        }

        if error.is_decode() || error.is_body() {
            return HttpFailure::Local(format!("failed to read body: {error}"));
        }

        HttpFailure::Network(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn post(&self, path: &str, body: &Value) -> Result<RawResponse, TransportError> {
        let url = self.endpoint(path).map_err(|f| self.classify(&f))?;
        let mut ctx = HttpRequestContext::post(url, body.clone());

        for interceptor in &self.interceptors {
            interceptor.on_request(&mut ctx).await?;
        }

        debug!(
            method = %ctx.method,
            url = %ctx.url,
            authenticated = ctx.header("authorization").is_some(),
            "sending request"
        );

        match self.dispatch(ctx).await {
            Ok(response) => {
                debug!(status = response.status, "request completed");
                Ok(response)
            }
            Err(failure) => {
                let error = self.classify(&failure);
                warn!(?failure, status = ?error.status(), %error, "request failed");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_configure_normalizes_base_url() {
        let client = ReqwestHttpClient::configure("https://api.example.com/v1", DEFAULT_TIMEOUT)
            .expect("valid config");
        assert_eq!(client.base_url().as_str(), "https://api.example.com/v1/");
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_configure_rejects_bad_url() {
        let result = ReqwestHttpClient::configure("localhost:8080", DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(ConfigureError::InvalidSettings(_))));
    }

    #[test]
    fn test_configure_rejects_zero_timeout() {
        let result = ReqwestHttpClient::configure("https://api.example.com/", Duration::ZERO);
        assert!(matches!(
            result,
            Err(ConfigureError::InvalidSettings(DomainError::InvalidTimeout(0)))
        ));
    }

    #[test]
    fn test_endpoint_appends_path() {
        let client = ReqwestHttpClient::configure("https://api.example.com/api/", DEFAULT_TIMEOUT)
            .expect("valid config");
        assert_eq!(
            client.endpoint("auth/login").expect("valid").as_str(),
            "https://api.example.com/api/auth/login"
        );
        assert_eq!(
            client.endpoint("/auth/login").expect("valid").as_str(),
            "https://api.example.com/api/auth/login"
        );
    }

    #[test]
    fn test_from_settings() {
        let settings = ClientSettings::new("http://127.0.0.1:9000").with_timeout_secs(5);
        let client = ReqwestHttpClient::from_settings(&settings).expect("valid config");
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_classifier_is_the_fallback() {
        let client = ReqwestHttpClient::configure("https://api.example.com/", DEFAULT_TIMEOUT)
            .expect("valid config");
        let error = client.classify(&HttpFailure::Status {
            status: 401,
            body: String::new(),
        });
        assert_eq!(error, TransportError::Unauthorized);
        assert_eq!(
            client.classify(&HttpFailure::ConnectTimeout),
            TransportError::Timeout
        );
    }

    /// Treats 401 as an ordinary server error.
    struct NoUnauthorized;

    impl Interceptor for NoUnauthorized {
        fn on_error(&self, failure: &HttpFailure) -> Option<TransportError> {
            match failure {
                HttpFailure::Status { status: 401, .. } => Some(TransportError::Other {
                    status: Some(401),
                }),
                _ => None,
            }
        }
    }

    #[test]
    fn test_installed_error_hook_overrides_classifier() {
        let client = ReqwestHttpClient::configure("https://api.example.com/", DEFAULT_TIMEOUT)
            .expect("valid config")
            .with_interceptor(NoUnauthorized);

        let error = client.classify(&HttpFailure::Status {
            status: 401,
            body: String::new(),
        });
        assert_eq!(error, TransportError::Other { status: Some(401) });

        let error = client.classify(&HttpFailure::Status {
            status: 500,
            body: String::new(),
        });
        assert_eq!(error, TransportError::Other { status: Some(500) });
        assert_eq!(
            client.classify(&HttpFailure::ReceiveTimeout),
            TransportError::Timeout
        );
    }

    #[test]
    fn test_first_answering_hook_wins() {
        struct Always(TransportError);

        impl Interceptor for Always {
            fn on_error(&self, _failure: &HttpFailure) -> Option<TransportError> {
                Some(self.0.clone())
            }
        }

        let client = ReqwestHttpClient::configure("https://api.example.com/", DEFAULT_TIMEOUT)
            .expect("valid config")
            .with_interceptor(NoUnauthorized)
            .with_interceptor(Always(TransportError::Timeout));

        let failure = HttpFailure::Status {
            status: 401,
            body: String::new(),
        };
        assert_eq!(
            client.classify(&failure),
            TransportError::Other { status: Some(401) }
        );
        assert_eq!(
            client.classify(&HttpFailure::Network("reset".to_string())),
            TransportError::Timeout
        );
    }
}
