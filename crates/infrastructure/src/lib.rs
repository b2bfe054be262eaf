//! Portico Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod auth;
pub mod http;
pub mod persistence;
pub mod remote;
pub mod serialization;

pub use adapters::{ConfigureError, DEFAULT_TIMEOUT, ReqwestHttpClient};
pub use auth::{StaticToken, TokenStore};
pub use http::{AuthInterceptor, ErrorClassifier, HttpFailure, HttpRequestContext, Interceptor};
pub use persistence::{SettingsError, SettingsRepository, apply_overrides};
pub use remote::{HttpAuthRepository, LOGIN_FAILED_MESSAGE, LOGIN_PATH};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};
