//! HTTP plumbing shared by the client adapter.

mod context;
mod interceptor;

pub use context::HttpRequestContext;
pub use interceptor::{AuthInterceptor, ErrorClassifier, HttpFailure, Interceptor};
