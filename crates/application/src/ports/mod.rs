//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod auth_repository;
mod http_client;
mod token_provider;

pub use auth_repository::AuthRepository;
pub use http_client::{HttpClient, RawResponse};
pub use token_provider::TokenProvider;
