//! Repositories talking to the auth backend.

mod auth_repository;

pub use auth_repository::{HttpAuthRepository, LOGIN_FAILED_MESSAGE, LOGIN_PATH};
