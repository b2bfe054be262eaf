//! Portico Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the HTTP stack, tokens and the auth backend)
//! - The login use case
//! - The transport error taxonomy shared by every layer below the controller

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{
    OTHER_MESSAGE, TIMEOUT_MESSAGE, TransportError, UNAUTHORIZED_MESSAGE, UNEXPECTED_MESSAGE,
};
pub use ports::{AuthRepository, HttpClient, RawResponse, TokenProvider};
pub use use_cases::Login;
