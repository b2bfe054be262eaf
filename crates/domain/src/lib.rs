//! Portico Domain - Core login types
//!
//! This crate defines the domain model for the Portico login flow.
//! All types here are pure Rust with no I/O dependencies.

pub mod credentials;
pub mod error;
pub mod outcome;
pub mod settings;
pub mod state;

pub use credentials::Credentials;
pub use error::{DomainError, DomainResult};
pub use outcome::Outcome;
pub use settings::{ClientSettings, parse_base_url};
pub use state::LoginState;
