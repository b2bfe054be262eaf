//! Portico Presentation - Login screen state
//!
//! This crate owns the state the rendering layer binds to and the channel
//! it sends intents through. Rendering itself lives elsewhere.

pub mod bridge;
pub mod controller;

pub use bridge::{LoginIntent, run_intents};
pub use controller::{LoginController, SubmissionPolicy};
