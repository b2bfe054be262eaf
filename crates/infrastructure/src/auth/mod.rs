//! Access token sources.

mod token_store;

pub use token_store::{StaticToken, TokenStore};
