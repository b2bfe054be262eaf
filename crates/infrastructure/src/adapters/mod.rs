//! Infrastructure adapters

mod reqwest_client;

pub use reqwest_client::{ConfigureError, DEFAULT_TIMEOUT, ReqwestHttpClient};
