//! Application use cases (business logic orchestration).

mod login;

pub use login::Login;
