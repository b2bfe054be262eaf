//! Login credentials.

use std::fmt;

use serde::Serialize;

/// Email/password pair submitted for a single login attempt.
///
/// Built when the user submits and moved down the call chain, so it is
/// dropped as soon as the attempt completes. Serializes to the wire body
/// `{"email": ..., "password": ...}`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials for one attempt.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_wire_body() {
        let credentials = Credentials::new("a@b.com", "pw");
        let json = serde_json::to_value(&credentials).expect("serialize");
        assert_eq!(json, serde_json::json!({"email": "a@b.com", "password": "pw"}));
    }

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::new("a@b.com", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("hunter2"));
    }
}
