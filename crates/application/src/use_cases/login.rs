//! Login use case

use portico_domain::{Credentials, Outcome};

use crate::ports::AuthRepository;

/// Logs a user in through an [`AuthRepository`].
///
/// A pass-through: it owns no logic beyond building the credentials, and
/// exists so the controller depends on the `login` capability rather than
/// on a concrete repository.
pub struct Login<R> {
    repository: R,
}

impl<R: AuthRepository> Login<R> {
    /// Creates a new `Login` use case.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Executes the use case.
    pub async fn execute(&self, email: &str, password: &str) -> Outcome<bool> {
        self.repository
            .login(Credentials::new(email, password))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    struct MockRepository {
        outcome: Outcome<bool>,
        seen: Arc<Mutex<Vec<Credentials>>>,
    }

    impl MockRepository {
        fn returning(outcome: Outcome<bool>) -> Self {
            Self {
                outcome,
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl AuthRepository for MockRepository {
        async fn login(&self, credentials: Credentials) -> Outcome<bool> {
            self.seen.lock().expect("Lock poisoned").push(credentials);
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_login_passes_credentials_through() {
        let repository = MockRepository::returning(Outcome::success(true));
        let seen = Arc::clone(&repository.seen);
        let use_case = Login::new(repository);

        let outcome = use_case.execute("a@b.com", "pw").await;

        assert_eq!(outcome, Outcome::success(true));
        let seen = seen.lock().expect("Lock poisoned");
        assert_eq!(seen.as_slice(), &[Credentials::new("a@b.com", "pw")]);
    }

    #[tokio::test]
    async fn test_login_returns_repository_error_unchanged() {
        let use_case = Login::new(MockRepository::returning(Outcome::error(
            "Unauthorized. Please login again.",
        )));

        let outcome = use_case.execute("a@b.com", "wrong").await;

        assert_eq!(outcome.message(), Some("Unauthorized. Please login again."));
    }
}
