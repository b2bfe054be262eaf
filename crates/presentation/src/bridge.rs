//! UI Bridge Module
//!
//! Defines the intents the rendering layer sends to the controller and the
//! loop that forwards them.

use std::fmt;

use tokio::sync::mpsc;
use tracing::debug;

use portico_application::AuthRepository;

use crate::LoginController;

/// Intents sent from the rendering layer.
#[derive(Clone, PartialEq, Eq)]
pub enum LoginIntent {
    /// User pressed the login button.
    Submit {
        /// Entered email.
        email: String,
        /// Entered password.
        password: String,
    },
}

impl fmt::Debug for LoginIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submit { email, .. } => f
                .debug_struct("Submit")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Forwards intents to `controller` until every sender is dropped.
///
/// Submissions are not awaited here; each one runs on its own task, so a
/// slow attempt never blocks the next intent.
pub async fn run_intents<R: AuthRepository + 'static>(
    controller: LoginController<R>,
    mut intents: mpsc::UnboundedReceiver<LoginIntent>,
) {
    while let Some(intent) = intents.recv().await {
        debug!(?intent, "received intent");
        match intent {
            LoginIntent::Submit { email, password } => {
                drop(controller.submit(email, password));
            }
        }
    }
    debug!("intent channel closed");
}
