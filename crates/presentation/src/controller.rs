//! Login screen state machine.
//!
//! `Idle → Loading → (Success | Failed)`. A submit is accepted in any state
//! and always re-enters `Loading`. The register and the subscriber list sit
//! behind one lock so every subscriber sees transitions in the order they
//! were applied.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use portico_application::{AuthRepository, Login};
use portico_domain::LoginState;

/// How resolutions of overlapping submissions are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPolicy {
    /// Only the most recent submission may write its terminal state;
    /// resolutions of superseded attempts are dropped.
    #[default]
    LatestOnly,
    /// Every resolution writes its terminal state, so whichever attempt
    /// resolves last wins.
    LastResolvedWins,
}

#[derive(Debug, Default)]
struct Register {
    state: LoginState,
    latest_attempt: u64,
    subscribers: Vec<mpsc::UnboundedSender<LoginState>>,
}

impl Register {
    fn emit(&mut self, state: LoginState) {
        debug!(from = %self.state, to = %state, "login state transition");
        self.subscribers.retain(|tx| tx.send(state.clone()).is_ok());
        self.state = state;
    }
}

/// Owns the [`LoginState`] and drives it from submissions.
pub struct LoginController<R> {
    use_case: Arc<Login<R>>,
    register: Arc<Mutex<Register>>,
    policy: SubmissionPolicy,
}

impl<R> Clone for LoginController<R> {
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            register: Arc::clone(&self.register),
            policy: self.policy,
        }
    }
}

impl<R: AuthRepository + 'static> LoginController<R> {
    /// Creates a controller in the `Idle` state.
    pub fn new(use_case: Login<R>) -> Self {
        Self {
            use_case: Arc::new(use_case),
            register: Arc::new(Mutex::new(Register::default())),
            policy: SubmissionPolicy::default(),
        }
    }

    /// Sets how overlapping submissions resolve.
    #[must_use]
    pub const fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the active policy.
    #[must_use]
    pub const fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> LoginState {
        self.lock().state.clone()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver first yields the current state, then every later
    /// transition in order.
    #[must_use]
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<LoginState> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut register = self.lock();
        if tx.send(register.state.clone()).is_ok() {
            register.subscribers.push(tx);
        }
        rx
    }

    /// Submits credentials.
    ///
    /// `Loading` is emitted before this returns; the terminal state is
    /// emitted from a spawned task once the use case resolves. Must be
    /// called within a tokio runtime.
    pub fn submit(&self, email: impl Into<String>, password: impl Into<String>) -> JoinHandle<()> {
        let attempt = {
            let mut register = self.lock();
            register.latest_attempt += 1;
            register.emit(LoginState::Loading);
            register.latest_attempt
        };

        let email = email.into();
        let password = password.into();
        let controller = self.clone();

        tokio::spawn(async move {
            let outcome = controller.use_case.execute(&email, &password).await;
            drop(password);
            controller.resolve(attempt, LoginState::from_outcome(outcome));
        })
    }

    fn resolve(&self, attempt: u64, state: LoginState) {
        let mut register = self.lock();
        if self.policy == SubmissionPolicy::LatestOnly && attempt != register.latest_attempt {
            debug!(
                attempt,
                latest = register.latest_attempt,
                "discarding superseded login result"
            );
            return;
        }
        register.emit(state);
    }

    fn lock(&self) -> MutexGuard<'_, Register> {
        self.register.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
