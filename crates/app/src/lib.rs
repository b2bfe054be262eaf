//! Portico composition root.
//!
//! Builds the login stack by constructor injection: client, repository,
//! use case, controller. Nothing is looked up at runtime.

use std::sync::Arc;

use portico_application::{Login, TokenProvider};
use portico_domain::ClientSettings;
use portico_infrastructure::{
    AuthInterceptor, ConfigureError, HttpAuthRepository, ReqwestHttpClient,
};
use portico_presentation::{LoginController, SubmissionPolicy};

/// Controller type produced by [`build_controller`].
pub type AppController = LoginController<HttpAuthRepository<ReqwestHttpClient>>;

/// Wires the full login stack for `settings`, reading bearer tokens from
/// `tokens`.
///
/// # Errors
///
/// Returns an error if the settings are invalid.
pub fn build_controller<P: TokenProvider + 'static>(
    settings: &ClientSettings,
    tokens: P,
    policy: SubmissionPolicy,
) -> Result<AppController, ConfigureError> {
    let client =
        ReqwestHttpClient::from_settings(settings)?.with_interceptor(AuthInterceptor::new(tokens));
    let repository =
        HttpAuthRepository::new(Arc::new(client)).with_login_path(settings.login_path.clone());

    Ok(LoginController::new(Login::new(repository)).with_policy(policy))
}
