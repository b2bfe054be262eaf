//! Portico - Main Entry Point
//!
//! Loads settings, wires the login stack and runs a single login attempt
//! from the command line, printing every state the controller emits.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use portico::build_controller;
use portico_domain::LoginState;
use portico_infrastructure::{SettingsRepository, TokenStore};
use portico_presentation::SubmissionPolicy;

#[derive(Debug, Parser)]
#[command(name = "portico", version, about = "Log in to an auth backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit credentials and report the result.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,

        /// Account password.
        #[arg(long, env = "PORTICO_PASSWORD", hide_env_values = true)]
        password: String,

        /// Base URL of the backend, overriding settings.
        #[arg(long)]
        base_url: Option<String>,

        /// Connect/receive timeout in seconds, overriding settings.
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Bearer token attached to the request.
        #[arg(long, env = "PORTICO_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let Command::Login {
        email,
        password,
        base_url,
        timeout_secs,
        token,
    } = cli.command;

    let mut settings = SettingsRepository::new().load().await?;
    if let Some(base_url) = base_url {
        settings.base_url = base_url;
    }
    if let Some(timeout_secs) = timeout_secs {
        settings.timeout_secs = timeout_secs;
    }

    tracing::info!(
        base_url = %settings.base_url,
        timeout_secs = settings.timeout_secs,
        "Starting Portico v{}",
        env!("CARGO_PKG_VERSION")
    );

    let tokens = TokenStore::new();
    if let Some(token) = token {
        tokens.set(token).await;
    }

    let controller = build_controller(&settings, tokens, SubmissionPolicy::LatestOnly)?;
    let mut states = controller.subscribe();
    let attempt = controller.submit(email, password);

    let mut last = LoginState::Idle;
    while let Some(state) = states.recv().await {
        println!("{state}");
        let done = state.is_terminal();
        last = state;
        if done {
            break;
        }
    }
    attempt.await?;

    Ok(if last.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
