//! Userdeck CLI entrypoint for browsing random user profiles.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use userdeck::{FetchError, OperationMode, UserdeckConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FetchError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::PlainListing => cli::plain::run(&config).await,
        OperationMode::UsersTui => cli::users_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<UserdeckConfig, FetchError> {
    UserdeckConfig::load().map_err(|error| FetchError::Configuration {
        message: error.to_string(),
    })
}
