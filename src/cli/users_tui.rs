//! TUI mode for browsing user pages.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that pages through user records.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use userdeck::tui::{UserTableApp, set_fetch_context};
use userdeck::{FetchError, HttpUserGateway, UserdeckConfig};

/// Runs the TUI mode for browsing user pages.
///
/// # Errors
///
/// Returns an error if:
/// - The configured start page or API base is invalid
/// - The TUI fails to initialise
///
/// Fetch failures inside the running TUI are not errors here; the view
/// logs them and degrades to an empty table.
pub async fn run(config: &UserdeckConfig) -> Result<(), FetchError> {
    let start_page = config.validated_start_page()?;
    let gateway = HttpUserGateway::new(config.resolve_api_base())?;

    // Store the gateway for Model::init() and page-load commands to use.
    // If already set (e.g. re-running the TUI in the same process), this is
    // a no-op and the existing context remains.
    let _ = set_fetch_context(Arc::new(gateway), config.page_size, start_page);

    // Run the TUI program
    run_tui().await.map_err(|error| FetchError::Io {
        message: format!("TUI error: {error}"),
    })?;

    Ok(())
}

/// Runs the bubbletea-rs program with the `UserTableApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // Build and run the program using the builder pattern.
    // UserTableApp::init() retrieves the fetch context from module-level
    // storage and issues the first page load.
    let program = Program::<UserTableApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
