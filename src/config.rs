//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.userdeck.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `USERDECK_API_BASE`, `USERDECK_PAGE`, and
//!    `USERDECK_PAGE_SIZE`
//! 4. **Command-line arguments** – `--api-base`, `--page`/`-p`,
//!    `--page-size`/`-s`, and `--plain`
//!
//! # Configuration File
//!
//! Place `.userdeck.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! api_base = "https://api.freeapi.app/api/v1/public"
//! page = 1
//! page_size = 5
//! plain = false
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::provider::FetchError;

/// Default provider API root serving the random-users endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.freeapi.app/api/v1/public";

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: u8 = 5;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print one page of users to stdout and exit.
    PlainListing,
    /// Interactive TUI for browsing user pages.
    UsersTui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `USERDECK_API_BASE` or `--api-base`: Provider API root URL
/// - `USERDECK_PAGE` or `--page`: Starting page number (1-based)
/// - `USERDECK_PAGE_SIZE` or `--page-size`: Records per page
/// - `--plain`: Non-interactive output mode
///
/// # Example
///
/// ```no_run
/// use userdeck::UserdeckConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = UserdeckConfig::load().expect("failed to load configuration");
/// let page = config.validated_start_page().expect("page must be positive");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "USERDECK",
    discovery(
        dotfile_name = ".userdeck.toml",
        config_file_name = "userdeck.toml",
        app_name = "userdeck"
    )
)]
pub struct UserdeckConfig {
    /// Provider API root URL.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>`
    /// - Environment: `USERDECK_API_BASE`
    /// - Config file: `api_base = "..."`
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Starting page number (1-based).
    ///
    /// Can be provided via:
    /// - CLI: `--page <N>` or `-p <N>`
    /// - Environment: `USERDECK_PAGE`
    /// - Config file: `page = 1`
    #[ortho_config(cli_short = 'p')]
    pub page: u32,

    /// Number of records per page (the provider caps this at 100).
    ///
    /// Can be provided via:
    /// - CLI: `--page-size <N>` or `-s <N>`
    /// - Environment: `USERDECK_PAGE_SIZE`
    /// - Config file: `page_size = 5`
    #[ortho_config(cli_short = 's')]
    pub page_size: u8,

    /// Prints one page of users to stdout instead of starting the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--plain`
    /// - Config file: `plain = true`
    ///
    /// Note: Environment variable `USERDECK_PLAIN` is not supported because
    /// `ortho_config` does not load boolean values from the environment.
    #[ortho_config()]
    pub plain: bool,
}

impl Default for UserdeckConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            plain: false,
        }
    }
}

impl UserdeckConfig {
    /// Returns the configured API base, falling back to the public default.
    #[must_use]
    pub fn resolve_api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Returns the starting page after validating it is 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidPagination`] when the configured page
    /// is zero.
    pub fn validated_start_page(&self) -> Result<u32, FetchError> {
        if self.page == 0 {
            return Err(FetchError::InvalidPagination {
                message: "page must be at least 1".to_owned(),
            });
        }
        Ok(self.page)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `PlainListing` when `--plain` is set, `UsersTui` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.plain {
            OperationMode::PlainListing
        } else {
            OperationMode::UsersTui
        }
    }
}

#[cfg(test)]
mod tests;
