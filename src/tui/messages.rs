//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::provider::{FetchError, UserPage};

/// Messages for the user listing TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Pagination
    /// Move to the previous page (floored at page 1).
    PreviousPage,
    /// Move to the next page.
    NextPage,
    /// Refetch the current page.
    RefreshRequested,

    // Data loading
    /// A page fetch completed successfully.
    ///
    /// Carries the page number the request was issued for so that stale
    /// completions for an abandoned page can be discarded.
    PageLoaded {
        /// Page the request was issued for.
        page: u32,
        /// Records and page metadata returned by the provider.
        users: UserPage,
    },
    /// A page fetch failed.
    PageLoadFailed {
        /// Page the request was issued for.
        page: u32,
        /// Rendered error detail for the log.
        message: String,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Toggle the about view.
    ToggleAbout,
    /// Escape pressed; closes any open overlay.
    EscapePressed,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a failure message from a [`FetchError`] for the given page.
    #[must_use]
    pub fn from_fetch_error(page: u32, error: &FetchError) -> Self {
        Self::PageLoadFailed {
            page,
            message: error.to_string(),
        }
    }
}
