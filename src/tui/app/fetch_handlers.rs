//! Page-load commands and completion handling for the user listing TUI.
//!
//! This module contains the message handlers for asynchronous page fetches.
//! Every fetch command is tagged with the page it was issued for; completions
//! whose tag no longer matches the current page are discarded, so rapid
//! navigation cannot let a stale response overwrite a newer page.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::UserTableApp;
use crate::provider::{PageInfo, UserPage};
use crate::tui::messages::AppMsg;

impl UserTableApp {
    /// Marks the model as loading and returns a fetch command for the
    /// current page.
    pub(super) fn start_load(&mut self) -> Option<Cmd> {
        self.loading = true;
        Some(Self::load_page_cmd(self.page))
    }

    /// Creates a command that fetches the given page through the injected
    /// gateway and reports back with a tagged completion message.
    pub(super) fn load_page_cmd(page: u32) -> Cmd {
        Box::pin(async move {
            let msg = match crate::tui::fetch_page(page).await {
                Ok(users) => AppMsg::PageLoaded { page, users },
                Err(error) => AppMsg::from_fetch_error(page, &error),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Applies a successful fetch completion.
    ///
    /// Completions for a page other than the current one are stale (the user
    /// navigated on before the response arrived) and are dropped.
    pub(super) fn handle_page_loaded(&mut self, page: u32, users: &UserPage) -> Option<Cmd> {
        if page != self.page {
            tracing::debug!("discarding stale response for page {page}; now on {}", self.page);
            return None;
        }

        self.records = users.records.clone();
        self.page_info = users.info;
        self.loading = false;
        None
    }

    /// Applies a failed fetch completion.
    ///
    /// Failures are swallowed at this boundary: the error is logged and the
    /// page degrades to an empty table. Stale failures are dropped like
    /// stale successes.
    pub(super) fn handle_page_load_failed(&mut self, page: u32, message: &str) -> Option<Cmd> {
        if page != self.page {
            tracing::debug!("discarding stale failure for page {page}; now on {}", self.page);
            return None;
        }

        tracing::warn!("fetching page {page} failed: {message}; showing empty table");
        self.records.clear();
        self.page_info = PageInfo::new(self.page, self.page_info.per_page());
        self.loading = false;
        None
    }
}
