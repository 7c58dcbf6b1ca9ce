//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! user listing TUI. It coordinates pagination, async page loading, and the
//! overlay views.
//!
//! # Module Structure
//!
//! - `rendering`: View rendering methods for terminal output
//! - `fetch_handlers`: Page-load commands and completion handling

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::provider::{PageInfo, UserRecord};

use super::components::{SkeletonComponent, UserTableComponent};
use super::input::map_key_to_message;
use super::messages::AppMsg;

mod fetch_handlers;
mod rendering;

/// Overlay currently covering the listing, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Overlay {
    /// No overlay; the listing is visible.
    #[default]
    None,
    /// Keyboard shortcut help.
    Help,
    /// Static about view.
    About,
}

/// Main application model for the user listing TUI.
#[derive(Debug)]
pub struct UserTableApp {
    /// Records from the most recently completed fetch for the current page.
    pub(crate) records: Vec<UserRecord>,
    /// Page metadata from the most recently completed fetch.
    pub(crate) page_info: PageInfo,
    /// Whether a page fetch is currently in flight.
    pub(crate) loading: bool,
    /// Current page number (1-based, never below 1).
    pub(crate) page: u32,
    /// Records requested per page.
    per_page: u8,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Overlay covering the listing, if any.
    pub(crate) overlay: Overlay,
    /// User table component.
    user_table: UserTableComponent,
    /// Loading placeholder component.
    skeleton: SkeletonComponent,
}

impl UserTableApp {
    /// Creates a new application positioned at `start_page`.
    ///
    /// The model starts in the loading state with no records; callers pair
    /// it with a page-load command for `start_page`.
    #[must_use]
    pub fn new(start_page: u32, per_page: u8) -> Self {
        // Pagination invariant: the page number is 1-based.
        let page = start_page.max(1);
        Self {
            records: Vec::new(),
            page_info: PageInfo::new(page, per_page),
            loading: true,
            page,
            per_page,
            width: 80,
            height: 24,
            overlay: Overlay::None,
            user_table: UserTableComponent::new(),
            skeleton: SkeletonComponent::new(),
        }
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.page
    }

    /// Returns true while a page fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the records from the most recently completed fetch.
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::PreviousPage => self.handle_previous_page(),
            AppMsg::NextPage => self.handle_next_page(),
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::PageLoaded { page, users } => self.handle_page_loaded(*page, users),
            AppMsg::PageLoadFailed { page, message } => {
                self.handle_page_load_failed(*page, message)
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.toggle_overlay(Overlay::Help);
                None
            }
            AppMsg::ToggleAbout => {
                self.toggle_overlay(Overlay::About);
                None
            }
            AppMsg::EscapePressed => {
                self.overlay = Overlay::None;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
        }
    }

    // Pagination handlers

    /// Moves to the previous page, floored at page 1.
    ///
    /// At page 1 this is a no-op: the page number never drops below 1 and
    /// no fetch is issued.
    fn handle_previous_page(&mut self) -> Option<Cmd> {
        if self.page <= 1 {
            return None;
        }
        self.page -= 1;
        self.start_load()
    }

    /// Moves to the next page unconditionally.
    ///
    /// The provider reports a total page count but it is advisory only, so
    /// navigation past the end simply yields an empty page.
    fn handle_next_page(&mut self) -> Option<Cmd> {
        self.page = self.page.saturating_add(1);
        self.start_load()
    }

    /// Refetches the current page.
    fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        self.start_load()
    }

    // Overlay and window handlers

    /// Toggles the given overlay, closing it if already open.
    fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == overlay {
            Overlay::None
        } else {
            overlay
        };
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        None
    }
}

impl Model for UserTableApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve page parameters from module-level storage.
        let model = Self::new(super::start_page(), super::per_page());

        // Kick off the initial fetch; the skeleton renders until it resolves.
        let cmd = Self::load_page_cmd(model.page);

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        match self.overlay {
            Overlay::Help => self.render_help_overlay(),
            Overlay::About => self.render_about_view(),
            Overlay::None => self.render_listing(),
        }
    }
}

#[cfg(test)]
mod tests;
