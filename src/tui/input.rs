//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('h' | 'p') | KeyCode::Left => Some(AppMsg::PreviousPage),
        KeyCode::Char('l' | 'n') | KeyCode::Right => Some(AppMsg::NextPage),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('a') => Some(AppMsg::ToggleAbout),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        _ => None,
    }
}
