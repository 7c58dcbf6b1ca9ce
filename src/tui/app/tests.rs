//! Unit tests for the user listing application model.

use bubbletea_rs::Model;

use super::{Overlay, UserTableApp};
use crate::provider::models::test_support::user_with_id;
use crate::provider::{PageInfo, UserPage};
use crate::tui::messages::AppMsg;

/// Builds a provider page with `count` records for the given page number.
fn page_of(page: u32, count: u64) -> UserPage {
    UserPage {
        records: (1..=count).map(user_with_id).collect(),
        info: PageInfo::new(page, 5).with_total_pages(Some(10)),
    }
}

/// Builds an app that has finished loading `count` records on `page`.
fn loaded_app(page: u32, count: u64) -> UserTableApp {
    let mut app = UserTableApp::new(page, 5);
    let cmd = app.handle_message(&AppMsg::PageLoaded {
        page,
        users: page_of(page, count),
    });
    assert!(cmd.is_none());
    app
}

#[test]
fn new_app_starts_loading_with_empty_records() {
    let app = UserTableApp::new(1, 5);
    assert!(app.is_loading());
    assert!(app.records().is_empty());
    assert_eq!(app.current_page(), 1);
}

#[test]
fn page_loaded_for_current_page_replaces_records() {
    let app = loaded_app(1, 5);
    assert_eq!(app.records().len(), 5);
    assert!(!app.is_loading());
}

#[test]
fn page_loaded_for_abandoned_page_is_discarded() {
    let mut app = loaded_app(1, 5);
    let cmd = app.handle_message(&AppMsg::NextPage);
    assert!(cmd.is_some());
    assert_eq!(app.current_page(), 2);
    assert!(app.is_loading());

    // A late completion for page 1 must not overwrite page 2 state.
    let stale = app.handle_message(&AppMsg::PageLoaded {
        page: 1,
        users: page_of(1, 3),
    });
    assert!(stale.is_none());
    assert!(app.is_loading());
    assert_eq!(app.records().len(), 5);

    // The matching completion still applies.
    app.handle_message(&AppMsg::PageLoaded {
        page: 2,
        users: page_of(2, 4),
    });
    assert!(!app.is_loading());
    assert_eq!(app.records().len(), 4);
}

#[test]
fn previous_page_at_floor_is_a_noop() {
    let mut app = loaded_app(1, 5);
    let cmd = app.handle_message(&AppMsg::PreviousPage);
    assert!(cmd.is_none());
    assert_eq!(app.current_page(), 1);
    assert!(!app.is_loading());
}

#[test]
fn previous_page_from_two_returns_to_one() {
    let mut app = loaded_app(2, 5);
    let cmd = app.handle_message(&AppMsg::PreviousPage);
    assert!(cmd.is_some());
    assert_eq!(app.current_page(), 1);
    assert!(app.is_loading());
}

#[test]
fn next_page_always_increments() {
    // Even an empty page has no known upper bound; Next keeps going.
    let mut app = loaded_app(7, 0);
    let cmd = app.handle_message(&AppMsg::NextPage);
    assert!(cmd.is_some());
    assert_eq!(app.current_page(), 8);
}

#[test]
fn next_then_previous_twice_floors_at_one() {
    let mut app = loaded_app(1, 5);

    app.handle_message(&AppMsg::NextPage);
    app.handle_message(&AppMsg::PageLoaded {
        page: 2,
        users: page_of(2, 5),
    });
    assert_eq!(app.current_page(), 2);

    app.handle_message(&AppMsg::PreviousPage);
    app.handle_message(&AppMsg::PageLoaded {
        page: 1,
        users: page_of(1, 5),
    });
    app.handle_message(&AppMsg::PreviousPage);
    assert_eq!(app.current_page(), 1);
}

#[test]
fn page_load_failure_degrades_to_empty_table() {
    let mut app = loaded_app(1, 5);
    app.handle_message(&AppMsg::NextPage);
    let cmd = app.handle_message(&AppMsg::PageLoadFailed {
        page: 2,
        message: "network error".to_owned(),
    });
    assert!(cmd.is_none());
    assert!(app.records().is_empty());
    assert!(!app.is_loading());
}

#[test]
fn stale_failure_is_discarded() {
    let mut app = loaded_app(1, 5);
    app.handle_message(&AppMsg::NextPage);
    app.handle_message(&AppMsg::PageLoadFailed {
        page: 1,
        message: "network error".to_owned(),
    });
    assert!(app.is_loading());
    assert_eq!(app.records().len(), 5);
}

#[test]
fn refresh_reloads_current_page() {
    let mut app = loaded_app(3, 5);
    let cmd = app.handle_message(&AppMsg::RefreshRequested);
    assert!(cmd.is_some());
    assert_eq!(app.current_page(), 3);
    assert!(app.is_loading());
}

#[test]
fn view_shows_skeleton_while_loading() {
    let mut app = loaded_app(1, 5);
    app.handle_message(&AppMsg::NextPage);
    let output = app.view();
    assert!(output.contains('░'));
    assert!(output.contains("[Loading...]"));
    // Previous table content is hidden while the fetch is in flight.
    assert!(!output.contains("User 1"));
}

#[test]
fn view_shows_one_row_per_record_after_load() {
    let app = loaded_app(1, 3);
    let output = app.view();
    assert!(!output.contains('░'));
    for id in 1..=3 {
        assert!(output.contains(&format!("User {id}")));
    }
}

#[test]
fn view_shows_page_position_with_known_total() {
    let app = loaded_app(2, 5);
    assert!(app.view().contains("Page 2 of 10"));
}

#[test]
fn quit_returns_a_command() {
    let mut app = loaded_app(1, 5);
    assert!(app.handle_message(&AppMsg::Quit).is_some());
}

#[test]
fn help_overlay_toggles_and_escape_closes() {
    let mut app = loaded_app(1, 5);

    app.handle_message(&AppMsg::ToggleHelp);
    assert_eq!(app.overlay, Overlay::Help);
    assert!(app.view().contains("Keyboard Shortcuts"));

    app.handle_message(&AppMsg::EscapePressed);
    assert_eq!(app.overlay, Overlay::None);
}

#[test]
fn about_view_toggles() {
    let mut app = loaded_app(1, 5);
    app.handle_message(&AppMsg::ToggleAbout);
    assert_eq!(app.overlay, Overlay::About);
    assert!(app.view().contains("About"));

    app.handle_message(&AppMsg::ToggleAbout);
    assert_eq!(app.overlay, Overlay::None);
}
