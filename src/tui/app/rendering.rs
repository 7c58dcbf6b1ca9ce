//! Rendering logic for the user listing TUI.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::UserTableApp;
use crate::tui::components::UserTableViewContext;

impl UserTableApp {
    /// Renders the listing view: header, table or skeleton, pagination bar,
    /// status bar, and footer.
    pub(super) fn render_listing(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push('\n');

        if self.loading {
            output.push_str(&self.skeleton.view(usize::from(self.width)));
        } else {
            let ctx = UserTableViewContext {
                records: &self.records,
            };
            output.push_str(&self.user_table.view(&ctx));
        }

        output.push('\n');
        output.push_str(&self.render_pagination_bar());
        output.push_str(&self.render_status_bar());
        output.push_str(&self.render_footer());

        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Random Users";
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the pagination bar showing position and navigation arrows.
    pub(super) fn render_pagination_bar(&self) -> String {
        // Totals describe the previous page while a fetch is in flight, so
        // suppress them until it resolves.
        let position = if self.loading {
            format!("Page {}", self.page)
        } else {
            self.page_info.display_label()
        };
        let previous = if self.page > 1 { "< Previous" } else { "          " };
        format!("{previous}   {position}   Next >\n")
    }

    /// Renders the status bar with key hints.
    pub(super) fn render_status_bar(&self) -> String {
        "h/l:page  r:refresh  a:about  ?:help  q:quit\n".to_owned()
    }

    /// Renders the footer line.
    pub(super) fn render_footer(&self) -> String {
        "(c) 2025 Random Users App\n".to_owned()
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Pagination:
  h, p, Left   Previous page
  l, n, Right  Next page
  r            Refresh current page

Other:
  a            Toggle about view
  ?            Toggle this help
  Esc          Close overlay
  q            Quit

Press Esc to close this help.
";
        help_text.to_owned()
    }

    /// Renders the static about view.
    pub(super) fn render_about_view(&self) -> String {
        let about_text = r"
=== About ===

Random Users browses pages of randomly generated user
profiles from the public freeapi.app service. Records
are fetched five at a time; nothing is stored locally.

Press Esc to return to the listing.
";
        about_text.to_owned()
    }
}
