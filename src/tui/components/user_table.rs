//! User table component rendering one page of user records.
//!
//! Renders a column-aligned table with one row per record. Column widths are
//! fixed; cell content is truncated with an ellipsis when it overflows, using
//! display width so wide characters keep the columns aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::provider::UserRecord;

/// Table columns in display order with their content widths.
const COLUMNS: [(&str, usize); 6] = [
    ("Avatar", 26),
    ("Name", 24),
    ("Email", 28),
    ("Phone", 16),
    ("Location", 28),
    ("Username", 14),
];

/// Separator between adjacent cells.
const CELL_GAP: &str = "  ";

/// Placeholder shown for fields the provider omitted.
const MISSING_FIELD: &str = "unknown";

/// Context for rendering the user table view.
#[derive(Debug, Clone)]
pub struct UserTableViewContext<'a> {
    /// Records on the current page, in provider order.
    pub records: &'a [UserRecord],
}

/// Component for displaying one page of user records.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserTableComponent;

impl UserTableComponent {
    /// Creates a new user table component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the table as a string, one line per record plus a header.
    #[must_use]
    pub fn view(&self, ctx: &UserTableViewContext<'_>) -> String {
        if ctx.records.is_empty() {
            return "  No users to display.\n".to_owned();
        }

        let mut output = String::new();
        output.push_str(&Self::header_row());
        output.push_str(&Self::separator_row());

        for record in ctx.records {
            output.push_str(&Self::format_record_row(record));
            output.push('\n');
        }

        output
    }

    /// Renders the column header row.
    fn header_row() -> String {
        let cells: Vec<String> = COLUMNS
            .iter()
            .map(|&(label, width)| fit_cell(label, width))
            .collect();
        format!("{}\n", cells.join(CELL_GAP))
    }

    /// Renders the dashed separator under the header.
    fn separator_row() -> String {
        let cells: Vec<String> = COLUMNS
            .iter()
            .map(|&(_, width)| "-".repeat(width))
            .collect();
        format!("{}\n", cells.join(CELL_GAP))
    }

    /// Formats a single record as an aligned table row.
    fn format_record_row(record: &UserRecord) -> String {
        let avatar = record.avatar_url.as_deref().unwrap_or(MISSING_FIELD);
        let email = record.email.as_deref().unwrap_or(MISSING_FIELD);
        let phone = record.phone.as_deref().unwrap_or(MISSING_FIELD);
        let username = record.username.as_deref().unwrap_or(MISSING_FIELD);

        let values = [
            avatar.to_owned(),
            record.full_name(),
            email.to_owned(),
            phone.to_owned(),
            record.location(),
            username.to_owned(),
        ];

        let cells: Vec<String> = COLUMNS
            .iter()
            .zip(values.iter())
            .map(|(&(_, width), value)| fit_cell(value, width))
            .collect();
        cells.join(CELL_GAP)
    }
}

/// Fits text into a fixed-width cell.
///
/// Pads with spaces when the text is narrower than the cell and truncates
/// with a trailing ellipsis when it is wider. Widths are display widths, so
/// East Asian wide characters count as two columns.
fn fit_cell(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }

    let mut out = String::new();
    let mut used = 0_usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    used += 1;
    format!("{out}{}", " ".repeat(width.saturating_sub(used)))
}
