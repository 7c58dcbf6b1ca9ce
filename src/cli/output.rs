//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use userdeck::{FetchError, UserPage};

/// Writes a one-page user listing to the given writer.
pub fn write_user_listing<W: Write>(writer: &mut W, page: &UserPage) -> Result<(), FetchError> {
    writeln!(writer, "Random users ({}):", page.info.display_label()).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    if page.records.is_empty() {
        writeln!(writer, "  (no users on this page)").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for record in &page.records {
        let email = record.email.as_deref().unwrap_or("unknown");
        let phone = record.phone.as_deref().unwrap_or("unknown");
        let username = record.username.as_deref().unwrap_or("unknown");
        writeln!(
            writer,
            "  {} <{email}> {phone} | {} | @{username}",
            record.full_name(),
            record.location()
        )
        .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

fn io_error(error: &io::Error) -> FetchError {
    FetchError::Io {
        message: error.to_string(),
    }
}
