//! Plain-text rendering of the collection state.

use std::io::{self, Write};

use chrono::DateTime;
use roster_engine::{CollectionState, FormMode, UserRecord};

/// Shown when a successful fetch returned no records.
pub const EMPTY_MESSAGE: &str = "No users found. Add your first user above!";

/// Render the error banner, form heading, and user list.
pub fn render(state: &CollectionState, out: &mut dyn Write) -> io::Result<()> {
    if let Some(msg) = state.error_message() {
        writeln!(out, "Error: {msg}  (type `dismiss` to clear)")?;
    }

    match (state.form_mode(), state.edit_target()) {
        (FormMode::Edit, Some(target)) => {
            writeln!(out, "== Edit User: {} (id {}) ==", target.name, target.id)?
        }
        _ => writeln!(out, "== Add New User ==")?,
    }

    writeln!(out, "Users ({})", state.items().len())?;
    if state.items().is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
    } else {
        for record in state.items() {
            render_card(record, out)?;
        }
    }

    Ok(())
}

fn render_card(record: &UserRecord, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "  #{} {}", record.id, record.name)?;
    writeln!(out, "     Email: {}", record.email)?;
    writeln!(out, "     Phone: {}", record.phone)?;
    writeln!(out, "     Department: {}", record.department)?;
    writeln!(out, "     Created: {}", format_created(&record.created_at))
}

/// `YYYY-MM-DD` for RFC 3339 timestamps, the raw text otherwise.
pub fn format_created(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.date_naive().format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}
