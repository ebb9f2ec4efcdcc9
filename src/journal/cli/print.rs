use chrono::Local;
use colored::Colorize;
use journal::api::{CmdMessage, MessageLevel};
use journal::model::{DisplayEntry, Entry, IndexEntry};
use std::io::{self, Write};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::setup::MenuChoice;

const MAX_TITLE_WIDTH: usize = 60;
const BANNER: &str = "======================";

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{:^22}", "JOURNAL".bold())?;
    writeln!(out, "{}", BANNER)?;
    for choice in MenuChoice::all() {
        writeln!(out, "[{}] {}", choice.key(), choice.label())?;
    }
    Ok(())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, err: &impl std::fmt::Display) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(err.to_string())])
}

/// `[n] title (timestamp)` per entry, followed by a dimmed relative age.
pub(super) fn print_entries<W: Write>(out: &mut W, entries: &[DisplayEntry]) -> io::Result<()> {
    writeln!(out)?;
    if entries.is_empty() {
        writeln!(out, "No entries yet.")?;
        return Ok(());
    }

    writeln!(out, "--- Entries ---")?;
    for de in entries {
        let title = truncate_to_width(&de.entry.title, MAX_TITLE_WIDTH);
        let line = format!("[{}] {} ({})", de.position, title, de.entry.timestamp);
        match format_age(&de.entry) {
            Some(age) => writeln!(out, "{}  {}", line, age.dimmed())?,
            None => writeln!(out, "{}", line)?,
        }
    }
    Ok(())
}

pub(super) fn print_full_entries<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out)?;
        writeln!(
            out,
            "--- {} ({}) ---",
            entry.meta.title.bold(),
            entry.meta.timestamp
        )?;
        writeln!(out)?;
        writeln!(out, "{}", entry.content)?;
    }
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_age(entry: &IndexEntry) -> Option<String> {
    let created = entry.created_at()?;
    let elapsed = Local::now().naive_local().signed_duration_since(created);
    let formatter = Formatter::new();
    Some(formatter.convert(elapsed.to_std().unwrap_or_default()))
}
