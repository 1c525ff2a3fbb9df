//! # Rendering Module
//!
//! Turns command results into terminal text. Layout math (widths, truncation,
//! padding) is Unicode-aware and done here; styles come from `styles`.
//!
//! Every `render_*` function returns a `String` and takes `use_color`, so
//! tests can check plain output.

use super::styles::{self, paint};
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vaultpad::api::{CmdMessage, MessageLevel, NoteView};
use vaultpad::layout::LineKind;
use vaultpad::model::NoteSummary;

/// Upper bound for list rows, even on wide terminals.
pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const DIRTY_MARKER: &str = "*";
const BULLET_MARKER: &str = "•";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// One row per note: index, title, word count and modification time.
pub fn render_note_list(notes: &[NoteSummary], line_width: usize, use_color: bool) -> String {
    if notes.is_empty() {
        return "No notes found.\n".to_string();
    }

    let line_width = line_width.min(LINE_WIDTH);
    let index_width = notes
        .iter()
        .map(|n| display_index(n).width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for note in notes {
        let index = format!("{:>index_width$}", display_index(note));
        let marker = if note.dirty { DIRTY_MARKER } else { " " };
        let words = format!("{:>6}w", note.stats.words);
        let time_ago = note
            .modified_at
            .map(format_time_ago)
            .unwrap_or_else(|| format!("{:>TIME_WIDTH$}", "unsaved"));

        // "  {index} {marker} {title}{padding} {words} {time}"
        let fixed = 2 + index.width() + 3 + 1 + words.width() + 1 + TIME_WIDTH;
        let available = line_width.saturating_sub(fixed).max(8);
        let title = truncate_to_width(&note.title, available);
        let padding = " ".repeat(available.saturating_sub(title.width()));

        out.push_str(&format!(
            "  {} {} {}{} {} {}\n",
            index,
            paint(&styles::DIRTY, marker, use_color),
            title,
            padding,
            paint(&styles::MUTED, &words, use_color),
            paint(&styles::TIME, &time_ago, use_color),
        ));
    }
    out
}

/// A laid-out note: header, then one styled row per display line.
pub fn render_note_view(view: &NoteView, use_color: bool) -> String {
    let mut out = String::new();
    let dirty = if view.dirty {
        format!(" {}", paint(&styles::DIRTY, DIRTY_MARKER, use_color))
    } else {
        String::new()
    };
    out.push_str(&format!(
        "{}{}\n",
        paint(&styles::TITLE, &view.title, use_color),
        dirty
    ));
    out.push_str(&paint(
        &styles::MUTED,
        &format!(
            "{} words · {} chars · {} bytes",
            view.stats.words, view.stats.chars, view.stats.bytes
        ),
        use_color,
    ));
    out.push_str("\n\n");

    for line in &view.lines {
        let row = match line.kind {
            LineKind::Heading1 => paint(&styles::HEADING1, &line.text, use_color),
            LineKind::Heading2 => paint(&styles::HEADING2, &line.text, use_color),
            LineKind::Bullet => format!(
                "{} {}",
                paint(&styles::BULLET, BULLET_MARKER, use_color),
                line.text
            ),
            LineKind::Plain => line.text.clone(),
        };
        out.push_str(&row);
        out.push('\n');
    }
    if view.truncated {
        out.push_str(&paint(&styles::MUTED, "…", use_color));
        out.push('\n');
    }
    out
}

fn display_index(note: &NoteSummary) -> String {
    format!("{}.", note.index + 1)
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

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
