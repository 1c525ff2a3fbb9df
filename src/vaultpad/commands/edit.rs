use crate::commands::helpers::{plural, require_note};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::VaultBackend;

/// Tally of a typing run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Typed {
    pub applied: usize,
    /// Refused because the note is at capacity.
    pub dropped: usize,
    /// Control characters other than line-feed and tab.
    pub ignored: usize,
}

impl Typed {
    pub fn dropped_warning(&self) -> Option<CmdMessage> {
        (self.dropped > 0).then(|| {
            CmdMessage::warning(format!(
                "Note is full: {} dropped",
                plural(self.dropped, "character")
            ))
        })
    }
}

/// Feed `text` through the editing engine of the selected note, the way a
/// keyboard would: line-feed is Enter, tab is Tab, other control characters
/// are not printable and are skipped.
pub fn type_into_active<B: VaultBackend>(notebook: &mut Notebook<B>, text: &str) -> Typed {
    let mut typed = Typed::default();
    for c in text.chars() {
        let applied = match c {
            '\n' => notebook.insert_newline(),
            '\t' => notebook.insert_tab(),
            '\r' => continue,
            c if c.is_control() => {
                typed.ignored += 1;
                continue;
            }
            c => notebook.insert_codepoint(c as u32),
        };
        if applied {
            typed.applied += 1;
        } else {
            typed.dropped += 1;
        }
    }
    log::debug!(
        "typed {} characters, dropped {}",
        typed.applied,
        typed.dropped
    );
    typed
}

/// Select the note at `index` and append `text` to it.
pub fn type_text<B: VaultBackend>(
    notebook: &mut Notebook<B>,
    index: usize,
    text: &str,
) -> Result<CmdResult> {
    let index = require_note(notebook, index)?;
    notebook.select(index);

    let typed = type_into_active(notebook, text);
    let mut result = CmdResult::default();
    if let Some(warning) = typed.dropped_warning() {
        result.add_message(warning);
    }
    if typed.ignored > 0 {
        result.add_message(CmdMessage::info(format!(
            "Skipped {}",
            plural(typed.ignored, "control character")
        )));
    }
    if let Some(summary) = notebook.summary(index) {
        result.add_message(CmdMessage::success(format!(
            "Typed {} into {}",
            plural(typed.applied, "character"),
            summary.title
        )));
        result.affected_notes.push(summary);
    }
    Ok(result)
}

/// Select the note at `index` and delete `count` characters from its end.
pub fn backspace<B: VaultBackend>(
    notebook: &mut Notebook<B>,
    index: usize,
    count: usize,
) -> Result<CmdResult> {
    let index = require_note(notebook, index)?;
    notebook.select(index);

    let mut removed = 0;
    while removed < count && notebook.delete_last_character() {
        removed += 1;
    }

    let mut result = CmdResult::default();
    if let Some(summary) = notebook.summary(index) {
        let message = format!(
            "Deleted {} from {}",
            plural(removed, "character"),
            summary.title
        );
        if removed < count {
            result.add_message(CmdMessage::info(format!("{message} (note is now empty)")));
        } else {
            result.add_message(CmdMessage::success(message));
        }
        result.affected_notes.push(summary);
    }
    Ok(result)
}
