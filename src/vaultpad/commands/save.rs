use crate::commands::helpers::{plural, require_note};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::{Notebook, SaveReport};
use crate::store::VaultBackend;

/// Persist one note.
pub fn run<B: VaultBackend>(notebook: &mut Notebook<B>, index: usize) -> Result<CmdResult> {
    let index = require_note(notebook, index)?;
    let saved = notebook.persist(index)?;

    let mut result = CmdResult::default();
    if let Some(summary) = notebook.summary(index) {
        if saved {
            result.add_message(CmdMessage::success(format!("Note saved: {}", summary.title)));
        } else {
            result.add_message(CmdMessage::info(format!(
                "No unsaved changes in {}",
                summary.title
            )));
        }
        result.affected_notes.push(summary);
    }
    Ok(result)
}

/// Persist every dirty note. Failures become error messages, not an `Err`.
pub fn all<B: VaultBackend>(notebook: &mut Notebook<B>) -> CmdResult {
    let report = notebook.persist_all();
    report_messages(&report)
}

pub fn report_messages(report: &SaveReport) -> CmdResult {
    let mut result = CmdResult::default();
    if !report.saved.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Saved {}",
            plural(report.saved.len(), "note")
        )));
    }
    for (title, error) in &report.failed {
        result.add_message(CmdMessage::error(format!(
            "Could not save {title}: {error}"
        )));
    }
    result
}
