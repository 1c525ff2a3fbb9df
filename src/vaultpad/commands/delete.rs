use crate::commands::helpers::{descending_unique, require_note};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::VaultBackend;

/// Delete notes and their files.
///
/// All positions are checked before anything is removed, so a bad index
/// deletes nothing.
pub fn run<B: VaultBackend>(notebook: &mut Notebook<B>, indexes: &[usize]) -> Result<CmdResult> {
    for &index in indexes {
        require_note(notebook, index)?;
    }

    let mut result = CmdResult::default();
    let mut removed = Vec::new();
    for index in descending_unique(indexes) {
        let Some(summary) = notebook.summary(index) else {
            continue;
        };
        if notebook.delete(index).is_some() {
            removed.push(summary);
        }
    }
    // report in list order
    removed.reverse();
    for summary in &removed {
        result.add_message(CmdMessage::success(format!(
            "Note deleted: {}",
            summary.title
        )));
    }
    Ok(result.with_affected_notes(removed))
}
