use crate::commands::helpers::require_note;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::VaultBackend;

pub fn run<B: VaultBackend>(
    notebook: &mut Notebook<B>,
    index: usize,
    title: &str,
) -> Result<CmdResult> {
    let index = require_note(notebook, index)?;
    let old = notebook.notes()[index].title().to_string();
    notebook.rename(index, title)?;

    let mut result = CmdResult::default();
    if old == title {
        result.add_message(CmdMessage::info(format!("Title unchanged: {title}")));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Note renamed: {old} -> {title}"
        )));
    }
    if let Some(summary) = notebook.summary(index) {
        result.affected_notes.push(summary);
    }
    Ok(result)
}
