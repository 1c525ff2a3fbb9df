use crate::commands::{CmdMessage, CmdResult, edit};
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::VaultBackend;

/// Create a note, titled or auto-titled, and type `text` into it.
///
/// A full vault is a warning, not an error: the untitled path mirrors the
/// notebook's no-op at capacity.
pub fn run<B: VaultBackend>(
    notebook: &mut Notebook<B>,
    title: Option<&str>,
    text: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let index = match title {
        Some(title) => notebook.create_titled(title)?,
        None => match notebook.create() {
            Some(index) => index,
            None => {
                result.add_message(CmdMessage::warning(format!(
                    "Vault is full ({} notes), nothing created",
                    notebook.limits().max_notes
                )));
                return Ok(result);
            }
        },
    };

    if let Some(text) = text {
        let typed = edit::type_into_active(notebook, text);
        if let Some(warning) = typed.dropped_warning() {
            result.add_message(warning);
        }
    }

    if let Some(summary) = notebook.summary(index) {
        result.add_message(CmdMessage::success(format!(
            "Note created: {}",
            summary.title
        )));
        result.affected_notes.push(summary);
    }
    Ok(result)
}
