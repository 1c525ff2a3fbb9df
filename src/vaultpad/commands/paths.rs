use crate::commands::helpers::require_note;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::VaultBackend;

/// File paths of the given notes, derived from their current titles.
pub fn run<B: VaultBackend>(notebook: &Notebook<B>, indexes: &[usize]) -> Result<CmdResult> {
    let mut paths = Vec::with_capacity(indexes.len());
    for &index in indexes {
        let index = require_note(notebook, index)?;
        paths.push(notebook.backend().note_path(notebook.notes()[index].title()));
    }
    Ok(CmdResult::default().with_note_paths(paths))
}
