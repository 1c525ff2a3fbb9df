use crate::error::{Result, VaultError};
use crate::notebook::Notebook;
use crate::store::VaultBackend;

/// Check a notebook position, failing with `NoteNotFound`.
pub fn require_note<B: VaultBackend>(notebook: &Notebook<B>, index: usize) -> Result<usize> {
    if index < notebook.len() {
        Ok(index)
    } else {
        Err(VaultError::NoteNotFound(index))
    }
}

/// Positions sorted from last to first, duplicates removed, so that removing
/// them one by one never shifts a position still to be processed.
pub fn descending_unique(indexes: &[usize]) -> Vec<usize> {
    let mut sorted = indexes.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();
    sorted
}

pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::NotebookLimits;
    use crate::store::memory::MemBackend;

    #[test]
    fn require_note_checks_bounds() {
        let nb = Notebook::open(MemBackend::new().with_note("a", ""), NotebookLimits::default())
            .unwrap();
        assert_eq!(require_note(&nb, 0).unwrap(), 0);
        assert!(matches!(require_note(&nb, 1), Err(VaultError::NoteNotFound(1))));
    }

    #[test]
    fn descending_unique_sorts_and_dedups() {
        assert_eq!(descending_unique(&[1, 3, 1, 0]), vec![3, 1, 0]);
        assert!(descending_unique(&[]).is_empty());
    }

    #[test]
    fn plural_words() {
        assert_eq!(plural(1, "note"), "1 note");
        assert_eq!(plural(0, "note"), "0 notes");
        assert_eq!(plural(3, "character"), "3 characters");
    }
}
