use crate::commands::helpers::plural;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notebook::Notebook;
use crate::store::VaultBackend;

/// List notes, optionally as a window of `limit` rows scrolled by `offset`.
pub fn run<B: VaultBackend>(
    notebook: &mut Notebook<B>,
    offset: usize,
    limit: Option<usize>,
) -> Result<CmdResult> {
    let notes = match limit {
        Some(rows) => {
            notebook.scroll_by(isize::try_from(offset).unwrap_or(isize::MAX), rows);
            notebook.visible(rows)
        }
        None => notebook.list().into_iter().skip(offset).collect(),
    };

    let mut result = CmdResult::default();
    if notes.is_empty() && !notebook.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Offset {offset} is past the last of {}",
            plural(notebook.len(), "note")
        )));
    }
    Ok(result.with_listed_notes(notes))
}

/// Notes whose title or content contains `query`, ignoring case.
pub fn search<B: VaultBackend>(notebook: &mut Notebook<B>, query: &str) -> Result<CmdResult> {
    if !notebook.search_visible() {
        notebook.toggle_search();
    }
    notebook.set_search_query(query);

    let notes: Vec<_> = notebook
        .matches()
        .into_iter()
        .filter_map(|i| notebook.summary(i))
        .collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} matching \"{}\"",
        plural(notes.len(), "note"),
        query
    )));
    Ok(result.with_listed_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::NotebookLimits;
    use crate::store::memory::MemBackend;

    fn notebook(count: usize) -> Notebook<MemBackend> {
        let mut backend = MemBackend::new();
        for i in 0..count {
            backend = backend.with_note(&format!("note {i}"), &format!("body {i}"));
        }
        Notebook::open(backend, NotebookLimits::default()).unwrap()
    }

    #[test]
    fn lists_everything_by_default() {
        let mut nb = notebook(3);
        let result = run(&mut nb, 0, None).unwrap();
        assert_eq!(result.listed_notes.len(), 3);
        assert_eq!(result.listed_notes[2].index, 2);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn windowed_listing_clamps_the_offset() {
        let mut nb = notebook(5);
        let result = run(&mut nb, 10, Some(2)).unwrap();
        let titles: Vec<_> = result.listed_notes.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["note 3", "note 4"]);
    }

    #[test]
    fn huge_offset_scrolls_to_the_end() {
        let mut nb = notebook(5);
        let result = run(&mut nb, usize::MAX, Some(2)).unwrap();
        let titles: Vec<_> = result.listed_notes.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["note 3", "note 4"]);
    }

    #[test]
    fn offset_past_the_end_without_limit_says_so() {
        let mut nb = notebook(2);
        let result = run(&mut nb, 5, None).unwrap();
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn search_filters_notes() {
        let mut nb = notebook(12);
        let result = search(&mut nb, "BODY 1").unwrap();
        let titles: Vec<_> = result.listed_notes.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["note 1", "note 10", "note 11"]);
        assert!(nb.search_visible());
        assert_eq!(nb.search_query(), "BODY 1");
    }
}
