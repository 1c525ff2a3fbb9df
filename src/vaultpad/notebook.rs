//! # Notebook
//!
//! The note store: an ordered list of notes plus the UI state that goes with it
//! (selection, list scroll offset, search). Order is load order followed by
//! creation order; the notebook never re-sorts.
//!
//! Store operations keep the quiet contract of an editor surface. Creating
//! past capacity, selecting a missing index or typing into a full note are
//! no-ops that report `false`/`None` rather than errors; the command layer
//! decides whether to tell the user. Persistence failures are real errors and
//! are returned, with the note left dirty so a later save retries.
//!
//! Editing goes through the notebook rather than straight to the
//! [`TextBuffer`], so that every applied edit marks the note dirty.

use crate::buffer::{DEFAULT_CAPACITY, TextBuffer};
use crate::error::{Result, VaultError};
use crate::model::{Note, NoteSummary, validate_title};
use crate::store::VaultBackend;
use std::cmp::Ordering;

pub const WELCOME_TITLE: &str = "Welcome";

const UNTITLED_ATTEMPTS: usize = 1000;

const WELCOME_TEXT: &str = "# Welcome to vaultpad\n\
\n\
Every note is a plain markdown file in your vault.\n\
\n\
## Getting around\n\
\n\
- vaultpad new creates a note\n\
- vaultpad type 1 \"some text\" appends to a note\n\
- vaultpad view 1 renders it, wrapped to your terminal\n\
- vaultpad search word finds notes by title or content\n\
\n\
Unicode works everywhere: ş, ğ, ü, ö, ç, ı, 📝\n";

/// Size limits enforced at the notebook boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotebookLimits {
    pub max_notes: usize,
    pub max_title_len: usize,
    pub content_capacity: usize,
}

impl Default for NotebookLimits {
    fn default() -> Self {
        Self {
            max_notes: 100,
            max_title_len: 128,
            content_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Outcome of [`Notebook::persist_all`].
#[derive(Debug, Default)]
pub struct SaveReport {
    pub saved: Vec<String>,
    pub failed: Vec<(String, VaultError)>,
}

impl SaveReport {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Notebook<B: VaultBackend> {
    backend: B,
    limits: NotebookLimits,
    notes: Vec<Note>,
    selected: Option<usize>,
    scroll_offset: usize,
    search_query: String,
    search_visible: bool,
}

impl<B: VaultBackend> Notebook<B> {
    /// An empty notebook. Nothing is read until [`Notebook::load`].
    pub fn new(backend: B, limits: NotebookLimits) -> Self {
        Self {
            backend,
            limits,
            notes: Vec::new(),
            selected: None,
            scroll_offset: 0,
            search_query: String::new(),
            search_visible: false,
        }
    }

    /// Startup: make sure the vault exists, load it, add the welcome note to an
    /// empty vault and select the first note.
    pub fn open(backend: B, limits: NotebookLimits) -> Result<Self> {
        let mut notebook = Self::new(backend, limits);
        notebook.backend.ensure_vault()?;
        notebook.load()?;
        if notebook.notes.is_empty() {
            notebook.add_welcome_note();
        }
        if !notebook.notes.is_empty() {
            notebook.selected = Some(0);
        }
        Ok(notebook)
    }

    /// Replace the in-memory notes with the vault's contents.
    ///
    /// Returns the number of notes loaded. A note that cannot be read loads
    /// empty; files beyond `max_notes` are skipped.
    pub fn load(&mut self) -> Result<usize> {
        self.notes.clear();
        self.selected = None;
        self.scroll_offset = 0;

        let titles = self.backend.list_titles()?;
        if titles.len() > self.limits.max_notes {
            log::warn!(
                "vault holds {} notes, only the first {} are loaded",
                titles.len(),
                self.limits.max_notes
            );
        }

        for title in titles.into_iter().take(self.limits.max_notes) {
            let text = match self.backend.read_note(&title) {
                Ok(Some(bytes)) => match String::from_utf8(bytes) {
                    Ok(text) => text,
                    Err(e) => {
                        log::warn!("note \"{title}\" is not valid UTF-8, replacing bad bytes");
                        String::from_utf8_lossy(e.as_bytes()).into_owned()
                    }
                },
                Ok(None) => String::new(),
                Err(e) => {
                    log::warn!("failed to read note \"{title}\": {e}");
                    String::new()
                }
            };
            if text.len() >= self.limits.content_capacity {
                log::warn!("note \"{title}\" exceeds the content capacity and was truncated");
            }
            let path = self.backend.note_path(&title);
            self.notes.push(Note::loaded(
                title,
                path,
                &text,
                self.limits.content_capacity,
            ));
        }

        log::debug!("loaded {} notes", self.notes.len());
        Ok(self.notes.len())
    }

    fn add_welcome_note(&mut self) {
        let mut note = Note::new(
            WELCOME_TITLE.to_string(),
            self.backend.note_path(WELCOME_TITLE),
            self.limits.content_capacity,
        );
        note.content = TextBuffer::with_text(WELCOME_TEXT, self.limits.content_capacity);
        self.notes.push(note);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn limits(&self) -> NotebookLimits {
        self.limits
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.notes.len() >= self.limits.max_notes
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn find(&self, title: &str) -> Option<usize> {
        self.notes.iter().position(|n| n.title == title)
    }

    pub fn summary(&self, index: usize) -> Option<NoteSummary> {
        let note = self.notes.get(index)?;
        let modified_at = match note.stored_as() {
            Some(stored) => self.backend.modified_at(stored).unwrap_or_else(|e| {
                log::debug!("no modification time for \"{stored}\": {e}");
                None
            }),
            None => None,
        };
        Some(NoteSummary {
            index,
            title: note.title.clone(),
            dirty: note.dirty,
            selected: self.selected == Some(index),
            stats: note.stats(),
            modified_at,
        })
    }

    /// Every note, in notebook order.
    pub fn list(&self) -> Vec<NoteSummary> {
        (0..self.notes.len())
            .filter_map(|i| self.summary(i))
            .collect()
    }

    // --- Creation, selection, deletion ---

    /// Append an empty "Untitled N" note and select it. `None` at capacity or
    /// when no untitled name is free.
    pub fn create(&mut self) -> Option<usize> {
        if self.is_full() {
            log::debug!("create refused: notebook is full");
            return None;
        }
        let Some(title) = self.next_untitled() else {
            log::warn!("create refused: no free untitled name");
            return None;
        };
        Some(self.push_new(title))
    }

    /// Append an empty note with a caller-chosen title and select it.
    pub fn create_titled(&mut self, title: &str) -> Result<usize> {
        if self.is_full() {
            return Err(VaultError::VaultFull(self.limits.max_notes));
        }
        self.check_title(title, None)?;
        Ok(self.push_new(title.to_string()))
    }

    fn push_new(&mut self, title: String) -> usize {
        let path = self.backend.note_path(&title);
        self.notes
            .push(Note::new(title, path, self.limits.content_capacity));
        let index = self.notes.len() - 1;
        self.selected = Some(index);
        log::debug!("created note {index}");
        index
    }

    /// First "Untitled N" that is neither in memory nor on disk. A name whose
    /// existence cannot be checked counts as taken.
    fn next_untitled(&self) -> Option<String> {
        let start = self.notes.len() + 1;
        (start..start + UNTITLED_ATTEMPTS)
            .map(|n| format!("Untitled {n}"))
            .find(|title| {
                if self.find(title).is_some() {
                    return false;
                }
                match self.backend.note_exists(title) {
                    Ok(exists) => !exists,
                    Err(e) => {
                        log::debug!("skipping \"{title}\": {e}");
                        false
                    }
                }
            })
    }

    fn check_title(&self, title: &str, renaming: Option<usize>) -> Result<()> {
        validate_title(title, self.limits.max_title_len)?;
        match self.find(title) {
            Some(existing) if Some(existing) != renaming => {
                Err(VaultError::DuplicateTitle(title.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a note. Out-of-range indexes leave the selection alone.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.notes.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Remove a note and its file.
    ///
    /// The selection keeps pointing at the same note when an earlier one is
    /// removed, moves to the neighbour when the selected note itself goes, and
    /// becomes `None` once the notebook is empty.
    pub fn delete(&mut self, index: usize) -> Option<Note> {
        if index >= self.notes.len() {
            return None;
        }
        let note = self.notes.remove(index);
        if let Some(stored) = note.stored_as()
            && !self.file_in_use(stored, None)
            && let Err(e) = self.backend.delete_note(stored)
        {
            log::warn!("failed to delete file for \"{stored}\": {e}");
        }

        self.selected = match self.selected {
            _ if self.notes.is_empty() => None,
            Some(s) => match s.cmp(&index) {
                Ordering::Greater => Some(s - 1),
                _ => Some(s.min(self.notes.len() - 1)),
            },
            None => None,
        };
        self.clamp_scroll(None);
        log::debug!("deleted note \"{}\"", note.title);
        Some(note)
    }

    /// Give a note a new title. The old file is removed on the next persist.
    pub fn rename(&mut self, index: usize, title: &str) -> Result<()> {
        if index >= self.notes.len() {
            return Err(VaultError::NoteNotFound(index));
        }
        self.check_title(title, Some(index))?;
        let path = self.backend.note_path(title);
        let note = &mut self.notes[index];
        if note.title != title {
            note.title = title.to_string();
            note.path = path;
            note.dirty = true;
        }
        Ok(())
    }

    pub fn mark_dirty(&mut self, index: usize) {
        if let Some(note) = self.notes.get_mut(index) {
            note.dirty = true;
        }
    }

    // --- Persistence ---

    /// Write a dirty note to the vault. `Ok(false)` when there was nothing to do.
    ///
    /// The path is recomputed from the current title. An existing file with
    /// that name is replaced. On failure the note stays dirty.
    pub fn persist(&mut self, index: usize) -> Result<bool> {
        let note = self
            .notes
            .get(index)
            .ok_or(VaultError::NoteNotFound(index))?;
        if !note.dirty {
            return Ok(false);
        }

        let title = note.title.clone();
        self.backend.write_note(&title, note.content.as_str())?;

        let previous = note.stored_as.clone();
        if let Some(old) = previous.filter(|old| *old != title)
            && !self.file_in_use(&old, Some(index))
            && self.distinct_files(&old, &title)
            && let Err(e) = self.backend.delete_note(&old)
        {
            log::warn!("failed to remove old file for \"{old}\": {e}");
        }

        let path = self.backend.note_path(&title);
        let note = &mut self.notes[index];
        note.path = path;
        note.stored_as = Some(title);
        note.dirty = false;
        log::debug!("saved note \"{}\"", note.title);
        Ok(true)
    }

    /// Whether the file stored as `stored` still backs a note other than
    /// `except`, under its title or as its last written file. Compared without
    /// case, as the vault may sit on a case-insensitive filesystem.
    fn file_in_use(&self, stored: &str, except: Option<usize>) -> bool {
        let key = stored.to_lowercase();
        self.notes.iter().enumerate().any(|(i, note)| {
            Some(i) != except
                && (note.title.to_lowercase() == key
                    || note
                        .stored_as
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase() == key))
        })
    }

    /// Whether `old` and `new` name two files. Titles differing only in case
    /// name one file on a case-insensitive filesystem; the listing tells.
    fn distinct_files(&self, old: &str, new: &str) -> bool {
        if old.to_lowercase() != new.to_lowercase() {
            return true;
        }
        match self.backend.list_titles() {
            Ok(titles) => titles.iter().any(|t| t == old) && titles.iter().any(|t| t == new),
            Err(e) => {
                log::warn!("keeping old file for \"{old}\": {e}");
                false
            }
        }
    }

    /// Persist every dirty note, continuing past failures.
    pub fn persist_all(&mut self) -> SaveReport {
        let mut report = SaveReport::default();
        for index in 0..self.notes.len() {
            match self.persist(index) {
                Ok(true) => report.saved.push(self.notes[index].title.clone()),
                Ok(false) => {}
                Err(e) => {
                    log::warn!("failed to save \"{}\": {e}", self.notes[index].title);
                    report.failed.push((self.notes[index].title.clone(), e));
                }
            }
        }
        report
    }

    // --- Editing the active note ---

    pub fn insert_codepoint(&mut self, codepoint: u32) -> bool {
        self.edit_active(|buf| buf.insert_codepoint(codepoint))
    }

    pub fn delete_last_character(&mut self) -> bool {
        self.edit_active(TextBuffer::delete_last_char)
    }

    pub fn insert_newline(&mut self) -> bool {
        self.edit_active(TextBuffer::insert_newline)
    }

    pub fn insert_tab(&mut self) -> bool {
        self.edit_active(TextBuffer::insert_tab)
    }

    fn edit_active(&mut self, edit: impl FnOnce(&mut TextBuffer) -> bool) -> bool {
        let Some(note) = self.selected.and_then(|i| self.notes.get_mut(i)) else {
            return false;
        };
        let applied = edit(&mut note.content);
        if applied {
            note.dirty = true;
        }
        applied
    }

    // --- List scrolling ---

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Move the list window by `delta` rows, keeping it inside the list.
    pub fn scroll_by(&mut self, delta: isize, visible_rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.clamp_scroll(Some(visible_rows));
    }

    fn clamp_scroll(&mut self, visible_rows: Option<usize>) {
        let max = self
            .notes
            .len()
            .saturating_sub(visible_rows.unwrap_or(1).max(1));
        self.scroll_offset = self.scroll_offset.min(max);
    }

    /// Summaries inside the current scroll window.
    pub fn visible(&self, visible_rows: usize) -> Vec<NoteSummary> {
        (self.scroll_offset..self.notes.len())
            .take(visible_rows)
            .filter_map(|i| self.summary(i))
            .collect()
    }

    // --- Search ---

    pub fn search_visible(&self) -> bool {
        self.search_visible
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Show or hide the search bar. Hiding clears the query.
    pub fn toggle_search(&mut self) -> bool {
        self.search_visible = !self.search_visible;
        if !self.search_visible {
            self.search_query.clear();
        }
        self.search_visible
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Indexes of notes whose title or content contains the query, ignoring
    /// case. Every note matches an empty query.
    pub fn matches(&self) -> Vec<usize> {
        let needle = self.search_query.trim().to_lowercase();
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| {
                needle.is_empty()
                    || note.title.to_lowercase().contains(&needle)
                    || note.text().to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    fn limits() -> NotebookLimits {
        NotebookLimits::default()
    }

    fn open(backend: MemBackend) -> Notebook<MemBackend> {
        Notebook::open(backend, limits()).unwrap()
    }

    fn type_text(nb: &mut Notebook<MemBackend>, text: &str) {
        for c in text.chars() {
            match c {
                '\n' => assert!(nb.insert_newline()),
                _ => assert!(nb.insert_codepoint(c as u32)),
            }
        }
    }

    #[test]
    fn empty_vault_gets_a_welcome_note() {
        let nb = open(MemBackend::new());
        assert!(nb.backend().vault_created());
        assert_eq!(nb.len(), 1);
        assert_eq!(nb.notes()[0].title(), WELCOME_TITLE);
        assert!(nb.notes()[0].is_dirty());
        assert!(nb.notes()[0].text().starts_with("# Welcome"));
        assert_eq!(nb.selected(), Some(0));
    }

    #[test]
    fn loads_notes_clean_in_backend_order() {
        let nb = open(
            MemBackend::new()
                .with_note("Zeta", "z")
                .with_note("Alpha", "a"),
        );
        let titles: Vec<_> = nb.list().into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Zeta", "Alpha"]);
        assert!(nb.notes().iter().all(|n| !n.is_dirty()));
        assert_eq!(nb.selected(), Some(0));
    }

    #[test]
    fn load_respects_max_notes_and_capacity() {
        let backend = MemBackend::new()
            .with_note("a", "0123456789")
            .with_note("b", "")
            .with_note("c", "");
        let nb = Notebook::open(
            backend,
            NotebookLimits {
                max_notes: 2,
                max_title_len: 128,
                content_capacity: 5,
            },
        )
        .unwrap();
        assert_eq!(nb.len(), 2);
        assert_eq!(nb.notes()[0].text(), "0123");
    }

    #[test]
    fn invalid_utf8_loads_lossily() {
        let nb = open(MemBackend::new().with_raw_note("bad", &[b'o', b'k', 0xFF]));
        assert_eq!(nb.notes()[0].text(), "ok\u{FFFD}");
    }

    #[test]
    fn create_appends_untitled_and_selects() {
        let mut nb = open(MemBackend::new().with_note("First", ""));
        let index = nb.create().unwrap();
        assert_eq!(index, 1);
        assert_eq!(nb.notes()[1].title(), "Untitled 2");
        assert!(nb.notes()[1].is_dirty());
        assert_eq!(nb.selected(), Some(1));
    }

    #[test]
    fn create_skips_titles_in_use() {
        let mut nb = open(
            MemBackend::new()
                .with_note("Untitled 2", "")
                .with_note("Untitled 3", ""),
        );
        let index = nb.create().unwrap();
        assert_eq!(nb.notes()[index].title(), "Untitled 4");
    }

    #[test]
    fn create_is_a_noop_at_capacity() {
        let mut nb = Notebook::open(
            MemBackend::new().with_note("only", ""),
            NotebookLimits {
                max_notes: 1,
                ..limits()
            },
        )
        .unwrap();
        assert_eq!(nb.create(), None);
        assert_eq!(nb.len(), 1);
        assert!(matches!(
            nb.create_titled("Other"),
            Err(VaultError::VaultFull(1))
        ));
    }

    #[test]
    fn create_titled_rejects_duplicates_and_bad_titles() {
        let mut nb = open(MemBackend::new().with_note("Taken", ""));
        assert!(matches!(
            nb.create_titled("Taken"),
            Err(VaultError::DuplicateTitle(_))
        ));
        assert!(matches!(
            nb.create_titled("../escape"),
            Err(VaultError::InvalidTitle(_))
        ));
        assert_eq!(nb.create_titled("Fresh").unwrap(), 1);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut nb = open(MemBackend::new().with_note("a", "").with_note("b", ""));
        assert!(nb.select(1));
        assert!(!nb.select(2));
        assert_eq!(nb.selected(), Some(1));
    }

    #[test]
    fn delete_clamps_selection_for_every_position() {
        for count in 1..=4 {
            for selected in 0..count {
                for deleted in 0..count {
                    let mut backend = MemBackend::new();
                    for i in 0..count {
                        backend = backend.with_note(&format!("n{i}"), "");
                    }
                    let mut nb = open(backend);
                    nb.select(selected);
                    let selected_title = nb.notes()[selected].title().to_string();

                    nb.delete(deleted).unwrap();

                    match nb.selected() {
                        None => assert!(nb.is_empty()),
                        Some(s) => {
                            assert!(s < nb.len());
                            if deleted != selected {
                                assert_eq!(nb.notes()[s].title(), selected_title);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn delete_removes_the_file_and_keeps_order() {
        let mut nb = open(
            MemBackend::new()
                .with_note("a", "")
                .with_note("b", "")
                .with_note("c", ""),
        );
        let removed = nb.delete(1).unwrap();
        assert_eq!(removed.title(), "b");
        assert!(!nb.backend().contains("b"));
        let titles: Vec<_> = nb.notes().iter().map(|n| n.title().to_string()).collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(nb.delete(5).is_none());
    }

    #[test]
    fn delete_of_unsaved_note_leaves_other_files_alone() {
        let mut nb = open(MemBackend::new().with_note("Keep", "x"));
        let index = nb.create().unwrap();
        nb.delete(index).unwrap();
        assert!(nb.backend().contains("Keep"));
    }

    #[test]
    fn edits_apply_to_the_selection_and_mark_dirty() {
        let mut nb = open(MemBackend::new().with_note("a", "").with_note("b", ""));
        nb.select(1);
        type_text(&mut nb, "hi\nş");
        assert!(nb.insert_tab());
        assert_eq!(nb.notes()[1].text(), "hi\nş    ");
        assert!(nb.notes()[1].is_dirty());
        assert!(!nb.notes()[0].is_dirty());

        assert!(nb.delete_last_character());
        assert_eq!(nb.notes()[1].text(), "hi\nş   ");
    }

    #[test]
    fn refused_edit_does_not_mark_dirty() {
        let mut nb = Notebook::open(
            MemBackend::new().with_note("tiny", "abc"),
            NotebookLimits {
                content_capacity: 4,
                ..limits()
            },
        )
        .unwrap();
        assert!(!nb.insert_codepoint('d' as u32));
        assert!(!nb.notes()[0].is_dirty());
        assert!(nb.delete_last_character());
        assert!(nb.notes()[0].is_dirty());
    }

    #[test]
    fn editing_without_selection_does_nothing() {
        let mut nb = Notebook::new(MemBackend::new(), limits());
        assert!(!nb.insert_codepoint('a' as u32));
        assert!(!nb.delete_last_character());
    }

    #[test]
    fn persist_writes_dirty_notes_only() {
        let mut nb = open(MemBackend::new().with_note("a", "old"));
        assert!(!nb.persist(0).unwrap());

        nb.insert_codepoint('!' as u32);
        assert!(nb.persist(0).unwrap());
        assert!(!nb.notes()[0].is_dirty());
        assert_eq!(nb.backend().text_of("a").as_deref(), Some("old!"));
        assert!(matches!(nb.persist(9), Err(VaultError::NoteNotFound(9))));
    }

    #[test]
    fn failed_persist_keeps_the_dirty_flag() {
        let mut nb = open(MemBackend::new().with_note("a", ""));
        nb.insert_codepoint('x' as u32);
        nb.backend().set_simulate_write_error(true);
        assert!(nb.persist(0).is_err());
        assert!(nb.notes()[0].is_dirty());

        nb.backend().set_simulate_write_error(false);
        assert!(nb.persist(0).unwrap());
    }

    #[test]
    fn persist_all_reports_saved_and_failed() {
        let mut nb = open(MemBackend::new().with_note("a", "").with_note("b", ""));
        nb.create();
        nb.mark_dirty(0);
        let report = nb.persist_all();
        assert!(report.is_ok());
        assert_eq!(report.saved, vec!["a", "Untitled 3"]);

        nb.mark_dirty(1);
        nb.backend().set_simulate_write_error(true);
        let report = nb.persist_all();
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "b");
    }

    #[test]
    fn rename_moves_the_file_on_persist() {
        let mut nb = open(MemBackend::new().with_note("Old", "body"));
        nb.rename(0, "New").unwrap();
        assert!(nb.notes()[0].is_dirty());
        assert!(nb.backend().contains("Old"));

        nb.persist(0).unwrap();
        assert!(!nb.backend().contains("Old"));
        assert_eq!(nb.backend().text_of("New").as_deref(), Some("body"));
        assert_eq!(nb.notes()[0].stored_as(), Some("New"));
    }

    #[test]
    fn rename_rejects_a_title_used_by_another_note() {
        let mut nb = open(MemBackend::new().with_note("a", "").with_note("b", ""));
        assert!(matches!(
            nb.rename(0, "b"),
            Err(VaultError::DuplicateTitle(_))
        ));
        assert!(nb.rename(0, "a").is_ok());
        assert!(!nb.notes()[0].is_dirty());
        assert!(matches!(nb.rename(7, "x"), Err(VaultError::NoteNotFound(7))));
    }

    #[test]
    fn delete_spares_a_file_now_owned_by_another_note() {
        let mut nb = open(MemBackend::new().with_note("A", "original"));
        nb.rename(0, "B").unwrap();
        let index = nb.create_titled("A").unwrap();
        type_text(&mut nb, "precious");
        assert!(nb.persist(index).unwrap());

        let removed = nb.delete(0).unwrap();
        assert_eq!(removed.title(), "B");
        assert!(nb.persist_all().is_ok());
        assert_eq!(nb.backend().text_of("A").as_deref(), Some("precious"));
    }

    #[test]
    fn case_only_rename_keeps_the_file_on_a_case_insensitive_vault() {
        let mut nb = open(MemBackend::new().case_insensitive().with_note("notes", "body"));
        nb.rename(0, "Notes").unwrap();
        assert!(nb.persist(0).unwrap());
        assert_eq!(nb.backend().list_titles().unwrap(), vec!["Notes"]);
        assert_eq!(nb.backend().text_of("Notes").as_deref(), Some("body"));
        assert!(!nb.notes()[0].is_dirty());
    }

    #[test]
    fn case_only_rename_removes_the_old_file_on_a_case_sensitive_vault() {
        let mut nb = open(MemBackend::new().with_note("notes", "body"));
        nb.rename(0, "Notes").unwrap();
        assert!(nb.persist(0).unwrap());
        assert_eq!(nb.backend().list_titles().unwrap(), vec!["Notes"]);
    }

    #[test]
    fn create_treats_unreadable_untitled_files_as_taken() {
        let mut nb = open(
            MemBackend::new()
                .with_note("a", "")
                .with_unreadable_note("Untitled 3"),
        );
        // the file keeps its old name until the next persist
        nb.rename(1, "Kept").unwrap();
        let index = nb.create().unwrap();
        assert_eq!(nb.notes()[index].title(), "Untitled 4");
    }

    #[test]
    fn scroll_stays_in_bounds() {
        let mut backend = MemBackend::new();
        for i in 0..10 {
            backend = backend.with_note(&format!("n{i}"), "");
        }
        let mut nb = open(backend);

        nb.scroll_by(-3, 4);
        assert_eq!(nb.scroll_offset(), 0);
        nb.scroll_by(3, 4);
        assert_eq!(nb.scroll_offset(), 3);
        nb.scroll_by(100, 4);
        assert_eq!(nb.scroll_offset(), 6);

        let window = nb.visible(4);
        assert_eq!(window.len(), 4);
        assert_eq!(window[0].title, "n6");

        nb.scroll_by(1, 20);
        assert_eq!(nb.scroll_offset(), 0);
    }

    #[test]
    fn deleting_shrinks_the_scroll_window() {
        let mut backend = MemBackend::new();
        for i in 0..3 {
            backend = backend.with_note(&format!("n{i}"), "");
        }
        let mut nb = open(backend);
        nb.scroll_by(2, 1);
        assert_eq!(nb.scroll_offset(), 2);
        nb.delete(2);
        assert_eq!(nb.scroll_offset(), 1);
    }

    #[test]
    fn search_matches_title_and_content_ignoring_case() {
        let mut nb = open(
            MemBackend::new()
                .with_note("Groceries", "milk, eggs")
                .with_note("Work", "Ship the MILK feature")
                .with_note("Ideas", "nothing here"),
        );
        assert_eq!(nb.matches(), vec![0, 1, 2]);

        assert!(nb.toggle_search());
        nb.set_search_query("milk");
        assert_eq!(nb.matches(), vec![0, 1]);
        nb.set_search_query("IDEA");
        assert_eq!(nb.matches(), vec![2]);

        assert!(!nb.toggle_search());
        assert_eq!(nb.search_query(), "");
    }

    #[test]
    fn summaries_carry_selection_and_stats() {
        let mut nb = open(MemBackend::new().with_note("a", "one two").with_note("b", ""));
        nb.select(1);
        let list = nb.list();
        assert!(!list[0].selected);
        assert!(list[1].selected);
        assert_eq!(list[0].stats.words, 2);
        assert!(list[0].modified_at.is_some());
    }
}
