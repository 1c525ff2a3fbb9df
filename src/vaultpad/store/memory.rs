use super::VaultBackend;
use crate::error::{Result, VaultError};
use chrono::{DateTime, Utc};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

#[derive(Clone)]
struct Entry {
    title: String,
    bytes: Vec<u8>,
    mtime: DateTime<Utc>,
}

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the notebook is single-threaded.
/// Notes are listed in the order they were first written. Titles match exactly
/// unless [`MemBackend::case_insensitive`] is set, which mimics the default
/// macOS filesystem: one entry per title ignoring case, renamed on write.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<Vec<Entry>>,
    unreadable: RefCell<Vec<String>>,
    vault_created: Cell<bool>,
    simulate_write_error: Cell<bool>,
    case_insensitive: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Seed a note as if it already existed on disk.
    pub fn with_note(self, title: &str, content: &str) -> Self {
        self.put(title, content.as_bytes().to_vec());
        self
    }

    /// Seed raw bytes, e.g. invalid UTF-8.
    pub fn with_raw_note(self, title: &str, bytes: &[u8]) -> Self {
        self.put(title, bytes.to_vec());
        self
    }

    /// Seed a note whose reads fail, like a file without read permission.
    pub fn with_unreadable_note(self, title: &str) -> Self {
        self.put(title, Vec::new());
        self.unreadable.borrow_mut().push(title.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn vault_created(&self) -> bool {
        self.vault_created.get()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.entries.borrow().iter().any(|e| self.same(&e.title, title))
    }

    /// Stored text of a note, lossily decoded.
    pub fn text_of(&self, title: &str) -> Option<String> {
        self.entries
            .borrow()
            .iter()
            .find(|e| self.same(&e.title, title))
            .map(|e| String::from_utf8_lossy(&e.bytes).into_owned())
    }

    fn same(&self, a: &str, b: &str) -> bool {
        if self.case_insensitive {
            a.to_lowercase() == b.to_lowercase()
        } else {
            a == b
        }
    }

    fn check_readable(&self, title: &str) -> Result<()> {
        if self.unreadable.borrow().iter().any(|t| self.same(t, title)) {
            return Err(VaultError::Store(format!("permission denied: {title}")));
        }
        Ok(())
    }

    fn put(&self, title: &str, bytes: Vec<u8>) {
        let mut entries = self.entries.borrow_mut();
        let mtime = Utc::now();
        match entries.iter_mut().find(|e| self.same(&e.title, title)) {
            Some(entry) => {
                entry.title = title.to_string();
                entry.bytes = bytes;
                entry.mtime = mtime;
            }
            None => entries.push(Entry {
                title: title.to_string(),
                bytes,
                mtime,
            }),
        }
    }
}

impl VaultBackend for MemBackend {
    fn ensure_vault(&self) -> Result<()> {
        self.vault_created.set(true);
        Ok(())
    }

    fn list_titles(&self) -> Result<Vec<String>> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .map(|e| e.title.clone())
            .collect())
    }

    fn read_note(&self, title: &str) -> Result<Option<Vec<u8>>> {
        self.check_readable(title)?;
        Ok(self
            .entries
            .borrow()
            .iter()
            .find(|e| self.same(&e.title, title))
            .map(|e| e.bytes.clone()))
    }

    fn note_exists(&self, title: &str) -> Result<bool> {
        self.check_readable(title)?;
        Ok(self.contains(title))
    }

    fn write_note(&self, title: &str, content: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(VaultError::Store("Simulated write error".to_string()));
        }
        self.put(title, content.as_bytes().to_vec());
        Ok(())
    }

    fn delete_note(&self, title: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .retain(|e| !self.same(&e.title, title));
        Ok(())
    }

    fn note_path(&self, title: &str) -> PathBuf {
        PathBuf::from("/mem/vault").join(format!("{title}.md"))
    }

    fn modified_at(&self, title: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self
            .entries
            .borrow()
            .iter()
            .find(|e| self.same(&e.title, title))
            .map(|e| e.mtime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_overwrites_in_place() {
        let backend = MemBackend::new().with_note("b", "1").with_note("a", "2");
        backend.write_note("b", "3").unwrap();
        assert_eq!(backend.list_titles().unwrap(), vec!["b", "a"]);
        assert_eq!(backend.text_of("b").as_deref(), Some("3"));
    }

    #[test]
    fn simulated_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(backend.write_note("x", "y").is_err());
        assert!(!backend.contains("x"));
    }

    #[test]
    fn case_insensitive_entries_share_one_file() {
        let backend = MemBackend::new().case_insensitive().with_note("notes", "x");
        backend.write_note("Notes", "y").unwrap();
        assert_eq!(backend.list_titles().unwrap(), vec!["Notes"]);
        assert_eq!(backend.text_of("notes").as_deref(), Some("y"));
        assert!(backend.note_exists("NOTES").unwrap());
    }

    #[test]
    fn unreadable_note_fails_reads() {
        let backend = MemBackend::new().with_unreadable_note("locked");
        assert!(backend.read_note("locked").is_err());
        assert!(backend.note_exists("locked").is_err());
        assert!(!backend.note_exists("other").unwrap());
    }
}
