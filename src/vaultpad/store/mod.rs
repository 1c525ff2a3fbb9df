//! # Storage Layer
//!
//! The notebook never touches the filesystem directly. All persistence goes
//! through the [`VaultBackend`] trait, which keeps the note store testable and
//! leaves room for other backends.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: production storage, one file per note in the vault dir
//! - [`memory::MemBackend`]: in-memory storage for tests, with write-failure
//!   simulation
//!
//! ## Storage Format
//!
//! ```text
//! vault/
//! ├── Welcome.md        # raw note text, no header or metadata
//! ├── Groceries.md
//! └── Untitled 2.md
//! ```
//!
//! A note's identity is its file name: the title is the file stem. Files whose
//! name starts with `.` (including in-flight temporary files) are ignored.

use crate::error::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Raw note I/O, addressed by title.
pub trait VaultBackend {
    /// Create the vault if it does not exist yet.
    fn ensure_vault(&self) -> Result<()>;

    /// Titles of all notes in the vault, in load order.
    fn list_titles(&self) -> Result<Vec<String>>;

    /// Raw bytes of a note. `Ok(None)` when the file does not exist.
    fn read_note(&self, title: &str) -> Result<Option<Vec<u8>>>;

    /// Whether a file for this title exists.
    fn note_exists(&self, title: &str) -> Result<bool>;

    /// Write a note's content verbatim, replacing any existing file.
    fn write_note(&self, title: &str, content: &str) -> Result<()>;

    /// Remove a note's file. A missing file is not an error.
    fn delete_note(&self, title: &str) -> Result<()>;

    /// Where the note with this title lives (or would live).
    fn note_path(&self, title: &str) -> PathBuf;

    /// Last modification time, `None` if the note was never written.
    fn modified_at(&self, title: &str) -> Result<Option<DateTime<Utc>>>;
}
