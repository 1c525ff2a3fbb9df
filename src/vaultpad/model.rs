use crate::buffer::TextBuffer;
use crate::error::{Result, VaultError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Characters that would turn a title into a path instead of a file name.
const FORBIDDEN_TITLE_CHARS: &[char] = &['/', '\\', '\0'];

#[derive(Debug, Clone)]
pub struct Note {
    pub(crate) title: String,
    pub(crate) content: TextBuffer,
    pub(crate) path: PathBuf,
    pub(crate) dirty: bool,
    // Title of the file currently on disk for this note, if any
    pub(crate) stored_as: Option<String>,
}

impl Note {
    /// A note that only exists in memory.
    pub fn new(title: String, path: PathBuf, capacity: usize) -> Self {
        Self {
            title,
            content: TextBuffer::new(capacity),
            path,
            dirty: true,
            stored_as: None,
        }
    }

    /// A note read back from the vault.
    pub fn loaded(title: String, path: PathBuf, text: &str, capacity: usize) -> Self {
        Self {
            stored_as: Some(title.clone()),
            title,
            content: TextBuffer::with_text(text, capacity),
            path,
            dirty: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &TextBuffer {
        &self.content
    }

    pub fn text(&self) -> &str {
        self.content.as_str()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn stored_as(&self) -> Option<&str> {
        self.stored_as.as_deref()
    }

    pub fn stats(&self) -> NoteStats {
        NoteStats::of(self.content.as_str())
    }
}

/// Counts shown next to a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoteStats {
    /// Runs of characters separated by spaces or line-feeds.
    pub words: usize,
    pub chars: usize,
    pub bytes: usize,
}

impl NoteStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split([' ', '\n']).filter(|w| !w.is_empty()).count(),
            chars: text.chars().count(),
            bytes: text.len(),
        }
    }
}

/// A note as presented in a listing. `index` is the position in the notebook.
#[derive(Debug, Clone, Serialize)]
pub struct NoteSummary {
    pub index: usize,
    pub title: String,
    pub dirty: bool,
    pub selected: bool,
    pub stats: NoteStats,
    pub modified_at: Option<DateTime<Utc>>,
}

/// Check that `title` can double as a file name in the vault.
pub fn validate_title(title: &str, max_len: usize) -> Result<()> {
    if title.trim().is_empty() {
        return Err(VaultError::InvalidTitle("title cannot be empty".into()));
    }
    if title.starts_with('.') {
        return Err(VaultError::InvalidTitle(format!(
            "\"{title}\" would be a hidden file"
        )));
    }
    if let Some(c) = title.chars().find(|c| FORBIDDEN_TITLE_CHARS.contains(c)) {
        return Err(VaultError::InvalidTitle(format!(
            "\"{title}\" contains {c:?}"
        )));
    }
    if title.contains('\n') || title.contains('\r') {
        return Err(VaultError::InvalidTitle("title must be a single line".into()));
    }
    if title.len() >= max_len {
        return Err(VaultError::InvalidTitle(format!(
            "title is longer than {} bytes",
            max_len.saturating_sub(1)
        )));
    }
    Ok(())
}
