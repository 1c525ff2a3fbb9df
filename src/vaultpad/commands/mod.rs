//! # Command Layer
//!
//! User-level operations built on the [`Notebook`](crate::notebook::Notebook).
//! Each command lives in its own submodule and returns a structured
//! [`CmdResult`] instead of printing anything.
//!
//! ## Role and Responsibilities
//!
//! The notebook keeps the quiet contract of an editor surface: a refused edit
//! or a create at capacity is simply a `false`/`None`. Commands are where those
//! outcomes become messages the user can see:
//! - a note at capacity drops typed characters, and the command says how many
//! - a full vault turns `create` into a warning
//! - save failures at shutdown are reported as errors
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, colors or exit codes
//! - **Argument parsing**: that's the CLI layer's job
//! - **Index translation**: commands take notebook positions (0-based); the API
//!   maps display indexes onto them
//!
//! ## Testing Strategy
//!
//! Command tests run against [`MemBackend`](crate::store::memory::MemBackend)
//! and check the `CmdResult` contents, never the filesystem.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note, optionally with a title and initial text
//! - [`edit`]: Type text into a note, delete characters from its end
//! - [`delete`]: Remove notes and their files
//! - [`rename`]: Change a note's title (and file name)
//! - [`list`]: List and search notes
//! - [`view`]: Lay a note out into styled display lines
//! - [`save`]: Persist one note or all of them
//! - [`paths`]: Get filesystem paths of notes
//! - [`helpers`]: Shared utilities

use crate::layout::LineKind;
use crate::model::{NoteStats, NoteSummary};
use serde::Serialize;
use std::path::PathBuf;

pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod paths;
pub mod rename;
pub mod save;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One display line of a rendered note, marker stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    pub kind: LineKind,
    pub text: String,
}

/// A note laid out for display.
#[derive(Debug, Clone, Serialize)]
pub struct NoteView {
    pub title: String,
    pub dirty: bool,
    pub stats: NoteStats,
    pub lines: Vec<RenderedLine>,
    /// True when the line budget cut the note short.
    pub truncated: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_notes: Vec<NoteSummary>,
    pub listed_notes: Vec<NoteSummary>,
    pub view: Option<NoteView>,
    pub note_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<NoteSummary>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<NoteSummary>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_note_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.note_paths = paths;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
