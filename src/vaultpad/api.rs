//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for vaultpad operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`Notebook`] for the lifetime of a session
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: display indexes (1-based, as printed by `list`)
//!   become notebook positions
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Sessions
//!
//! A session starts with [`VaultApi::open`] and ends with
//! [`VaultApi::shutdown`], which flushes every dirty note. Edits made in
//! between stay in memory until a `save` or the shutdown flush.
//!
//! ## Generic Over VaultBackend
//!
//! `VaultApi<B: VaultBackend>` is generic over the storage backend:
//! - Production: `VaultApi<FsBackend>`
//! - Testing: `VaultApi<MemBackend>`

use crate::commands;
use crate::error::{Result, VaultError};
use crate::layout::MeasureText;
use crate::notebook::{Notebook, NotebookLimits};
use crate::store::VaultBackend;

pub struct VaultApi<B: VaultBackend> {
    notebook: Notebook<B>,
}

impl<B: VaultBackend> VaultApi<B> {
    /// Open the vault behind `backend`, creating it when missing.
    pub fn open(backend: B, limits: NotebookLimits) -> Result<Self> {
        Ok(Self {
            notebook: Notebook::open(backend, limits)?,
        })
    }

    pub fn create_note(
        &mut self,
        title: Option<&str>,
        text: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.notebook, title, text)
    }

    pub fn list_notes(
        &mut self,
        offset: usize,
        limit: Option<usize>,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.notebook, offset, limit)
    }

    pub fn search_notes(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::list::search(&mut self.notebook, query)
    }

    pub fn view_note<M: MeasureText>(
        &mut self,
        index: usize,
        max_width: f32,
        measure: M,
        max_lines: Option<usize>,
    ) -> Result<commands::CmdResult> {
        let index = self.resolve(index)?;
        commands::view::run(&mut self.notebook, index, max_width, measure, max_lines)
    }

    pub fn type_text(&mut self, index: usize, text: &str) -> Result<commands::CmdResult> {
        let index = self.resolve(index)?;
        commands::edit::type_text(&mut self.notebook, index, text)
    }

    pub fn backspace(&mut self, index: usize, count: usize) -> Result<commands::CmdResult> {
        let index = self.resolve(index)?;
        commands::edit::backspace(&mut self.notebook, index, count)
    }

    pub fn rename_note(&mut self, index: usize, title: &str) -> Result<commands::CmdResult> {
        let index = self.resolve(index)?;
        commands::rename::run(&mut self.notebook, index, title)
    }

    pub fn delete_notes(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        let positions = self.resolve_all(indexes)?;
        commands::delete::run(&mut self.notebook, &positions)
    }

    /// Persist one note, or every dirty note when `index` is `None`.
    pub fn save(&mut self, index: Option<usize>) -> Result<commands::CmdResult> {
        match index {
            Some(index) => {
                let index = self.resolve(index)?;
                commands::save::run(&mut self.notebook, index)
            }
            None => Ok(commands::save::all(&mut self.notebook)),
        }
    }

    pub fn note_paths(&self, indexes: &[usize]) -> Result<commands::CmdResult> {
        let positions = self.resolve_all(indexes)?;
        commands::paths::run(&self.notebook, &positions)
    }

    /// End the session: flush every dirty note. Failures come back as error
    /// messages and the notes stay dirty.
    pub fn shutdown(&mut self) -> commands::CmdResult {
        commands::save::all(&mut self.notebook)
    }

    pub fn notebook(&self) -> &Notebook<B> {
        &self.notebook
    }

    fn resolve(&self, display_index: usize) -> Result<usize> {
        match display_index {
            0 => Err(VaultError::NoteNotFound(0)),
            n if n > self.notebook.len() => Err(VaultError::NoteNotFound(n)),
            n => Ok(n - 1),
        }
    }

    fn resolve_all(&self, display_indexes: &[usize]) -> Result<Vec<usize>> {
        display_indexes.iter().map(|&i| self.resolve(i)).collect()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, NoteView, RenderedLine};
