//! # Configuration
//!
//! vaultpad configuration is loaded with [`confique`], layering TOML files,
//! environment variables and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `VAULTPAD_DIR`, `VAULTPAD_FILE_EXT`, `VAULTPAD_WRAP_WIDTH`.
//! 2. **Local Config**: `./vaultpad.toml` in the working directory.
//! 3. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `vault_dir` | `vault` | Directory holding the note files |
//! | `file_ext` | `.md` | Extension of note files |
//! | `max_notes` | `100` | Notes loaded and created at most |
//! | `max_title_len` | `128` | Title limit in bytes (exclusive) |
//! | `max_content_bytes` | `32768` | Content capacity per note (exclusive) |
//! | `wrap_width` | terminal width | Column count `view` wraps at |

use crate::error::Result;
use crate::notebook::NotebookLimits;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "vaultpad.toml";

/// Configuration for vaultpad, stored in `vaultpad.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    /// Directory holding the note files.
    #[config(default = "vault", env = "VAULTPAD_DIR")]
    pub vault_dir: PathBuf,

    /// Extension of note files (e.g. ".md", ".txt").
    #[config(default = ".md", env = "VAULTPAD_FILE_EXT")]
    pub file_ext: String,

    #[config(default = 100)]
    pub max_notes: usize,

    #[config(default = 128)]
    pub max_title_len: usize,

    #[config(default = 32768)]
    pub max_content_bytes: usize,

    /// Column count used when rendering notes. When absent, the terminal
    /// width is used.
    #[config(env = "VAULTPAD_WRAP_WIDTH")]
    pub wrap_width: Option<usize>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            vault_dir: PathBuf::from("vault"),
            file_ext: ".md".to_string(),
            max_notes: 100,
            max_title_len: 128,
            max_content_bytes: 32768,
            wrap_width: None,
        }
    }
}

impl VaultConfig {
    /// Load from the environment, then each file in `files` (earlier files win),
    /// then defaults. Missing files are skipped.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        Ok(builder.load()?)
    }

    /// Get the file extension, normalized to start with a dot.
    pub fn file_ext(&self) -> String {
        if self.file_ext.starts_with('.') {
            self.file_ext.clone()
        } else {
            format!(".{}", self.file_ext)
        }
    }

    pub fn limits(&self) -> NotebookLimits {
        NotebookLimits {
            max_notes: self.max_notes,
            max_title_len: self.max_title_len,
            content_capacity: self.max_content_bytes,
        }
    }
}
