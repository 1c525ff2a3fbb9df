//! # vaultpad Architecture
//!
//! vaultpad is a **UI-agnostic note-taking library**: notes live as plain text
//! files in a directory (the vault), and the library provides the editing,
//! layout and storage machinery around them. The bundled terminal client is one
//! consumer of it; a windowed front-end would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the notebook for one session                        │
//! │  - Maps display indexes (1-based) onto notebook positions   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - User-level operations returning `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Note Store (notebook.rs)                                   │
//! │  - Ordered notes, selection, scroll offset, search state    │
//! │  - Editing (buffer.rs) and layout (layout.rs) engines       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - VaultBackend trait                                       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types and never writes to stdout/stderr or exits the process. Text
//! measurement is a trait ([`layout::MeasureText`]) so the layout engine works
//! with terminal cells as well as font metrics.
//!
//! ## Testing Strategy
//!
//! 1. **Engines** (`utf8`, `buffer`, `layout`): unit tests of the invariants.
//! 2. **Notebook and commands**: unit tests against
//!    [`store::memory::MemBackend`]. This is where most tests live.
//! 3. **Storage and CLI**: integration tests under `tests/` using temporary
//!    directories.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: User-level operations
//! - [`notebook`]: The note store
//! - [`buffer`]: Bounded text buffer and its edits
//! - [`layout`]: Word-wrapping line layout and markdown line kinds
//! - [`utf8`]: Codepoint encoding helpers
//! - [`model`]: Note types and title validation
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod buffer;
pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod notebook;
pub mod store;
pub mod utf8;
