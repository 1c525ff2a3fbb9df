//! # CLI Behavior
//!
//! This is **one possible UI client** for vaultpad, not the application
//! itself. The CLI is the only place that knows about terminal I/O, exit codes
//! and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the
//! `vaultpad` library.
//!
//! ## Sessions
//!
//! Every invocation is one editing session: open the vault, run one command,
//! then flush every dirty note. `vaultpad type 1 "more"` therefore persists
//! without a separate `save`; `save` exists to flush early and to report
//! per-note failures.
//!
//! Running `vaultpad` with no command lists the notes.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (note list, note view, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling palette

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
