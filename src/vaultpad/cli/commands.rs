//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves configuration and opens the vault
//! - `handle_*()`: Per-command handlers that call the API and format output

use super::render::{print_messages, render_note_list, render_note_view};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;
use vaultpad::api::VaultApi;
use vaultpad::config::{CONFIG_FILENAME, VaultConfig};
use vaultpad::error::{Result, VaultError};
use vaultpad::layout::CellWidth;
use vaultpad::store::fs::FsBackend;

const FALLBACK_WIDTH: usize = 80;

struct AppContext {
    api: VaultApi<FsBackend>,
    config: VaultConfig,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let outcome = match cli.command {
        Some(Commands::New { title, text }) => {
            let title = if title.is_empty() {
                None
            } else {
                Some(title.join(" "))
            };
            handle_new(&mut ctx, title, text)
        }
        Some(Commands::List {
            offset,
            limit,
            json,
        }) => handle_list(&mut ctx, offset, limit, json),
        Some(Commands::Search { query }) => handle_search(&mut ctx, query.join(" ")),
        Some(Commands::View {
            index,
            width,
            lines,
        }) => handle_view(&mut ctx, index, width, lines),
        Some(Commands::Type { index, text }) => handle_type(&mut ctx, index, text.join(" ")),
        Some(Commands::Backspace { index, count }) => handle_backspace(&mut ctx, index, count),
        Some(Commands::Rename { index, title }) => handle_rename(&mut ctx, index, title.join(" ")),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Save { index }) => handle_save(&mut ctx, index),
        Some(Commands::Path { indexes }) => handle_paths(&mut ctx, indexes),
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&mut ctx, 0, None, false),
    };

    // Flush even when the command failed part-way.
    let shutdown = ctx.api.shutdown();
    if shutdown.has_errors() {
        print_messages(&shutdown.messages);
        outcome?;
        return Err(VaultError::Store("unsaved changes were lost".into()));
    }
    for message in &shutdown.messages {
        log::debug!("{}", message.content);
    }
    outcome
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Config files in priority order: working directory, then the user config dir.
fn config_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from(CONFIG_FILENAME)];
    if let Some(dirs) = ProjectDirs::from("com", "vaultpad", "vaultpad") {
        files.push(dirs.config_dir().join(CONFIG_FILENAME));
    }
    files
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = VaultConfig::load(&config_files())?;
    if let Some(vault) = &cli.vault {
        config.vault_dir = vault.clone();
    }
    log::debug!("using vault {}", config.vault_dir.display());

    let backend = FsBackend::new(config.vault_dir.clone()).with_file_ext(&config.file_ext());
    let api = VaultApi::open(backend, config.limits())?;

    Ok(AppContext {
        api,
        config,
        use_color: std::io::stdout().is_terminal(),
    })
}

fn terminal_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(FALLBACK_WIDTH)
}

fn handle_new(ctx: &mut AppContext, title: Option<String>, text: Option<String>) -> Result<()> {
    let result = ctx.api.create_note(title.as_deref(), text.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    offset: usize,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let result = ctx.api.list_notes(offset, limit)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_notes)?);
        return Ok(());
    }
    print!(
        "{}",
        render_note_list(&result.listed_notes, terminal_width(), ctx.use_color)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: String) -> Result<()> {
    let result = ctx.api.search_notes(&query)?;
    print!(
        "{}",
        render_note_list(&result.listed_notes, terminal_width(), ctx.use_color)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(
    ctx: &mut AppContext,
    index: usize,
    width: Option<usize>,
    lines: Option<usize>,
) -> Result<()> {
    let width = width
        .or(ctx.config.wrap_width)
        .unwrap_or_else(terminal_width)
        .max(1);
    let result = ctx.api.view_note(index, width as f32, CellWidth, lines)?;
    if let Some(view) = &result.view {
        print!("{}", render_note_view(view, ctx.use_color));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_type(ctx: &mut AppContext, index: usize, text: String) -> Result<()> {
    let result = ctx.api.type_text(index, &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backspace(ctx: &mut AppContext, index: usize, count: usize) -> Result<()> {
    let result = ctx.api.backspace(index, count)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, index: usize, title: String) -> Result<()> {
    let result = ctx.api.rename_note(index, &title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<usize>) -> Result<()> {
    let result = ctx.api.delete_notes(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &mut AppContext, index: Option<usize>) -> Result<()> {
    let result = ctx.api.save(index)?;
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(VaultError::Store("some notes could not be saved".into()));
    }
    Ok(())
}

fn handle_paths(ctx: &mut AppContext, indexes: Vec<usize>) -> Result<()> {
    let result = ctx.api.note_paths(&indexes)?;
    for path in &result.note_paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    Ok(())
}
