use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vaultpad", bin_name = "vaultpad", version)]
#[command(about = "Plain-text notes in a folder, from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Vault directory (overrides configuration)
    #[arg(long, global = true, value_name = "DIR")]
    pub vault: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n", display_order = 1)]
    New {
        /// Initial text of the note
        #[arg(long)]
        text: Option<String>,

        /// Title words (joined with spaces; "Untitled N" when omitted)
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// List notes
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Rows to scroll past
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Rows to show
        #[arg(long)]
        limit: Option<usize>,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search notes by title and content
    #[command(display_order = 3)]
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Render a note, wrapped to the terminal
    #[command(alias = "v", display_order = 10)]
    View {
        /// Index of the note
        index: usize,

        /// Wrap width in columns
        #[arg(long)]
        width: Option<usize>,

        /// Show at most this many lines
        #[arg(long)]
        lines: Option<usize>,
    },

    /// Append text to a note
    #[command(alias = "t", display_order = 11)]
    Type {
        /// Index of the note
        index: usize,

        /// Text to type (words joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete characters from the end of a note
    #[command(display_order = 12)]
    Backspace {
        /// Index of the note
        index: usize,

        /// Characters to delete
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Give a note a new title
    #[command(alias = "mv", display_order = 13)]
    Rename {
        /// Index of the note
        index: usize,

        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm", display_order = 14)]
    Delete {
        /// Indexes of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Save one note, or all unsaved notes
    #[command(display_order = 15)]
    Save {
        /// Index of the note
        index: Option<usize>,
    },

    /// Print the file path of one or more notes
    #[command(display_order = 16)]
    Path {
        /// Indexes of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<usize>,
    },

    /// Print the resolved configuration
    #[command(display_order = 30)]
    Config,
}
