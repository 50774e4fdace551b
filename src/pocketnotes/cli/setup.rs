use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pn", bin_name = "pn", version)]
#[command(
    about = "Capture thoughts fast. Organize with tags and find anything instantly.",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// The search box and tag filter buttons, as flags.
///
/// Indexes given to `edit` and `delete` refer to the view these select.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Only show notes whose title or content contains TERM
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Only show notes carrying TAG (repeatable; all must match)
    #[arg(short = 'f', long = "filter", value_name = "TAG")]
    pub filter: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show notes, tag filters and search results
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Create a new note
    #[command(alias = "n")]
    Add {
        /// Title of the note (words are joined with spaces)
        title: Vec<String>,

        /// Note details
        #[arg(short, long)]
        content: Option<String>,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Edit a note
    #[command(alias = "e")]
    Edit {
        /// Index or title of the note
        note: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New details
        #[arg(short, long)]
        content: Option<String>,

        /// Tag to add (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Tag to remove (repeatable)
        #[arg(short, long = "untag", value_name = "TAG")]
        untag: Vec<String>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Indexes or titles of the notes
        #[arg(required = true, num_args = 1..)]
        notes: Vec<String>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// List every tag in use
    Tags,

    /// Interactive session keeping the draft and filters between lines
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
