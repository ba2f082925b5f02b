use clap::{Parser, Subcommand};

/// Command-line interface definition for guesswho
#[derive(Parser)]
#[command(
    name = "guesswho",
    version = env!("CARGO_PKG_VERSION"),
    about = "Build custom Guess Who boards from your own pictures and play them",
    long_about = None
)]
pub struct Cli {
    /// Override the board store path (useful for tests or a shared store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the board store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the boards saved in the store
    List,

    /// Show one saved board
    Show {
        /// Board id
        id: String,
    },

    /// Build a board from pictures and save and/or download it
    Create {
        #[arg(long, short, help = "Board title (default: \"Untitled board\")")]
        title: Option<String>,

        #[arg(
            long = "char",
            short = 'c',
            value_name = "IMAGE[=NAME]",
            help = "Picture file for the next slot, optionally followed by =NAME"
        )]
        chars: Vec<String>,

        #[arg(
            long = "crop",
            value_name = "SLOT:ZOOM,X,Y",
            help = "Framing for a slot (1-based): zoom 1-3, x and y 0-100"
        )]
        crops: Vec<String>,

        #[arg(long, help = "Shuffle the character order before saving")]
        randomize: bool,

        #[arg(long, help = "Save the board to the store (default when --download is absent)")]
        save: bool,

        #[arg(long, help = "Write the board as a JSON file")]
        download: bool,

        #[arg(long, value_name = "DIR", help = "Directory for --download (default: export_dir)")]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing JSON file")]
        force: bool,
    },

    /// Import a board JSON file into the store
    Import {
        #[arg(value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Replace a stored board with the same id")]
        force: bool,
    },

    /// Download a saved board as a JSON file
    Export {
        /// Board id
        id: String,

        #[arg(long, value_name = "DIR", help = "Target directory (default: export_dir)")]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Delete a saved board
    Del {
        /// Board id
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Play a board: flip cards until one is left
    Play {
        #[arg(long, short, value_name = "ID", conflicts_with_all = ["link", "example"])]
        board: Option<String>,

        #[arg(
            long,
            value_name = "URL",
            conflicts_with = "example",
            help = "Play link carrying a boardId query parameter"
        )]
        link: Option<String>,

        #[arg(long, help = "Play the bundled example board")]
        example: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print the audit log entries")]
        print: bool,
    },
}
