use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "therapy-catalog")]
#[command(version, about = "Curate the therapy module catalog")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Act with this session role instead of the configured one
    #[arg(long, global = true)]
    pub role: Option<String>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new catalog project in the current directory
    Init,

    /// List catalog entries
    List {
        /// Only entries whose title, description, category or tags contain this text
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Status filter (all, active, inactive)
        #[arg(long, default_value = "all")]
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search with a query string ("status:active tag:sleep breathing")
    Search {
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single entry
    Get {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new entry
    Add(AddArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Switch an entry between active and inactive
    Toggle {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show catalog counters
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available icons, colors, categories and tags
    Options,
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Entry title
    pub title: String,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Tags (can be specified multiple times)
    #[arg(long = "tag", short = 't')]
    pub tags: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Entry ID
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Add the tag if missing, remove it if present (can be specified multiple times)
    #[arg(long = "toggle-tag", short = 't')]
    pub toggle_tags: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Entry fields shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Short description shown on the card
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Icon name (BookOpen, Brain, Heart, ...)
    #[arg(long)]
    pub icon: Option<String>,

    /// Gradient class or label ("Blue to Cyan")
    #[arg(long)]
    pub color: Option<String>,

    /// Session length, free text ("15-20 min")
    #[arg(long)]
    pub duration: Option<String>,

    /// Beginner, Intermediate or Advanced
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Number of sessions
    #[arg(long, allow_negative_numbers = true)]
    pub sessions: Option<i64>,

    /// Category ("Cognitive Therapy", "Mindfulness", ...)
    #[arg(long)]
    pub category: Option<String>,

    /// active or inactive
    #[arg(long)]
    pub status: Option<String>,

    /// Page route; derived from the title when empty
    #[arg(long)]
    pub route: Option<String>,

    /// Module id; derived from the title when empty
    #[arg(long)]
    pub module_id: Option<String>,
}
