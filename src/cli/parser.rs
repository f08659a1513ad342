use crate::models::filter::FilterMode;
use clap::{Parser, Subcommand};

/// Command-line interface definition for habitrack
/// CLI application to track habits and one-off events with SQLite
#[derive(Parser)]
#[command(
    name = "habitrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracking CLI: schedule trackers, mark completions, follow streaks",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a new tracker (habit or one-off event)
    Add {
        /// Display name of the tracker
        name: String,

        /// Emoji glyph shown next to the name
        #[arg(long = "emoji", default_value = "⭐")]
        emoji: String,

        /// Palette index (1-18) or hex color like '#33CF69'
        #[arg(long = "color", default_value = "1")]
        color: String,

        /// Weekdays the habit recurs on, e.g. 'mon,wed,fri'
        #[arg(long = "days", conflicts_with = "event")]
        days: Option<String>,

        /// Create a one-off event instead of a habit (scheduled every day)
        #[arg(long = "event")]
        event: bool,

        /// Category title (created on first use; default from config)
        #[arg(long = "category")]
        category: Option<String>,
    },

    /// Edit a tracker (full replace of its fields)
    Edit {
        /// Tracker id
        id: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "emoji")]
        emoji: Option<String>,

        /// Palette index (1-18) or hex color
        #[arg(long = "color")]
        color: Option<String>,

        /// New weekday schedule, e.g. 'mon,thu'
        #[arg(long = "days")]
        days: Option<String>,

        /// Move to this category title
        #[arg(long = "category")]
        category: Option<String>,
    },

    /// Delete a tracker and all its completions
    Del {
        /// Tracker id
        id: String,
    },

    /// Pin a tracker to the top of the list
    Pin {
        /// Tracker id
        id: String,
    },

    /// Unpin a tracker, restoring its previous category
    Unpin {
        /// Tracker id
        id: String,
    },

    /// Mark a tracker completed (or undo it) for a day
    Check {
        /// Tracker id
        id: String,

        /// Day to mark (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Remove the completion instead of adding it
        #[arg(long = "undo")]
        undo: bool,
    },

    /// List trackers visible for a date, sectioned by category
    List {
        /// Query date (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Filter mode
        #[arg(long = "filter", value_enum, default_value = "all")]
        filter: FilterMode,

        /// Case-insensitive substring match on tracker names
        #[arg(long = "search")]
        search: Option<String>,
    },

    /// Manage categories
    Category {
        #[arg(long = "add", value_name = "TITLE", help = "Create a new category")]
        add: Option<String>,

        #[arg(long = "rename", value_name = "ID", help = "Rename the category with this id")]
        rename: Option<String>,

        #[arg(long = "title", value_name = "TITLE", requires = "rename", help = "New title (with --rename)")]
        title: Option<String>,

        #[arg(long = "del", value_name = "ID", help = "Delete a category and its trackers")]
        del: Option<String>,

        #[arg(long = "list", help = "List categories in creation order")]
        list: bool,
    },

    /// Show streak and completion statistics
    Stats {
        /// Day used for the average completion rate (default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Emit statistics as JSON
        #[arg(long = "json")]
        json: bool,
    },
}
