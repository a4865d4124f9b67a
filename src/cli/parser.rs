use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHabitLogger
/// CLI application to track daily habits with SQLite
#[derive(Parser)]
#[command(
    name = "rhabitlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple habit tracking CLI: one log per local calendar day, timezone-aware",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override "now" (RFC 3339 or epoch millis); used by tests
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Authenticated subject; defaults to the configured profile
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, configuration, and user profile
    Init,

    /// Manage the configuration file
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

        #[arg(
            long = "check",
            help = "Check database integrity and per-tracker day contiguity"
        )]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a tracker and generate its daily logs up to today
    Add {
        /// Tracker name
        name: String,

        /// Start instant (RFC 3339, epoch millis, or YYYY-MM-DD local date);
        /// defaults to now
        #[arg(long = "start")]
        start: Option<String>,

        /// IANA timezone for day boundaries (defaults to config)
        #[arg(long = "tz")]
        tz: Option<String>,
    },

    /// List your trackers
    List,

    /// Show a tracker's completion dashboard grouped by month and year
    Logs {
        /// Tracker name
        tracker: String,

        #[arg(long, short, help = "Filter by year (YYYY) or month (YYYY-MM)")]
        period: Option<String>,
    },

    /// Mark a day as accomplished (or missed)
    Mark {
        /// Tracker name
        tracker: String,

        /// Day to mark (YYYY-MM-DD); defaults to today in the zone
        #[arg(long = "date")]
        date: Option<String>,

        /// Mark the day as missed instead of accomplished
        #[arg(long = "missed")]
        missed: bool,

        /// IANA timezone used to resolve "today" (defaults to config)
        #[arg(long = "tz")]
        tz: Option<String>,
    },

    /// Create the missing daily logs since the last recorded day
    Backfill {
        /// Tracker name
        tracker: String,

        /// IANA timezone for the new days (defaults to config)
        #[arg(long = "tz")]
        tz: Option<String>,
    },

    /// Delete a tracker and all of its logs
    Del {
        /// Tracker name
        tracker: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export tracker logs
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Restrict the export to one tracker")]
        tracker: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
