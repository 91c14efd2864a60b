use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for schedseed
/// CLI tool that fills a student-attendance SQLite database with fixtures
#[derive(Parser)]
#[command(
    name = "schedseed",
    version = env!("CARGO_PKG_VERSION"),
    about = "Seed a student-attendance SQLite database with synthetic schedule records",
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

    /// Inspect the configuration file
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

    /// Insert synthetic students to seed schedules for
    Students {
        #[arg(long, short, help = "Number of students to create (default from config)")]
        count: Option<usize>,
    },

    /// Generate and persist synthetic schedule records for every student
    Seed {
        /// RNG seed; identical seeds reproduce identical runs
        #[arg(long, help = "Seed for the random generator (random when omitted)")]
        seed: Option<u64>,

        /// Reference date (YYYY-MM-DD) anchoring the generation window.
        /// Defaults to the current month pinned to the configured year.
        #[arg(long, value_name = "DATE")]
        reference: Option<String>,

        #[arg(
            long = "per-student",
            value_name = "N",
            help = "Records per student (default from config, normally 36)"
        )]
        per_student: Option<usize>,
    },

    /// List seeded schedules
    List {
        #[arg(long, help = "Filter by student id")]
        student: Option<i64>,

        #[arg(long, value_name = "YYYY-MM", help = "Filter by calendar month")]
        month: Option<String>,

        #[arg(long = "summary", help = "Show per-student totals instead of rows")]
        summary: bool,
    },

    /// Delete seeded data
    Reset {
        #[arg(long = "students", help = "Also delete the students")]
        students: bool,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Export seeded schedules
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
