use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for sleepwatch
/// CLI application to analyze guard duty logs
#[derive(Parser)]
#[command(
    name = "sleepwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconstruct an unordered guard duty log and find the sleepiest guard and minute",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Disable ANSI colors in output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GuardSort {
    Id,
    Total,
    Frequency,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Answer both questions: sleepiest guard and most frequent minute
    Analyze {
        /// Log file to read ("-" for stdin). Defaults to `default_input`, then stdin
        input: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every guard with its sleep totals
    Guards {
        /// Log file to read ("-" for stdin)
        input: Option<String>,

        /// Sort order of the table
        #[arg(long, value_enum, default_value = "id")]
        sort: GuardSort,

        /// Show a per-minute strip for each guard
        #[arg(long)]
        chart: bool,
    },

    /// Export per-guard occupancy
    Export {
        /// Log file to read ("-" for stdin)
        input: Option<String>,

        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },
}

impl Commands {
    /// INPUT argument of the data commands.
    pub fn input(&self) -> Option<&str> {
        match self {
            Commands::Analyze { input, .. }
            | Commands::Guards { input, .. }
            | Commands::Export { input, .. } => input.as_deref(),
            Commands::Init | Commands::Config { .. } => None,
        }
    }
}
