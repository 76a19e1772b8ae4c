//! sleepwatch library root.
//! Exposes CLI parser, high-level run() function, and the analysis pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

pub use crate::core::logic::{Core, Report};

/// Env var that overrides the configured log level (e.g. `SLEEPWATCH_LOG=debug`).
pub const LOG_ENV: &str = "SLEEPWATCH_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Analyze { .. } => cli::commands::analyze::handle(cli, cfg),
        Commands::Guards { .. } => cli::commands::guards::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Diagnostics go to stderr, filtered by `SLEEPWATCH_LOG` or the config.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg_path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&cfg_path)?;

    init_tracing(&cfg.log_level);
    tracing::debug!(config = %cfg_path.display(), "configuration loaded");

    dispatch(&cli, &cfg)
}
