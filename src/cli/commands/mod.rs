pub mod analyze;
pub mod config;
pub mod export;
pub mod guards;
pub mod init;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::input::InputSource;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::guard::Roster;

/// Read the log selected by the command line (or the config) and reconstruct it.
pub(crate) fn load_roster(cli: &Cli, cfg: &Config) -> AppResult<Roster> {
    let source = InputSource::resolve(cli.command.input(), cfg.default_input.as_deref());
    let lines = source.read_lines()?;
    Core::build_roster(lines)
}

pub(crate) fn use_color(cli: &Cli, cfg: &Config) -> bool {
    cfg.color && !cli.no_color
}
