use crate::cli::commands::load_roster;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        ..
    } = &cli.command
    {
        let roster = load_roster(cli, cfg)?;
        ExportLogic::export(&roster, *format, file, *force)?;
    }
    Ok(())
}
