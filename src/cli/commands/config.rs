use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = &cli.command {
        if *path {
            println!("{}", Config::resolve_path(cli.config.as_deref()).display());
        }

        if *print_config {
            print!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
