//! `staffroll config` subcommands

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::Config;
use crate::output::{self, OutputFormat};
use crate::ConfigCommands;

pub fn handle(
    command: ConfigCommands,
    config: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ConfigCommands::Show => match format {
            OutputFormat::Json => output::print_json(config),
            OutputFormat::Yaml => output::print_yaml(config),
            OutputFormat::Table => {
                print!("{}", toml::to_string_pretty(config)?);
                Ok(())
            }
        },
        ConfigCommands::Init { force } => init(path, force),
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        output::print_warning(&format!("{} already exists", path.display()));
        bail!("refusing to overwrite without --force");
    }

    Config::default().save_to(path)?;
    output::print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
