//! Staffroll CLI
//!
//! Drives the employee list editor headlessly: replays recorded UI event
//! scripts and exposes the salary formatting rules for quick checks.

mod commands;
mod config;
mod logging;
mod output;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: String,

    /// Swipe preset (simple, proportional); overrides the config file
    #[arg(short, long)]
    preset: Option<String>,

    /// Config file (defaults to ~/.config/staffroll/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set (overrides the config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON or YAML event script and print the resulting list
    Replay {
        /// Script file (.json, .yaml or .yml)
        script: PathBuf,
        /// Card width in pixels for touch events that don't specify one
        #[arg(short = 'w', long, default_value_t = 360.0)]
        card_width: f64,
        /// Print the outcome and swipe state after every event
        #[arg(long)]
        steps: bool,
    },
    /// Show how a salary entry is filtered, grouped and banded
    Salary {
        /// Raw text as typed into the salary field
        input: String,
    },
    /// List the salary bands offered in banded mode
    Bands,
    /// Manage the CLI configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => config::Config::default_path()?,
    };
    let mut cfg = config::Config::load_from(&config_path)?;
    if let Some(ref preset) = cli.preset {
        cfg.apply_preset(preset)?;
    }

    let mut log_config = cfg.logging.clone();
    if let Some(level) = cli.log_level.clone() {
        log_config.level = level;
    }
    log_config.json_format |= cli.log_json;
    logging::init(&log_config)?;

    let format = output::OutputFormat::from_str(&cli.output);

    match cli.command {
        Commands::Replay {
            script,
            card_width,
            steps,
        } => commands::replay::run(&script, &cfg.editor, card_width, steps, format),
        Commands::Salary { input } => commands::salary::show(&input, &cfg.editor, format),
        Commands::Bands => commands::salary::bands(format),
        Commands::Config { command } => commands::config::handle(command, &cfg, &config_path, format),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "staffroll", &mut std::io::stdout());
            Ok(())
        }
    }
}
