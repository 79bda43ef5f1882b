//! dailybrief library root.
//! Exposes the day analysis engine, the briefing pipeline, the CLI parser
//! and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Brief { .. } => cli::commands::brief::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve the config path (--config wins over the default location)
    let cfg_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    // 3️⃣ `init` is the only command that runs without a valid config
    if matches!(cli.command, Commands::Init) {
        return cli::commands::init::handle(&cfg_path);
    }

    // 4️⃣ load config ONCE, any error is fatal
    let cfg = Config::load(&cfg_path)?;

    dispatch(&cli, &cfg, &cfg_path)
}
