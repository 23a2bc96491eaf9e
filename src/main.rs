mod alarm;
mod cli;
mod config;
mod models;
mod timings;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    let config = AppConfig::load().context("Loading config")?;

    match cli.command {
        Some(Commands::Times) => {
            handlers::handle_times(&config)?;
        }
        Some(Commands::Config) => {
            handlers::handle_config(&config)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(config, cli.presets, !cli.no_fetch)?;
        }
    }

    Ok(())
}

/// The terminal belongs to the UI, so log lines go to a file in the data
/// directory. `RUST_LOG` still picks the level.
fn init_logging() -> Result<()> {
    AppConfig::ensure_data_dir()?;
    let path = AppConfig::log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Opening log file {:?}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
