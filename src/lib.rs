//! menuboard library root.
//! Exposes the pure menu/schedule core, the feed and cache collaborators,
//! text rendering and the CLI dispatcher.

pub mod board;
pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod render;
pub mod source;
pub mod ui;
pub mod utils;

pub use crate::core::classifier::{classify, normalize_category};
pub use crate::core::schedule::{is_open, parse_weekly_hours};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Menu { .. } => cli::commands::menu::handle(&cli.command, cfg),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Hours { .. } => cli::commands::hours::handle(&cli.command, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg),
        Commands::Refresh => cli::commands::refresh::handle(cfg),
    }
}

/// Apply command-line overrides on top of the file configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(src) = &cli.menu_source {
        cfg.menu_source = src.clone();
    }
    if let Some(src) = &cli.hours_source {
        cfg.hours_source = Some(src.clone());
    }
    if let Some(dir) = &cli.cache_dir {
        cfg.cache_dir = dir.clone();
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    apply_overrides(&cli, &mut cfg);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
