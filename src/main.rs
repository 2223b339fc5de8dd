// Entry point: parses CLI flags, loads config, and runs the TUI.

mod action;
mod app;
mod carousel;
mod catalog;
mod components;
mod config;
mod gallery;
mod logging;
mod search;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "modedeck", about = "Browse game modes in a looping terminal card gallery")]
struct Cli {
    /// Catalog JSON to load: a file path or an http(s) URL.
    #[arg(long, value_name = "PATH|URL")]
    catalog: Option<String>,

    /// Config file to use instead of ~/.config/modedeck/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level for modedeck's own messages (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("Warning: ignoring unreadable config ({e}); using defaults.");
        Config::default()
    });
    if let Some(source) = cli.catalog {
        config.catalog.source = source;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    logging::init(&config.logging)?;

    let mut app = app::App::new(config)?;
    app.run().await?;

    Ok(())
}
