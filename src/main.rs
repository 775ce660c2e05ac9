//! Gomoku
//!
//! Runs the text console (default) or the graphical board.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use gomoku::console::Console;
use gomoku::ui::GomokuApp;
use gomoku::{AppConfig, BoardStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(db) = cli.db {
        config.store.path = db;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => run_console(&config),
        Command::Gui => run_gui(config),
    }
}

/// Run the menu-driven console on stdin/stdout
fn run_console(config: &AppConfig) -> Result<()> {
    // The game stays playable without storage
    let store = match BoardStore::open(&config.store.path) {
        Ok(store) => Some(store),
        Err(e) => {
            error!(error = %e, path = %config.store.path.display(), "Failed to open board store");
            None
        }
    };

    info!("Starting console");
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout(), config, store);
    console.run()?;
    Ok(())
}

/// Run the egui front end
fn run_gui(config: AppConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    info!("Starting GUI");
    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
