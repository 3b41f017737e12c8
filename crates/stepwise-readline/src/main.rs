use anyhow::{Context, Result};
use clap::Parser;

use stepwise_application::AppController;
use stepwise_core::{MethodologyCatalog, StepwiseConfig};

mod cli;
mod command;
mod helper;
mod logging;
mod render;
mod repl;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => StepwiseConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => StepwiseConfig::load_default().context("failed to load config")?,
    };
    if let Some(methodology) = cli.methodology {
        config.default_methodology = methodology;
    }
    if let Some(filter) = cli.log_level {
        config.log.filter = filter;
    }

    let _log_guard = logging::init(&config.log.filter, config.log.directory.as_deref())?;

    if cli.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    let catalog = MethodologyCatalog::builtin();
    let initial = config.initial_methodology(&catalog);
    tracing::info!(
        "Starting with {} methodologies, browsing '{}'",
        catalog.len(),
        initial
    );

    repl::run(AppController::new(catalog, &initial))
}
