//! Parkview CLI
//!
//! Headless front end for the park browser: prints the park list, renders
//! a park's detail model, and replays scroll offsets to show when the
//! compact header title appears.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use parkview_app::{App, AppConfig};
use parkview_catalog::Catalog;
use parkview_theme::FixedPreference;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::bundled().context("failed to load bundled catalog")?,
    };

    let system = FixedPreference(config.theme.system);
    let mut app = App::new(&config, &system, catalog);
    if let Some(theme) = cli.theme {
        app.set_theme(theme.into());
    }

    match &cli.command {
        Command::List => commands::run_list(&app),
        Command::Show(args) => commands::run_show(&mut app, args),
        Command::Theme { toggle } => commands::run_theme(&mut app, *toggle),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Missing config file means defaults
fn load_config(cli: &Cli) -> Result<AppConfig> {
    if !cli.config.exists() {
        tracing::debug!(path = %cli.config.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let config = AppConfig::from_path(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;
    tracing::info!(path = %cli.config.display(), "loaded config");
    Ok(config)
}
