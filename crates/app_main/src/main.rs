//! ImageRenamer - batch-rename images to a numbered sequence from a web page
//!
//! Main entry point: sets up logging and configuration, then serves HTTP.

mod args;
mod server;

use anyhow::Result;
use app_core::AppConfig;
use args::Cli;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging and panic hook first
    let _log_guard = app_log::init()?;

    // Clean up old logs (7 days)
    if let Err(e) = app_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("ImageRenamer starting...");

    let config = load_config(&cli);

    if cli.save_config {
        return write_config(&cli, &config);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config))
}

fn write_config(cli: &Cli, config: &AppConfig) -> Result<()> {
    match &cli.config {
        Some(path) => config.save_to(path),
        None => config.save(),
    }
}

fn load_config(cli: &Cli) -> AppConfig {
    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Invalid configuration, using defaults: {:#}", e);
        AppConfig::default()
    });

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.no_browser {
        config.server.open_browser = false;
    }

    config
}
