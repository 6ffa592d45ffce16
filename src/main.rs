mod commands;
mod config;
mod models;
mod service;
mod storage;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps log lines out of the menus.
    let default_filter = if cli.verbose {
        "debug".to_string()
    } else {
        config::Config::load()
            .map(|c| c.log.filter)
            .unwrap_or_else(|_| "info".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.execute()
}
