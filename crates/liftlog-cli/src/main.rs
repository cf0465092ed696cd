//! Liftlog CLI Application
//!
//! Command-line interface for the liftlog workout tracking tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use liftlog_core::LogbookBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { journal_file, no_color, command } = Args::parse();

    let logbook = LogbookBuilder::new()
        .with_journal_path(journal_file)
        .build()
        .await
        .context("Failed to initialize logbook")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Liftlog started");

    match command {
        Some(Workout { command }) => {
            Cli::new(logbook, renderer)
                .handle_workout_command(command)
                .await
        }
        Some(Set { command }) => {
            Cli::new(logbook, renderer)
                .handle_set_command(command)
                .await
        }
        Some(History) => Cli::new(logbook, renderer).history().await,
        None => Cli::new(logbook, renderer).default_view().await,
    }
}
