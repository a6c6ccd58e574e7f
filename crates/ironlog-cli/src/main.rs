//! Ironlog CLI Application
//!
//! Command-line interface for the Ironlog workout tracking tool.

mod args;
mod cli;
mod renderer;

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use ironlog_core::TrackerBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Ironlog started");

    match command {
        Some(Workout { command }) => {
            Cli::new(tracker, renderer)
                .handle_workout_command(command)
                .await
        }
        Some(Exercise { command }) => {
            Cli::new(tracker, renderer)
                .handle_exercise_command(command)
                .await
        }
        Some(Set { command }) => {
            Cli::new(tracker, renderer)
                .handle_set_command(command)
                .await
        }
        None => Cli::new(tracker, renderer).list_workouts().await,
    }
}
