use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ExerciseCommands, SetCommands, WorkoutCommands};

/// Main command-line interface for the Ironlog workout tracker
///
/// Ironlog is a gym session tracker built around a single active workout.
/// It records exercises, sets and the workout stopwatch in a local SQLite
/// database, so a session survives the process that started it and can be
/// picked up again from any terminal.
#[derive(Parser)]
#[command(version, about, name = "ironlog")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/ironlog/ironlog.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Ironlog CLI
///
/// The CLI is organized into three main command categories:
/// - `workout`: Session lifecycle (start, pause, finish) and workout lists
/// - `exercise`: The exercise catalog and a workout's exercise lineup
/// - `set`: Individual sets within an open workout
#[derive(Subcommand)]
pub enum Commands {
    /// Manage workouts
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Manage the exercise catalog and a workout's exercises
    #[command(alias = "e")]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Manage sets within a workout
    #[command(alias = "s")]
    Set {
        #[command(subcommand)]
        command: SetCommands,
    },
}
