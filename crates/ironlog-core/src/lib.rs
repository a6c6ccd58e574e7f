//! Core library for the Ironlog workout tracking application.
//!
//! This crate provides the core business logic for managing workouts,
//! exercises and sets, including database operations, the workout timer state
//! machine, data models, and error handling.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation allows the same data to be formatted differently depending
//! on context (lists vs. individual items, creation results vs. updates, etc.)
//! while maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use ironlog_core::{
//!     TrackerBuilder,
//!     params::{Id, StartWorkout},
//!     session::SessionStart,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Start a workout session
//! let params = StartWorkout {
//!     name: Some("Push Day".to_string()),
//!     date: None,
//!     finish_open: false,
//! };
//!
//! if let SessionStart::Started(workout) = tracker.start_session(&params).await? {
//!     let mut session = tracker.open_session(&Id { id: workout.id }).await?;
//!     session.add_exercise("Barbell Bench Press").await?;
//!     session.add_set(1, Some(60.0), Some(8)).await?;
//!     session.save().await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod session;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Exercises, LocalDateTime, OperationStatus, UpdateResult,
    WorkoutSummaries,
};
pub use error::{Result, TrackerError};
pub use models::{
    Exercise, ExerciseKind, MuscleGroup, TimerCheckpoint, TimerState, Workout, WorkoutSet,
    WorkoutSummary,
};
pub use params::{
    AddSet, CompleteSet, CreateExercise, EditSet, Id, ListExercises, RenameWorkout,
    ReorderWorkouts, SetRef, StartWorkout, UpdateNotes,
};
pub use session::{AddExerciseOutcome, SessionStart, SessionStats, WorkoutSession};
pub use tracker::{Tracker, TrackerBuilder, builder::DEFAULT_REST_SECONDS};
