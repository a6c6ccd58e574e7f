//! High-level tracker API for managing workouts, sets, and exercises.
//!
//! This module provides the main [`Tracker`] interface for interacting with
//! the Ironlog workout tracking system. The tracker acts as the central
//! coordinator between the application layers and the database.
//!
//! Every operation opens its own connection inside `spawn_blocking`, so the
//! async surface never holds SQLite handles across await points. The tracker
//! itself is just a database path plus configuration and is cheap to clone;
//! an active editing session is represented separately by
//! [`crate::session::WorkoutSession`], which a tracker hands out via
//! [`Tracker::open_session`].
//!
//! # Usage
//!
//! ```rust
//! use ironlog_core::{TrackerBuilder, params::StartWorkout};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/ironlog.db"))
//!     .build()
//!     .await?;
//!
//! let outcome = tracker.start_session(&StartWorkout::default()).await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod exercise_ops;
pub mod set_ops;
pub mod timer_ops;
pub mod workout_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::TrackerBuilder;

/// Main tracker interface for managing workouts, sets, and exercises.
#[derive(Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) default_rest_seconds: u32,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf, default_rest_seconds: u32) -> Self {
        Self {
            db_path,
            default_rest_seconds,
        }
    }

    /// The rest duration applied to new sets, in seconds.
    pub fn default_rest_seconds(&self) -> u32 {
        self.default_rest_seconds
    }
}
