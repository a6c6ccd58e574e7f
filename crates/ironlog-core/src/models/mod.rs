//! Data models for workouts, sets, and exercises.
//!
//! This module contains the core domain models of the Ironlog workout
//! tracking system. Display implementations for these models are located in
//! [`crate::display::models`] to maintain clean separation of concerns
//! between data structures and presentation logic.
//!
//! The central piece is [`TimerState`], the tagged workout timer state
//! machine. The timer is never driven by a background task: every state is a
//! checkpoint of `(running, accumulated_ms, last_started_at)` and the
//! displayed elapsed time is a pure function of that checkpoint and the
//! current instant. Reconstructing the state from a persisted checkpoint is
//! therefore idempotent, which is what makes crash recovery safe.

pub mod exercise;
pub mod set;
pub mod summary;
pub mod timer;
pub mod workout;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use exercise::{Exercise, ExerciseKind, MuscleGroup};
pub use set::WorkoutSet;
pub use summary::WorkoutSummary;
pub use timer::{TimerCheckpoint, TimerState};
pub use workout::Workout;
