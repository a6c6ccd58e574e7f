//! Workout summary types and functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Workout;

/// Summary information about a workout with set and volume statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout ID
    pub id: u64,
    /// Name of the workout
    pub name: String,
    /// Calendar day the workout belongs to
    pub date: Date,
    /// Timestamp when the workout was started
    pub started_at: Timestamp,
    /// Completion timestamp; None while in progress
    pub completed_at: Option<Timestamp>,
    /// Explicit position in the workout list
    pub sort_order: Option<i64>,
    /// Duration in whole minutes for finished workouts
    pub duration_minutes: Option<u64>,
    /// Total number of sets (including placeholders)
    pub total_sets: u32,
    /// Number of completed sets
    pub completed_sets: u32,
    /// Total volume over completed sets (weight x reps)
    pub total_volume: f64,
    /// Number of distinct exercises with at least one set
    pub exercise_count: u32,
}

impl WorkoutSummary {
    /// Whether the workout is still in progress.
    pub fn is_open(&self) -> bool {
        self.completed_at.is_none()
    }
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        let total_sets = workout.sets.len() as u32;
        let completed_sets = workout.sets.iter().filter(|s| s.is_completed()).count() as u32;
        let total_volume = workout.sets.iter().map(super::WorkoutSet::volume).sum();
        let exercise_count = workout.exercise_ids_in_set_order().len() as u32;

        Self {
            id: workout.id,
            name: workout.name.clone(),
            date: workout.date,
            started_at: workout.started_at,
            completed_at: workout.completed_at,
            sort_order: workout.sort_order,
            duration_minutes: workout.duration_minutes(),
            total_sets,
            completed_sets,
            total_volume,
            exercise_count,
        }
    }
}
