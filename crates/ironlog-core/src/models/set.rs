//! Workout set model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single set of an exercise within a workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSet {
    /// Unique identifier; None for a provisional set not yet persisted
    pub id: Option<u64>,

    /// ID of the parent workout
    pub workout_id: u64,

    /// ID of the exercise this set belongs to
    pub exercise_id: u64,

    /// 1-based position within the exercise; contiguous per exercise
    pub set_number: u32,

    /// Weight in the user's unit; 0.0 for bodyweight movements
    pub weight: f64,

    /// Repetition count; 0 means the set was never filled in
    pub reps: u32,

    /// Rest duration after this set, in seconds
    pub rest_seconds: u32,

    /// Timestamp when the set was confirmed complete
    pub completed_at: Option<Timestamp>,
}

impl WorkoutSet {
    /// A set counts as completed only once it has reps and a completion
    /// timestamp. Provisional placeholder sets satisfy neither.
    pub fn is_completed(&self) -> bool {
        self.reps > 0 && self.completed_at.is_some()
    }

    /// Whether the set exists only in memory.
    pub fn is_provisional(&self) -> bool {
        self.id.is_none()
    }

    /// Volume contribution of this set: weight times reps, zero unless
    /// completed.
    pub fn volume(&self) -> f64 {
        if self.is_completed() {
            self.weight * f64::from(self.reps)
        } else {
            0.0
        }
    }
}
