//! Workout model definition and related functionality.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{TimerState, WorkoutSet};

/// Represents a complete workout with metadata, timer state, and sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Unique identifier for the workout
    pub id: u64,

    /// Display name of the workout
    pub name: String,

    /// Calendar day the workout belongs to (may be back- or future-dated)
    pub date: Date,

    /// Timestamp when the workout record was created (UTC)
    pub started_at: Timestamp,

    /// Timestamp when the workout was finished; None while in progress
    pub completed_at: Option<Timestamp>,

    /// Free-form notes
    pub notes: Option<String>,

    /// Explicit position in the workout list; None sorts after positioned rows
    pub sort_order: Option<i64>,

    /// Display order of exercises within the workout
    #[serde(default)]
    pub exercise_order: Vec<u64>,

    /// Workout timer state, reconstructed from the persisted checkpoint
    #[serde(default)]
    pub timer: TimerState,

    /// Associated sets, in insertion order
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl Workout {
    /// Whether the workout is still in progress.
    pub fn is_open(&self) -> bool {
        self.completed_at.is_none()
    }

    /// Duration of a finished workout in whole minutes.
    ///
    /// Uses the frozen timer total, rounded to the nearest minute. Records
    /// predating the timer columns have a zero total; for those the wall
    /// clock span between start and completion is used instead. Open
    /// workouts have no fixed duration and report None.
    pub fn duration_minutes(&self) -> Option<u64> {
        let completed_at = self.completed_at?;
        let accumulated = match self.timer {
            TimerState::Finished { accumulated_ms } => accumulated_ms,
            _ => 0,
        };
        if accumulated > 0 {
            return Some((accumulated + 30_000) / 60_000);
        }
        let span_ms = completed_at.as_millisecond() - self.started_at.as_millisecond();
        let span_ms = u64::try_from(span_ms).unwrap_or(0);
        Some((span_ms + 30_000) / 60_000)
    }

    /// Ids of exercises present in this workout's sets, deduplicated in
    /// first-seen order.
    pub fn exercise_ids_in_set_order(&self) -> Vec<u64> {
        let mut seen = Vec::new();
        for set in &self.sets {
            if !seen.contains(&set.exercise_id) {
                seen.push(set.exercise_id);
            }
        }
        seen
    }
}
