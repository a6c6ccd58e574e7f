//! Derived statistics for a workout session.
//!
//! Everything here is computed on demand from the current sets and timer
//! state; nothing is cached or stored, so two computations over the same
//! data always agree.

use serde::{Deserialize, Serialize};

use crate::models::{Workout, WorkoutSet};

/// Point-in-time statistics for one workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Sum of weight x reps over completed sets
    pub total_volume: f64,
    /// Number of completed sets
    pub completed_sets: u32,
    /// Total number of sets, placeholders included
    pub total_sets: u32,
    /// Number of exercises with at least one set
    pub exercise_count: u32,
    /// Whole-minute duration, fixed only once the workout is finished
    pub duration_minutes: Option<u64>,
}

impl SessionStats {
    /// Computes statistics for a workout from its sets and timer state.
    ///
    /// The exercise count covers exercises that have sets, the same
    /// definition the stored summary view uses, so the live session and the
    /// workout list always agree.
    pub fn compute(workout: &Workout) -> Self {
        Self {
            total_volume: volume_of(&workout.sets),
            completed_sets: workout.sets.iter().filter(|s| s.is_completed()).count() as u32,
            total_sets: workout.sets.len() as u32,
            exercise_count: workout.exercise_ids_in_set_order().len() as u32,
            duration_minutes: workout.duration_minutes(),
        }
    }
}

/// Total volume of a set list: weight x reps over completed sets only.
pub fn volume_of(sets: &[WorkoutSet]) -> f64 {
    sets.iter().map(WorkoutSet::volume).sum()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::Timestamp;

    use super::*;
    use crate::models::TimerState;

    fn set(exercise_id: u64, weight: f64, reps: u32, completed: bool) -> WorkoutSet {
        WorkoutSet {
            id: Some(1),
            workout_id: 1,
            exercise_id,
            set_number: 1,
            weight,
            reps,
            rest_seconds: 90,
            completed_at: completed.then(|| Timestamp::from_second(1_700_000_000).unwrap()),
        }
    }

    fn workout(sets: Vec<WorkoutSet>) -> Workout {
        Workout {
            id: 1,
            name: "Workout".to_string(),
            date: date(2024, 6, 1),
            started_at: Timestamp::from_second(1_700_000_000).unwrap(),
            completed_at: None,
            notes: None,
            sort_order: None,
            exercise_order: Vec::new(),
            timer: TimerState::Stopped,
            sets,
        }
    }

    #[test]
    fn volume_counts_only_completed_sets() {
        let sets = vec![
            set(7, 100.0, 5, true),
            set(7, 100.0, 5, false),
            set(3, 40.0, 10, true),
        ];
        assert_eq!(volume_of(&sets), 900.0);
    }

    #[test]
    fn volume_is_deterministic() {
        let sets = vec![set(7, 82.5, 3, true), set(7, 0.0, 12, true)];
        assert_eq!(volume_of(&sets), volume_of(&sets));
        assert_eq!(volume_of(&sets), 247.5);
    }

    #[test]
    fn stats_match_raw_fold_over_the_same_sets() {
        let w = workout(vec![
            set(7, 60.0, 8, true),
            set(7, 60.0, 0, false),
            set(3, 20.0, 15, true),
        ]);
        let stats = SessionStats::compute(&w);
        assert_eq!(stats.total_volume, volume_of(&w.sets));
        assert_eq!(stats.completed_sets, 2);
        assert_eq!(stats.total_sets, 3);
        assert_eq!(stats.exercise_count, 2);
        assert_eq!(stats.duration_minutes, None);
    }

    #[test]
    fn exercise_count_ignores_order_only_entries() {
        // Exercise 11 is in the order list but has no sets left; the summary
        // view would not count it either.
        let mut w = workout(vec![set(7, 60.0, 8, true)]);
        w.exercise_order = vec![7, 11];
        let stats = SessionStats::compute(&w);
        assert_eq!(stats.exercise_count, 1);
    }

    #[test]
    fn duration_appears_once_finished() {
        let mut w = workout(vec![]);
        w.completed_at = Some(Timestamp::from_second(1_700_003_600).unwrap());
        w.timer = TimerState::Finished {
            accumulated_ms: 40 * 60_000,
        };
        assert_eq!(SessionStats::compute(&w).duration_minutes, Some(40));
    }
}
