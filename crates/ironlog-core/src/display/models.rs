//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with status icons and structured sections
//! - Context-aware display behavior for different use cases

use std::fmt;

use super::datetime::{ElapsedTime, LocalDateTime, format_weight};
use crate::models::{
    Exercise, ExerciseKind, MuscleGroup, TimerState, Workout, WorkoutSet, WorkoutSummary,
};
use crate::session::Composition;

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TimerState {
    /// Human-readable status label for the timer.
    pub fn label(&self) -> &'static str {
        match self {
            TimerState::Stopped => "not started",
            TimerState::Running { .. } => "in progress",
            TimerState::Paused { .. } => "paused",
            TimerState::Finished { .. } => "finished",
        }
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl WorkoutSet {
    /// Format the set as a single markdown list item.
    ///
    /// This uses the same format whether the set is displayed standalone or
    /// within a workout context.
    fn fmt_set(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.is_completed() { "✓" } else { "○" };
        if self.weight > 0.0 {
            writeln!(
                f,
                "- {icon} Set {}: {} kg × {}",
                self.set_number,
                format_weight(self.weight),
                self.reps
            )
        } else {
            writeln!(f, "- {icon} Set {}: × {}", self.set_number, self.reps)
        }
    }
}

impl fmt::Display for WorkoutSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_set(f)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let custom = if self.is_custom { " (custom)" } else { "" };
        writeln!(
            f,
            "- {}. {} [{}]{custom}",
            self.id,
            self.name,
            self.muscle_group.label()
        )
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Same layout as the detail view, with `Exercise {id}` headers.
        WorkoutDetail::new(self, &[]).fmt(f)
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_sets > 0 {
            format!(" ({}/{})", self.completed_sets, self.total_sets)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;

        writeln!(f, "- **Date**: {}", self.date)?;
        writeln!(f, "- **Status**: {}", if self.is_open() { "open" } else { "finished" })?;
        if let Some(minutes) = self.duration_minutes {
            writeln!(f, "- **Duration**: {minutes} min")?;
        }
        if self.total_volume > 0.0 {
            writeln!(f, "- **Volume**: {} kg", format_weight(self.total_volume))?;
        }
        writeln!(f)?; // Add blank line after each workout

        Ok(())
    }
}

/// Wrapper that renders a workout with exercise names resolved from the
/// catalog instead of bare exercise IDs.
///
/// The workout's own Display impl has no access to the exercise catalog, so
/// it falls back to `Exercise {id}` headers. Callers that have the catalog at
/// hand (the CLI does) should prefer this wrapper.
pub struct WorkoutDetail<'a> {
    pub workout: &'a Workout,
    pub exercises: &'a [Exercise],
}

impl<'a> WorkoutDetail<'a> {
    /// Create a new detail view over a workout and the exercises it refers to.
    pub fn new(workout: &'a Workout, exercises: &'a [Exercise]) -> Self {
        Self { workout, exercises }
    }

    fn exercise_name(&self, id: u64) -> String {
        self.exercises
            .iter()
            .find(|e| e.id == id)
            .map_or_else(|| format!("Exercise {id}"), |e| e.name.clone())
    }
}

impl fmt::Display for WorkoutDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let workout = self.workout;
        writeln!(f, "# {}. {}", workout.id, workout.name)?;
        writeln!(f)?;

        writeln!(f, "- Date: {}", workout.date)?;
        writeln!(f, "- Status: {}", workout.timer.label())?;
        writeln!(f, "- Started: {}", LocalDateTime(&workout.started_at))?;
        if let Some(finished) = &workout.completed_at {
            writeln!(f, "- Finished: {}", LocalDateTime(finished))?;
        }
        if let Some(minutes) = workout.duration_minutes() {
            writeln!(f, "- Duration: {minutes} min")?;
        }

        if let Some(notes) = &workout.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        // The composition puts exercises in their persisted display order
        // and sets in set-number order, matching what an open session shows.
        let composition = Composition::from_sets(&workout.sets, &workout.exercise_order);
        if composition.groups().is_empty() {
            writeln!(f, "\nNo exercises in this workout.")?;
        } else {
            for group in composition.groups() {
                writeln!(f, "\n## {}", self.exercise_name(group.exercise_id))?;
                writeln!(f)?;
                for set in &group.sets {
                    write!(f, "{set}")?;
                }
            }
        }

        Ok(())
    }
}

/// Wrapper that renders the live stopwatch line for an open workout.
///
/// The reading is computed from the workout's persisted timer state and the
/// caller-supplied clock, so repeated renders with the same inputs produce
/// identical output.
pub struct TimerDisplay<'a> {
    pub workout: &'a Workout,
    pub now: jiff::Timestamp,
}

impl fmt::Display for TimerDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            ElapsedTime(self.workout.timer.elapsed_ms(self.now)),
            self.workout.timer.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use super::*;

    fn sample_workout() -> Workout {
        Workout {
            id: 7,
            name: "Push Day".to_string(),
            date: date(2026, 3, 14),
            started_at: Timestamp::from_second(1_773_000_000).unwrap(),
            completed_at: None,
            notes: Some("Felt strong".to_string()),
            sort_order: None,
            exercise_order: vec![3],
            timer: TimerState::Paused {
                accumulated_ms: 95_000,
            },
            sets: vec![WorkoutSet {
                id: Some(1),
                workout_id: 7,
                exercise_id: 3,
                set_number: 1,
                weight: 60.0,
                reps: 8,
                rest_seconds: 90,
                completed_at: Some(Timestamp::from_second(1_773_000_100).unwrap()),
            }],
        }
    }

    #[test]
    fn test_workout_display() {
        let output = format!("{}", sample_workout());
        assert!(output.contains("# 7. Push Day"));
        assert!(output.contains("- Status: paused"));
        assert!(output.contains("Felt strong"));
        assert!(output.contains("## Exercise 3"));
        assert!(output.contains("✓ Set 1: 60 kg × 8"));
    }

    #[test]
    fn test_workout_detail_resolves_names() {
        let workout = sample_workout();
        let exercises = vec![Exercise {
            id: 3,
            name: "Bench Press".to_string(),
            muscle_group: MuscleGroup::Chest,
            kind: ExerciseKind::Strength,
            is_custom: false,
            created_at: Timestamp::from_second(1_773_000_000).unwrap(),
        }];
        let output = format!("{}", WorkoutDetail::new(&workout, &exercises));
        assert!(output.contains("## Bench Press"));
        assert!(!output.contains("## Exercise 3"));
    }

    #[test]
    fn test_workout_display_honors_persisted_exercise_order() {
        let mut workout = sample_workout();
        // Sets were inserted for exercise 3 first, but the persisted order
        // puts exercise 9 on top.
        workout.exercise_order = vec![9, 3];
        workout.sets.push(WorkoutSet {
            id: Some(2),
            workout_id: 7,
            exercise_id: 9,
            set_number: 1,
            weight: 100.0,
            reps: 5,
            rest_seconds: 90,
            completed_at: None,
        });

        let output = format!("{workout}");
        let first = output.find("## Exercise 9").expect("exercise 9 missing");
        let second = output.find("## Exercise 3").expect("exercise 3 missing");
        assert!(first < second);
    }

    #[test]
    fn test_workout_display_orders_sets_by_number() {
        let mut workout = sample_workout();
        workout.sets[0].set_number = 2;
        // Row inserted later carries the lower set number, as after a
        // reorder flush.
        workout.sets.push(WorkoutSet {
            id: Some(2),
            workout_id: 7,
            exercise_id: 3,
            set_number: 1,
            weight: 55.0,
            reps: 10,
            rest_seconds: 90,
            completed_at: None,
        });

        let output = format!("{workout}");
        let first = output.find("Set 1").expect("set 1 missing");
        let second = output.find("Set 2").expect("set 2 missing");
        assert!(first < second);
    }

    #[test]
    fn test_timer_display_is_reproducible() {
        let workout = sample_workout();
        let now = Timestamp::from_second(1_773_000_500).unwrap();
        let first = format!("{}", TimerDisplay { workout: &workout, now });
        let second = format!("{}", TimerDisplay { workout: &workout, now });
        assert_eq!(first, second);
        assert_eq!(first, "01:35 (paused)");
    }

    #[test]
    fn test_bodyweight_set_omits_weight() {
        let set = WorkoutSet {
            id: Some(2),
            workout_id: 7,
            exercise_id: 3,
            set_number: 2,
            weight: 0.0,
            reps: 12,
            rest_seconds: 60,
            completed_at: None,
        };
        let output = format!("{set}");
        assert_eq!(output, "- ○ Set 2: × 12\n");
    }
}
