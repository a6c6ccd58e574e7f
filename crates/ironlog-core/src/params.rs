//! Parameter structures for Ironlog operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, others later) without framework-specific
//! derives or dependencies. Interface layers define wrapper structs with
//! their own derives (clap, etc.) and convert into these via `From`; the
//! tracker only ever sees the framework-free form.
//!
//! Parameters that carry user-entered text (dates, muscle groups, exercise
//! kinds) keep it as strings and expose a `validate()` method that parses
//! into the domain type, so every interface shares one set of error
//! messages.

use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::models::{ExerciseKind, MuscleGroup};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_workout, delete_workout, pause, resume,
/// and finish.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for starting a new workout session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartWorkout {
    /// Optional workout name; defaults to "Workout"
    pub name: Option<String>,
    /// Optional calendar day in `YYYY-MM-DD` form; defaults to today
    pub date: Option<String>,
    /// Finish any currently open workout instead of refusing to start
    #[serde(default)]
    pub finish_open: bool,
}

impl StartWorkout {
    /// Validate and resolve the name and date.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the date string does not parse
    pub fn validate(&self) -> Result<(String, Date)> {
        let name = self
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Workout".to_string());

        let date = match &self.date {
            Some(raw) => Date::from_str(raw).map_err(|_| TrackerError::InvalidInput {
                field: "date".to_string(),
                reason: format!("Invalid date: {raw}. Expected YYYY-MM-DD"),
            })?,
            None => jiff::Zoned::now().date(),
        };

        Ok((name, date))
    }
}

/// Parameters for renaming a workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameWorkout {
    /// Workout ID to rename
    pub id: u64,
    /// New name for the workout
    pub name: String,
}

impl RenameWorkout {
    /// Validate the new name is non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::invalid_input("name")
                .with_reason("Workout name cannot be empty"));
        }
        Ok(())
    }
}

/// Parameters for replacing a workout's notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNotes {
    /// Workout ID to update
    pub id: u64,
    /// New notes; None clears them
    pub notes: Option<String>,
}

/// Parameters for assigning explicit list positions to workouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReorderWorkouts {
    /// Workout IDs in their new display order
    pub ids: Vec<u64>,
}

impl ReorderWorkouts {
    /// Validate the ID list is non-empty and free of duplicates.
    pub fn validate(&self) -> Result<()> {
        if self.ids.is_empty() {
            return Err(TrackerError::invalid_input("ids")
                .with_reason("At least one workout ID is required"));
        }
        for (i, id) in self.ids.iter().enumerate() {
            if self.ids[i + 1..].contains(id) {
                return Err(TrackerError::invalid_input("ids")
                    .with_reason(format!("Duplicate workout ID {id}")));
            }
        }
        Ok(())
    }
}

/// Parameters addressing one set of one exercise within a workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetRef {
    /// Workout ID
    pub workout_id: u64,
    /// Exercise ID within the workout
    pub exercise_id: u64,
    /// 1-based set number within the exercise
    pub set_number: u32,
}

/// Parameters for adding a set to an exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddSet {
    /// Workout ID to add the set to
    pub workout_id: u64,
    /// Exercise ID to add the set under
    pub exercise_id: u64,
    /// Optional weight; defaults to the previous set's weight
    pub weight: Option<f64>,
    /// Optional rep count; defaults to 0 (placeholder)
    pub reps: Option<u32>,
}

impl AddSet {
    /// Validate the weight is non-negative when provided.
    pub fn validate(&self) -> Result<()> {
        if let Some(weight) = self.weight {
            if weight < 0.0 || !weight.is_finite() {
                return Err(TrackerError::invalid_input("weight")
                    .with_reason("Weight must be a non-negative number"));
            }
        }
        Ok(())
    }
}

/// Parameters for editing a set's weight and reps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditSet {
    /// Set to edit
    pub set: SetRef,
    /// New weight, if changing
    pub weight: Option<f64>,
    /// New rep count, if changing
    pub reps: Option<u32>,
}

impl EditSet {
    /// Validate that something is being changed and values are sane.
    pub fn validate(&self) -> Result<()> {
        if self.weight.is_none() && self.reps.is_none() {
            return Err(TrackerError::invalid_input("set")
                .with_reason("Provide a new weight or rep count"));
        }
        if let Some(weight) = self.weight {
            if weight < 0.0 || !weight.is_finite() {
                return Err(TrackerError::invalid_input("weight")
                    .with_reason("Weight must be a non-negative number"));
            }
        }
        Ok(())
    }
}

/// Parameters for completing a set.
///
/// Weight and reps may be supplied inline; otherwise the set's current
/// values are used. The effective rep count must be greater than zero,
/// which is enforced by the session once the current values are known.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteSet {
    /// Set to complete
    pub set: SetRef,
    /// Final weight, if different from the stored value
    pub weight: Option<f64>,
    /// Final rep count, if different from the stored value
    pub reps: Option<u32>,
}

impl CompleteSet {
    /// Validate inline values.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When an explicit rep count of zero or
    ///   a negative weight is supplied
    pub fn validate(&self) -> Result<()> {
        if self.reps == Some(0) {
            return Err(TrackerError::invalid_input("reps")
                .with_reason("A completed set must have at least one rep"));
        }
        if let Some(weight) = self.weight {
            if weight < 0.0 || !weight.is_finite() {
                return Err(TrackerError::invalid_input("weight")
                    .with_reason("Weight must be a non-negative number"));
            }
        }
        Ok(())
    }
}

/// Parameters for listing the exercise catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListExercises {
    /// Optional muscle group filter
    pub muscle_group: Option<String>,
}

impl ListExercises {
    /// Parse the optional muscle group filter.
    pub fn validate(&self) -> Result<Option<MuscleGroup>> {
        self.muscle_group
            .as_deref()
            .map(|raw| {
                MuscleGroup::from_str(raw).map_err(|reason| TrackerError::InvalidInput {
                    field: "muscle_group".to_string(),
                    reason,
                })
            })
            .transpose()
    }
}

/// Parameters for creating a custom exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateExercise {
    /// Name of the exercise (required, unique)
    pub name: String,
    /// Muscle group; defaults to "other"
    pub muscle_group: Option<String>,
    /// Exercise kind ("strength" or "cardio"); defaults to "strength"
    pub kind: Option<String>,
}

impl CreateExercise {
    /// Validate and parse the muscle group and kind.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the name is empty or a value
    ///   does not parse
    pub fn validate(&self) -> Result<(MuscleGroup, ExerciseKind)> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::invalid_input("name")
                .with_reason("Exercise name cannot be empty"));
        }

        let muscle_group = match self.muscle_group.as_deref() {
            Some(raw) => {
                MuscleGroup::from_str(raw).map_err(|reason| TrackerError::InvalidInput {
                    field: "muscle_group".to_string(),
                    reason,
                })?
            }
            None => MuscleGroup::Other,
        };

        let kind = match self.kind.as_deref() {
            Some(raw) => {
                ExerciseKind::from_str(raw).map_err(|reason| TrackerError::InvalidInput {
                    field: "kind".to_string(),
                    reason,
                })?
            }
            None => ExerciseKind::Strength,
        };

        Ok((muscle_group, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_workout_defaults() {
        let (name, _date) = StartWorkout::default().validate().unwrap();
        assert_eq!(name, "Workout");
    }

    #[test]
    fn start_workout_rejects_bad_date() {
        let params = StartWorkout {
            date: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn complete_set_rejects_zero_reps() {
        let params = CompleteSet {
            reps: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(TrackerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn edit_set_requires_a_change() {
        assert!(EditSet::default().validate().is_err());
        let params = EditSet {
            weight: Some(50.0),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn reorder_workouts_rejects_duplicates() {
        let params = ReorderWorkouts { ids: vec![1, 2, 1] };
        assert!(params.validate().is_err());
    }

    #[test]
    fn create_exercise_parses_enums() {
        let params = CreateExercise {
            name: "Face Pull".to_string(),
            muscle_group: Some("shoulders".to_string()),
            kind: None,
        };
        let (group, kind) = params.validate().unwrap();
        assert_eq!(group, MuscleGroup::Shoulders);
        assert_eq!(kind, ExerciseKind::Strength);
    }
}
