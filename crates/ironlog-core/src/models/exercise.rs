//! Exercise catalog model and related enumerations.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of muscle groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Abs,
    Cardio,
    #[default]
    Other,
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chest" => Ok(MuscleGroup::Chest),
            "back" => Ok(MuscleGroup::Back),
            "shoulders" => Ok(MuscleGroup::Shoulders),
            "biceps" => Ok(MuscleGroup::Biceps),
            "triceps" => Ok(MuscleGroup::Triceps),
            "legs" => Ok(MuscleGroup::Legs),
            "abs" => Ok(MuscleGroup::Abs),
            "cardio" => Ok(MuscleGroup::Cardio),
            "other" => Ok(MuscleGroup::Other),
            _ => Err(format!("Invalid muscle group: {s}")),
        }
    }
}

impl MuscleGroup {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Cardio => "cardio",
            MuscleGroup::Other => "other",
        }
    }

    /// Human-readable label for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Cardio => "Cardio",
            MuscleGroup::Other => "Other",
        }
    }
}

/// Broad classification of an exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    #[default]
    Strength,
    Cardio,
}

impl FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(ExerciseKind::Strength),
            "cardio" => Ok(ExerciseKind::Cardio),
            _ => Err(format!("Invalid exercise kind: {s}")),
        }
    }
}

impl ExerciseKind {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Strength => "strength",
            ExerciseKind::Cardio => "cardio",
        }
    }
}

/// An entry in the exercise catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier for the exercise
    pub id: u64,

    /// Name of the exercise
    pub name: String,

    /// Primary muscle group targeted
    pub muscle_group: MuscleGroup,

    /// Strength or cardio
    pub kind: ExerciseKind,

    /// Whether the exercise was added by the user (vs the built-in catalog)
    pub is_custom: bool,

    /// Timestamp when the exercise was created (UTC)
    pub created_at: Timestamp,
}

/// Built-in catalog seeded into an empty database on first use.
pub fn builtin_catalog() -> &'static [(&'static str, MuscleGroup, ExerciseKind)] {
    use ExerciseKind::{Cardio, Strength};
    use MuscleGroup as M;

    &[
        ("Barbell Bench Press", M::Chest, Strength),
        ("Dumbbell Bench Press", M::Chest, Strength),
        ("Dumbbell Fly", M::Chest, Strength),
        ("Push-Up", M::Chest, Strength),
        ("Machine Chest Press", M::Chest, Strength),
        ("Pull-Up", M::Back, Strength),
        ("Barbell Row", M::Back, Strength),
        ("Dumbbell Row", M::Back, Strength),
        ("Lat Pulldown", M::Back, Strength),
        ("Seated Cable Row", M::Back, Strength),
        ("Deadlift", M::Back, Strength),
        ("Overhead Press", M::Shoulders, Strength),
        ("Seated Dumbbell Press", M::Shoulders, Strength),
        ("Lateral Raise", M::Shoulders, Strength),
        ("Front Raise", M::Shoulders, Strength),
        ("Upright Row", M::Shoulders, Strength),
        ("Barbell Curl", M::Biceps, Strength),
        ("Dumbbell Curl", M::Biceps, Strength),
        ("Hammer Curl", M::Biceps, Strength),
        ("Preacher Curl", M::Biceps, Strength),
        ("Skull Crusher", M::Triceps, Strength),
        ("Cable Pushdown", M::Triceps, Strength),
        ("Dip", M::Triceps, Strength),
        ("Close-Grip Bench Press", M::Triceps, Strength),
        ("Barbell Squat", M::Legs, Strength),
        ("Leg Press", M::Legs, Strength),
        ("Lunge", M::Legs, Strength),
        ("Leg Extension", M::Legs, Strength),
        ("Leg Curl", M::Legs, Strength),
        ("Calf Raise", M::Legs, Strength),
        ("Crunch", M::Abs, Strength),
        ("Plank", M::Abs, Strength),
        ("Hanging Leg Raise", M::Abs, Strength),
        ("Bicycle Crunch", M::Abs, Strength),
        ("Running", M::Cardio, Cardio),
        ("Stationary Bike", M::Cardio, Cardio),
        ("Elliptical", M::Cardio, Cardio),
        ("Jump Rope", M::Cardio, Cardio),
        ("Rowing Machine", M::Cardio, Cardio),
    ]
}
