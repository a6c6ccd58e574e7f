//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{Exercise, WorkoutSummary};

/// Newtype wrapper for displaying collections of workout summaries.
///
/// This provides clean Display formatting for workout collections without
/// title handling, allowing consumers to handle titles separately. Handles
/// empty collections gracefully.
pub struct WorkoutSummaries(pub Vec<WorkoutSummary>);

impl WorkoutSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of workout summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the workout summary at the given index.
    pub fn get(&self, index: usize) -> Option<&WorkoutSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the workout summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutSummary> {
        self.0.iter()
    }
}

impl Index<usize> for WorkoutSummaries {
    type Output = WorkoutSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for WorkoutSummaries {
    type Item = WorkoutSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WorkoutSummaries {
    type Item = &'a WorkoutSummary;
    type IntoIter = std::slice::Iter<'a, WorkoutSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for WorkoutSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No workouts found.")
        } else {
            for workout in &self.0 {
                write!(f, "{workout}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of catalog exercises.
///
/// Exercises are rendered grouped by muscle group, in the order they appear
/// in the collection. Handles empty collections gracefully.
pub struct Exercises(pub Vec<Exercise>);

impl Exercises {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of exercises in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the exercise at the given index.
    pub fn get(&self, index: usize) -> Option<&Exercise> {
        self.0.get(index)
    }

    /// Get an iterator over the exercises.
    pub fn iter(&self) -> std::slice::Iter<'_, Exercise> {
        self.0.iter()
    }
}

impl Index<usize> for Exercises {
    type Output = Exercise;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Exercises {
    type Item = Exercise;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Exercises {
    type Item = &'a Exercise;
    type IntoIter = std::slice::Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Exercises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No exercises found.");
        }
        let mut current_group = None;
        for exercise in &self.0 {
            if current_group != Some(exercise.muscle_group) {
                if current_group.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "## {}", exercise.muscle_group.label())?;
                writeln!(f)?;
                current_group = Some(exercise.muscle_group);
            }
            write!(f, "{exercise}")?;
        }
        Ok(())
    }
}
