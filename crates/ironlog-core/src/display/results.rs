//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, and delete operations with consistent messaging and resource
//! display.

use std::fmt;

use crate::models::{Exercise, Workout, WorkoutSet};

/// Wrapper type for displaying the result of create operations.
///
/// This provides consistent formatting for creation results,
/// including success messages and the created resource information.
///
/// The wrapper formats creation results with:
/// - Success message with resource type and ID
/// - Full details of the created resource
/// - Consistent markdown structure
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Workout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Started workout with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<WorkoutSet> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added set {}", self.resource.set_number)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Exercise> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created exercise with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// This provides consistent formatting for update results,
/// including success messages and the updated resource information.
///
/// The wrapper can track and display specific changes made during the update,
/// providing users with clear feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Workout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated workout with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<WorkoutSet> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated set {}", self.resource.set_number)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// This provides consistent formatting for deletion results,
/// including confirmation messages and resource identification.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Workout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted workout '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<WorkoutSet> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted set {}", self.resource.set_number)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, civil::date};

    use super::*;
    use crate::models::TimerState;

    fn create_test_workout() -> Workout {
        Workout {
            id: 3,
            name: "Pull Day".to_string(),
            date: date(2026, 3, 15),
            started_at: Timestamp::from_second(1_773_000_000).unwrap(),
            completed_at: None,
            notes: None,
            sort_order: None,
            exercise_order: vec![],
            timer: TimerState::Stopped,
            sets: vec![],
        }
    }

    #[test]
    fn test_create_result_workout() {
        let result = CreateResult::new(create_test_workout());
        let output = format!("{result}");
        assert!(output.contains("Started workout with ID: 3"));
        assert!(output.contains("# 3. Pull Day"));
    }

    #[test]
    fn test_update_result_with_changes() {
        let changes = vec!["Renamed to 'Pull Day'".to_string()];
        let result = UpdateResult::with_changes(create_test_workout(), changes);
        let output = format!("{result}");
        assert!(output.contains("Changes made:"));
        assert!(output.contains("- Renamed to 'Pull Day'"));
    }

    #[test]
    fn test_delete_result_workout() {
        let result = DeleteResult::new(create_test_workout());
        let output = format!("{result}");
        assert!(output.contains("Deleted workout 'Pull Day' (ID: 3)"));
    }
}
