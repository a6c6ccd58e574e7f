//! Exercise catalog operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::Exercise,
    params::{CreateExercise, Id, ListExercises},
};

impl Tracker {
    /// Lists the exercise catalog, optionally filtered by muscle group.
    pub async fn list_exercises(&self, params: &ListExercises) -> Result<Vec<Exercise>> {
        let muscle_group = params.validate()?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_exercises(muscle_group)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a catalog exercise by ID.
    pub async fn get_exercise(&self, params: &Id) -> Result<Option<Exercise>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_exercise(id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Creates a custom exercise.
    pub async fn create_exercise(&self, params: &CreateExercise) -> Result<Exercise> {
        let (muscle_group, kind) = params.validate()?;
        let db_path = self.db_path.clone();
        let name = params.name.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_exercise(&name, muscle_group, kind)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Resolves an exercise reference that may be a numeric ID or a
    /// case-insensitive name.
    pub async fn resolve_exercise(&self, reference: &str) -> Result<Exercise> {
        let db_path = self.db_path.clone();
        let reference = reference.trim().to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;

            if let Ok(id) = reference.parse::<u64>() {
                return db
                    .get_exercise(id)?
                    .ok_or(TrackerError::ExerciseNotFound { id });
            }

            db.find_exercise_by_name(&reference)?.ok_or_else(|| {
                TrackerError::invalid_input("exercise")
                    .with_reason(format!("No exercise named '{reference}' in the catalog"))
            })
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
