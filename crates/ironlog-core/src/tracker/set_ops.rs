//! Set persistence operations for the Tracker.
//!
//! These are the storage halves of the session's composition operations.
//! They deal in set row IDs; translating user-facing (exercise, set number)
//! addresses into IDs is the session's job.

use jiff::Timestamp;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::WorkoutSet,
};

impl Tracker {
    /// Inserts a set, returning the stored form with its assigned ID.
    pub async fn insert_set(&self, set: WorkoutSet) -> Result<WorkoutSet> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_set(&set)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Updates a set's weight and reps without touching its completion
    /// timestamp.
    pub async fn update_set_values(&self, set_id: u64, weight: f64, reps: u32) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_set(set_id, weight, reps)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Marks a set complete with its final weight and reps.
    pub async fn complete_set_record(
        &self,
        set_id: u64,
        weight: f64,
        reps: u32,
        completed_at: Timestamp,
    ) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_set(set_id, weight, reps, completed_at)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a set; the exercise's remaining sets are renumbered in the
    /// same transaction.
    pub async fn delete_set_record(&self, set_id: u64) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_set(set_id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Overwrites set numbers from an explicit (set id, number) assignment.
    pub async fn renumber_sets(&self, numbering: Vec<(u64, u32)>) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.renumber_sets(&numbering)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Persists a workout's exercise display order.
    pub async fn set_exercise_order(&self, workout_id: u64, order: Vec<u64>) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_exercise_order(workout_id, &order)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes every set of an exercise from a workout, rewriting the
    /// workout's exercise order in the same transaction. Returns the number
    /// of sets removed.
    pub async fn remove_exercise_sets(
        &self,
        workout_id: u64,
        exercise_id: u64,
        remaining_order: Vec<u64>,
    ) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.remove_exercise_sets(workout_id, exercise_id, &remaining_order)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
