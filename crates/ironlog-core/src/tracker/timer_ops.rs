//! Workout timer operations for the Tracker.
//!
//! Each transition loads the persisted checkpoint, applies the state
//! machine, and writes the new checkpoint back inside one database
//! transaction. The returned state is what was durably stored; callers
//! replace their in-memory state only after these return.

use jiff::Timestamp;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::TimerState,
};

impl Tracker {
    /// Pauses a workout's timer, banking the open run segment.
    pub async fn pause_timer(&self, workout_id: u64) -> Result<TimerState> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.pause_timer(workout_id, Timestamp::now())
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Resumes (or first starts) a workout's timer.
    pub async fn resume_timer(&self, workout_id: u64) -> Result<TimerState> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.start_timer(workout_id, Timestamp::now())
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Finishes a workout: freezes the timer and stamps the completion
    /// time. Returns the frozen state and the completion timestamp.
    pub async fn finish_workout_record(&self, workout_id: u64) -> Result<(TimerState, Timestamp)> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.finish_workout(workout_id, Timestamp::now())
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
