//! Workout lifecycle operations for the Tracker.

use jiff::Timestamp;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::{Workout, WorkoutSummary},
    params::{Id, RenameWorkout, ReorderWorkouts, StartWorkout, UpdateNotes},
    session::{SessionStart, WorkoutSession},
};

impl Tracker {
    /// Starts a new workout session, guarding against a second open workout.
    ///
    /// If an open workout exists it is returned in
    /// [`SessionStart::AlreadyOpen`] and nothing is created, unless
    /// `finish_open` was set, in which case the open workout is finished
    /// first. A freshly started workout has its timer running.
    pub async fn start_session(&self, params: &StartWorkout) -> Result<SessionStart> {
        let (name, date) = params.validate()?;
        let finish_open = params.finish_open;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;

            if let Some(open) = db.find_open_workout()? {
                if !finish_open {
                    return Ok(SessionStart::AlreadyOpen(open));
                }
                db.finish_workout(open.id, Timestamp::now())?;
            }

            let workout = db.create_workout(&name, date)?;
            let timer = db.start_timer(workout.id, Timestamp::now())?;
            Ok(SessionStart::Started(Workout { timer, ..workout }))
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Opens an editing session for an existing workout.
    ///
    /// The timer state is reconstructed from the persisted checkpoint, so
    /// reopening after a crash resumes exactly where the last checkpoint
    /// left off.
    pub async fn open_session(&self, params: &Id) -> Result<WorkoutSession> {
        let workout = self
            .get_workout(params)
            .await?
            .ok_or(TrackerError::WorkoutNotFound { id: params.id })?;
        Ok(WorkoutSession::new(self.clone(), workout))
    }

    /// Opens an editing session for the currently open workout, if any.
    pub async fn open_current_session(&self) -> Result<Option<WorkoutSession>> {
        Ok(self
            .find_open_workout()
            .await?
            .map(|workout| WorkoutSession::new(self.clone(), workout)))
    }

    /// Retrieves a workout by ID, sets included.
    pub async fn get_workout(&self, params: &Id) -> Result<Option<Workout>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_workout(id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Finds the open (unfinished) workout, if any.
    pub async fn find_open_workout(&self) -> Result<Option<Workout>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.find_open_workout()
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists workout summaries, explicitly positioned workouts first.
    pub async fn list_workouts(&self) -> Result<Vec<WorkoutSummary>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_workouts()
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Renames a workout.
    pub async fn rename_workout(&self, params: &RenameWorkout) -> Result<()> {
        params.validate()?;
        let db_path = self.db_path.clone();
        let id = params.id;
        let name = params.name.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.rename_workout(id, &name)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Replaces a workout's notes.
    pub async fn update_notes(&self, params: &UpdateNotes) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = params.id;
        let notes = params.notes.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_workout_notes(id, notes.as_deref())
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a workout and all of its sets.
    pub async fn delete_workout(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_workout(id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Assigns explicit list positions to workouts, in the order given.
    pub async fn reorder_workouts(&self, params: &ReorderWorkouts) -> Result<()> {
        params.validate()?;
        let db_path = self.db_path.clone();
        let ids = params.ids.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.reorder_workouts(&ids)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
