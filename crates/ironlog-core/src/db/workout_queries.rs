//! Workout CRUD operations, timer checkpoints, and summary queries.

use jiff::civil::Date;
use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{TimerCheckpoint, TimerState, Workout, WorkoutSummary},
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_WORKOUT_SQL: &str =
    "INSERT INTO workouts (name, date, started_at) VALUES (?1, ?2, ?3)";
const WORKOUT_COLUMNS: &str = "id, name, date, started_at, completed_at, notes, sort_order, exercise_order, timer_running, timer_accumulated_ms, timer_last_started_at";
const SELECT_OPEN_WORKOUT_SQL: &str =
    "SELECT id FROM workouts WHERE completed_at IS NULL ORDER BY started_at DESC LIMIT 1";
const CHECK_WORKOUT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM workouts WHERE id = ?1)";
const UPDATE_WORKOUT_NAME_SQL: &str = "UPDATE workouts SET name = ?1 WHERE id = ?2";
const UPDATE_WORKOUT_NOTES_SQL: &str = "UPDATE workouts SET notes = ?1 WHERE id = ?2";
const UPDATE_EXERCISE_ORDER_SQL: &str = "UPDATE workouts SET exercise_order = ?1 WHERE id = ?2";
const UPDATE_SORT_ORDER_SQL: &str = "UPDATE workouts SET sort_order = ?1 WHERE id = ?2";
const DELETE_WORKOUT_SQL: &str = "DELETE FROM workouts WHERE id = ?1";
const SELECT_TIMER_SQL: &str = "SELECT timer_running, timer_accumulated_ms, timer_last_started_at, completed_at FROM workouts WHERE id = ?1";
const UPDATE_TIMER_SQL: &str = "UPDATE workouts SET timer_running = ?1, timer_accumulated_ms = ?2, timer_last_started_at = ?3 WHERE id = ?4";
const FINISH_WORKOUT_SQL: &str = "UPDATE workouts SET timer_running = ?1, timer_accumulated_ms = ?2, timer_last_started_at = ?3, completed_at = ?4 WHERE id = ?5";
const SUMMARY_COLUMNS: &str = "id, name, date, started_at, completed_at, sort_order, timer_accumulated_ms, total_sets, completed_sets, total_volume, exercise_count";
const SELECT_SUMMARIES_SQL_ORDER: &str = "ORDER BY CASE WHEN sort_order IS NULL THEN 1 ELSE 0 END, sort_order, date DESC, started_at DESC";

impl super::Database {
    /// Helper function to construct a Workout from a database row.
    ///
    /// The timer state is reconstructed from the persisted checkpoint. This
    /// is a pure read; loading the same row any number of times yields the
    /// same state.
    fn build_workout_from_row(row: &rusqlite::Row) -> rusqlite::Result<Workout> {
        let completed_at = Self::parse_optional_timestamp_col(row, 4)?;
        let checkpoint = TimerCheckpoint {
            running: row.get::<_, i64>(8)? != 0,
            accumulated_ms: row.get::<_, i64>(9)?.max(0) as u64,
            last_started_at: Self::parse_optional_timestamp_col(row, 10)?,
        };

        Ok(Workout {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            date: Self::parse_date_col(row, 2)?,
            started_at: Self::parse_timestamp_col(row, 3)?,
            completed_at,
            notes: row.get(5)?,
            sort_order: row.get(6)?,
            exercise_order: Self::decode_order_list(row.get(7)?),
            timer: TimerState::from_checkpoint(checkpoint, completed_at),
            sets: Vec::new(),
        })
    }

    /// Helper function to construct a WorkoutSummary from a summary view row.
    fn build_summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<WorkoutSummary> {
        let started_at = Self::parse_timestamp_col(row, 3)?;
        let completed_at = Self::parse_optional_timestamp_col(row, 4)?;
        let accumulated_ms = row.get::<_, i64>(6)?.max(0) as u64;

        let duration_minutes = completed_at.map(|done| {
            if accumulated_ms > 0 {
                (accumulated_ms + 30_000) / 60_000
            } else {
                let span = done.as_millisecond() - started_at.as_millisecond();
                (u64::try_from(span).unwrap_or(0) + 30_000) / 60_000
            }
        });

        Ok(WorkoutSummary {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            date: Self::parse_date_col(row, 2)?,
            started_at,
            completed_at,
            sort_order: row.get(5)?,
            duration_minutes,
            total_sets: row.get::<_, i64>(7)? as u32,
            completed_sets: row.get::<_, i64>(8)? as u32,
            total_volume: row.get(9)?,
            exercise_count: row.get::<_, i64>(10)? as u32,
        })
    }

    /// Creates a new workout for the given date.
    pub fn create_workout(&mut self, name: &str, date: Date) -> Result<Workout> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        tx.execute(
            INSERT_WORKOUT_SQL,
            params![name, date.to_string(), now.to_string()],
        )
        .map_err(|e| TrackerError::database_error("Failed to insert workout", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Workout {
            id,
            name: name.into(),
            date,
            started_at: now,
            completed_at: None,
            notes: None,
            sort_order: None,
            exercise_order: Vec::new(),
            timer: TimerState::Stopped,
            sets: Vec::new(),
        })
    }

    /// Retrieves a workout by its ID, with sets eagerly loaded.
    pub fn get_workout(&self, id: u64) -> Result<Option<Workout>> {
        let sql = format!("SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let mut workout = stmt
            .query_row(params![id as i64], Self::build_workout_from_row)
            .optional()
            .map_err(|e| TrackerError::database_error("Failed to query workout", e))?;

        if let Some(ref mut workout) = workout {
            workout.sets = self.list_sets(workout.id)?;
        }

        Ok(workout)
    }

    /// Finds the most recently started workout without a completion
    /// timestamp, if any.
    pub fn find_open_workout(&self) -> Result<Option<Workout>> {
        let open_id: Option<i64> = self
            .connection
            .query_row(SELECT_OPEN_WORKOUT_SQL, [], |row| row.get(0))
            .optional()
            .map_err(|e| TrackerError::database_error("Failed to query open workout", e))?;

        match open_id {
            Some(id) => self.get_workout(id as u64),
            None => Ok(None),
        }
    }

    /// Lists all workouts as summaries, positioned rows first.
    pub fn list_workouts(&self) -> Result<Vec<WorkoutSummary>> {
        let sql =
            format!("SELECT {SUMMARY_COLUMNS} FROM workout_summaries {SELECT_SUMMARIES_SQL_ORDER}");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let summaries = stmt
            .query_map([], Self::build_summary_from_row)
            .map_err(|e| TrackerError::database_error("Failed to query workout summaries", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch workout summaries", e))?;

        Ok(summaries)
    }

    /// Renames a workout.
    pub fn rename_workout(&mut self, id: u64, name: &str) -> Result<()> {
        let updated = self
            .connection
            .execute(UPDATE_WORKOUT_NAME_SQL, params![name, id as i64])
            .map_err(|e| TrackerError::database_error("Failed to rename workout", e))?;

        if updated == 0 {
            return Err(TrackerError::WorkoutNotFound { id });
        }
        Ok(())
    }

    /// Replaces a workout's notes.
    pub fn update_workout_notes(&mut self, id: u64, notes: Option<&str>) -> Result<()> {
        let updated = self
            .connection
            .execute(UPDATE_WORKOUT_NOTES_SQL, params![notes, id as i64])
            .map_err(|e| TrackerError::database_error("Failed to update workout notes", e))?;

        if updated == 0 {
            return Err(TrackerError::WorkoutNotFound { id });
        }
        Ok(())
    }

    /// Deletes a workout and, via the cascade, all of its sets.
    pub fn delete_workout(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let deleted = tx
            .execute(DELETE_WORKOUT_SQL, params![id as i64])
            .map_err(|e| TrackerError::database_error("Failed to delete workout", e))?;

        if deleted == 0 {
            return Err(TrackerError::WorkoutNotFound { id });
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Persists the display order of exercises within a workout.
    pub fn set_exercise_order(&mut self, id: u64, order: &[u64]) -> Result<()> {
        let encoded = Self::encode_order_list(order)?;
        let updated = self
            .connection
            .execute(UPDATE_EXERCISE_ORDER_SQL, params![encoded, id as i64])
            .map_err(|e| TrackerError::database_error("Failed to update exercise order", e))?;

        if updated == 0 {
            return Err(TrackerError::WorkoutNotFound { id });
        }
        Ok(())
    }

    /// Assigns explicit list positions to workouts, in the order given.
    pub fn reorder_workouts(&mut self, ids: &[u64]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        for (position, id) in ids.iter().enumerate() {
            let updated = tx
                .execute(UPDATE_SORT_ORDER_SQL, params![position as i64, *id as i64])
                .map_err(|e| TrackerError::database_error("Failed to update sort order", e))?;
            if updated == 0 {
                return Err(TrackerError::WorkoutNotFound { id: *id });
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Whether a workout row exists.
    pub(super) fn workout_exists(conn: &Connection, id: u64) -> Result<bool> {
        conn.query_row(CHECK_WORKOUT_EXISTS_SQL, params![id as i64], |row| {
            row.get(0)
        })
        .db_context("Failed to check workout existence")
    }

    /// Starts or resumes the workout timer, persisting the new checkpoint.
    ///
    /// The read, transition, and write happen in one transaction so a
    /// concurrent process cannot interleave its own checkpoint.
    pub fn start_timer(&mut self, id: u64, now: Timestamp) -> Result<TimerState> {
        self.transition_timer(id, |state| state.start(now))
    }

    /// Pauses the workout timer, banking the open run segment.
    pub fn pause_timer(&mut self, id: u64, now: Timestamp) -> Result<TimerState> {
        self.transition_timer(id, |state| state.pause(now))
    }

    /// Finishes a workout: freezes the timer and stamps `completed_at`.
    pub fn finish_workout(&mut self, id: u64, now: Timestamp) -> Result<(TimerState, Timestamp)> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let (checkpoint, completed_at) = Self::read_checkpoint(&tx, id)?;
        let state = TimerState::from_checkpoint(checkpoint, completed_at);
        let finished = state.finish(now)?;
        let new_checkpoint = finished.checkpoint();

        tx.execute(
            FINISH_WORKOUT_SQL,
            params![
                i64::from(new_checkpoint.running),
                new_checkpoint.accumulated_ms as i64,
                new_checkpoint.last_started_at.map(|t| t.to_string()),
                now.to_string(),
                id as i64
            ],
        )
        .map_err(|e| TrackerError::database_error("Failed to finish workout", e))?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok((finished, now))
    }

    fn transition_timer<F>(&mut self, id: u64, transition: F) -> Result<TimerState>
    where
        F: FnOnce(TimerState) -> Result<TimerState>,
    {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let (checkpoint, completed_at) = Self::read_checkpoint(&tx, id)?;
        let state = TimerState::from_checkpoint(checkpoint, completed_at);
        let next = transition(state)?;
        let new_checkpoint = next.checkpoint();

        tx.execute(
            UPDATE_TIMER_SQL,
            params![
                i64::from(new_checkpoint.running),
                new_checkpoint.accumulated_ms as i64,
                new_checkpoint.last_started_at.map(|t| t.to_string()),
                id as i64
            ],
        )
        .map_err(|e| TrackerError::database_error("Failed to update timer checkpoint", e))?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(next)
    }

    fn read_checkpoint(
        conn: &Connection,
        id: u64,
    ) -> Result<(TimerCheckpoint, Option<Timestamp>)> {
        conn.query_row(SELECT_TIMER_SQL, params![id as i64], |row| {
            let checkpoint = TimerCheckpoint {
                running: row.get::<_, i64>(0)? != 0,
                accumulated_ms: row.get::<_, i64>(1)?.max(0) as u64,
                last_started_at: Self::parse_optional_timestamp_col(row, 2)?,
            };
            Ok((checkpoint, Self::parse_optional_timestamp_col(row, 3)?))
        })
        .map_err(|e| {
            if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                TrackerError::WorkoutNotFound { id }
            } else {
                TrackerError::database_error("Failed to read timer checkpoint", e)
            }
        })
    }
}
