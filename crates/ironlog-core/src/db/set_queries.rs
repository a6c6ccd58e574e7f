//! Workout set CRUD operations and renumbering queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::WorkoutSet,
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_SET_SQL: &str = "INSERT INTO workout_sets (workout_id, exercise_id, set_number, weight, reps, rest_seconds, completed_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SET_COLUMNS: &str =
    "id, workout_id, exercise_id, set_number, weight, reps, rest_seconds, completed_at";
const SELECT_SET_POSITION_SQL: &str =
    "SELECT workout_id, exercise_id, set_number FROM workout_sets WHERE id = ?1";
const UPDATE_SET_VALUES_SQL: &str =
    "UPDATE workout_sets SET weight = ?1, reps = ?2 WHERE id = ?3";
const COMPLETE_SET_SQL: &str =
    "UPDATE workout_sets SET weight = ?1, reps = ?2, completed_at = ?3 WHERE id = ?4";
const DELETE_SET_SQL: &str = "DELETE FROM workout_sets WHERE id = ?1";
const RENUMBER_AFTER_DELETE_SQL: &str = "UPDATE workout_sets SET set_number = set_number - 1 WHERE workout_id = ?1 AND exercise_id = ?2 AND set_number > ?3";
const UPDATE_SET_NUMBER_SQL: &str = "UPDATE workout_sets SET set_number = ?1 WHERE id = ?2";
const DELETE_EXERCISE_SETS_SQL: &str =
    "DELETE FROM workout_sets WHERE workout_id = ?1 AND exercise_id = ?2";
const UPDATE_EXERCISE_ORDER_SQL: &str = "UPDATE workouts SET exercise_order = ?1 WHERE id = ?2";

impl super::Database {
    /// Helper function to construct a WorkoutSet from a database row.
    fn build_set_from_row(row: &rusqlite::Row) -> rusqlite::Result<WorkoutSet> {
        Ok(WorkoutSet {
            id: Some(row.get::<_, i64>(0)? as u64),
            workout_id: row.get::<_, i64>(1)? as u64,
            exercise_id: row.get::<_, i64>(2)? as u64,
            set_number: row.get::<_, i64>(3)? as u32,
            weight: row.get(4)?,
            reps: row.get::<_, i64>(5)? as u32,
            rest_seconds: row.get::<_, i64>(6)? as u32,
            completed_at: Self::parse_optional_timestamp_col(row, 7)?,
        })
    }

    /// Inserts a new set, returning it with its assigned ID.
    pub fn create_set(&mut self, set: &WorkoutSet) -> Result<WorkoutSet> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !Self::workout_exists(&tx, set.workout_id)? {
            return Err(TrackerError::WorkoutNotFound { id: set.workout_id });
        }

        tx.execute(
            INSERT_SET_SQL,
            params![
                set.workout_id as i64,
                set.exercise_id as i64,
                i64::from(set.set_number),
                set.weight,
                i64::from(set.reps),
                i64::from(set.rest_seconds),
                set.completed_at.map(|t| t.to_string()),
            ],
        )
        .map_err(|e| TrackerError::database_error("Failed to insert set", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(WorkoutSet {
            id: Some(id),
            ..set.clone()
        })
    }

    /// Retrieves all sets for a workout, in insertion order.
    pub fn list_sets(&self, workout_id: u64) -> Result<Vec<WorkoutSet>> {
        let sql = format!("SELECT {SET_COLUMNS} FROM workout_sets WHERE workout_id = ?1 ORDER BY id");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let sets = stmt
            .query_map(params![workout_id as i64], Self::build_set_from_row)
            .map_err(|e| TrackerError::database_error("Failed to query sets", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch sets", e))?;

        Ok(sets)
    }

    /// Retrieves a single set by its ID.
    pub fn get_set(&self, set_id: u64) -> Result<Option<WorkoutSet>> {
        let sql = format!("SELECT {SET_COLUMNS} FROM workout_sets WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let set = stmt
            .query_row(params![set_id as i64], Self::build_set_from_row)
            .optional()
            .map_err(|e| TrackerError::database_error("Failed to get set", e))?;

        Ok(set)
    }

    /// Updates a set's weight and reps, leaving any completion timestamp
    /// untouched.
    pub fn update_set(&mut self, set_id: u64, weight: f64, reps: u32) -> Result<()> {
        let updated = self
            .connection
            .execute(
                UPDATE_SET_VALUES_SQL,
                params![weight, i64::from(reps), set_id as i64],
            )
            .map_err(|e| TrackerError::database_error("Failed to update set", e))?;

        if updated == 0 {
            return Err(TrackerError::SetNotFound { id: set_id });
        }
        Ok(())
    }

    /// Marks a set complete with its final weight and reps.
    pub fn complete_set(
        &mut self,
        set_id: u64,
        weight: f64,
        reps: u32,
        completed_at: Timestamp,
    ) -> Result<()> {
        let updated = self
            .connection
            .execute(
                COMPLETE_SET_SQL,
                params![
                    weight,
                    i64::from(reps),
                    completed_at.to_string(),
                    set_id as i64
                ],
            )
            .map_err(|e| TrackerError::database_error("Failed to complete set", e))?;

        if updated == 0 {
            return Err(TrackerError::SetNotFound { id: set_id });
        }
        Ok(())
    }

    /// Deletes a set and closes the numbering gap it leaves behind.
    ///
    /// Survivors of the same workout and exercise with a higher number are
    /// decremented in the same transaction, so numbering stays contiguous
    /// and 1-based no matter when the process dies.
    pub fn delete_set(&mut self, set_id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let (workout_id, exercise_id, set_number): (i64, i64, i64) = tx
            .query_row(SELECT_SET_POSITION_SQL, params![set_id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .map_err(|e| {
                if matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                    TrackerError::SetNotFound { id: set_id }
                } else {
                    TrackerError::database_error("Failed to query set", e)
                }
            })?;

        tx.execute(DELETE_SET_SQL, params![set_id as i64])
            .map_err(|e| TrackerError::database_error("Failed to delete set", e))?;

        tx.execute(
            RENUMBER_AFTER_DELETE_SQL,
            params![workout_id, exercise_id, set_number],
        )
        .map_err(|e| TrackerError::database_error("Failed to renumber sets", e))?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Overwrites set numbers from an explicit (set id, number) assignment.
    ///
    /// Used by the reorder flush: the caller recomputes the full numbering
    /// and this overwrites it wholesale in one transaction. Running the same
    /// flush twice is a no-op.
    pub fn renumber_sets(&mut self, numbering: &[(u64, u32)]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        for (set_id, number) in numbering {
            let updated = tx
                .execute(
                    UPDATE_SET_NUMBER_SQL,
                    params![i64::from(*number), *set_id as i64],
                )
                .map_err(|e| TrackerError::database_error("Failed to update set number", e))?;
            if updated == 0 {
                return Err(TrackerError::SetNotFound { id: *set_id });
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Removes every set of an exercise from a workout and rewrites the
    /// workout's exercise order list in the same transaction.
    ///
    /// Returns the number of sets removed.
    pub fn remove_exercise_sets(
        &mut self,
        workout_id: u64,
        exercise_id: u64,
        remaining_order: &[u64],
    ) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !Self::workout_exists(&tx, workout_id)? {
            return Err(TrackerError::WorkoutNotFound { id: workout_id });
        }

        let removed = tx
            .execute(
                DELETE_EXERCISE_SETS_SQL,
                params![workout_id as i64, exercise_id as i64],
            )
            .map_err(|e| TrackerError::database_error("Failed to delete exercise sets", e))?;

        let encoded = Self::encode_order_list(remaining_order)?;
        tx.execute(
            UPDATE_EXERCISE_ORDER_SQL,
            params![encoded, workout_id as i64],
        )
        .map_err(|e| TrackerError::database_error("Failed to update exercise order", e))?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(removed)
    }
}
