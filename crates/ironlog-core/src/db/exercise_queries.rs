//! Exercise catalog queries and seeding.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{exercise::builtin_catalog, Exercise, ExerciseKind, MuscleGroup},
};

// Optimized SQL queries as const strings for compile-time optimization
const COUNT_EXERCISES_SQL: &str = "SELECT COUNT(*) FROM exercises";
const INSERT_EXERCISE_SQL: &str = "INSERT INTO exercises (name, muscle_group, kind, is_custom, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const EXERCISE_COLUMNS: &str = "id, name, muscle_group, kind, is_custom, created_at";
const CHECK_EXERCISE_NAME_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM exercises WHERE name = ?1 COLLATE NOCASE)";

impl super::Database {
    /// Helper function to construct an Exercise from a database row
    fn build_exercise_from_row(row: &rusqlite::Row) -> rusqlite::Result<Exercise> {
        let group_str: String = row.get(2)?;
        let muscle_group = group_str.parse::<MuscleGroup>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                Type::Text,
                format!("Invalid muscle group: {group_str}").into(),
            )
        })?;

        let kind_str: String = row.get(3)?;
        let kind = kind_str.parse::<ExerciseKind>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid exercise kind: {kind_str}").into(),
            )
        })?;

        Ok(Exercise {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            muscle_group,
            kind,
            is_custom: row.get(4)?,
            created_at: Self::parse_timestamp_col(row, 5)?,
        })
    }

    /// Seeds the built-in exercise catalog into an empty database.
    ///
    /// A non-empty catalog (built-in or custom) is left alone, so re-running
    /// on every connection is safe.
    pub fn seed_exercises(&mut self) -> Result<()> {
        let count: i64 = self
            .connection
            .query_row(COUNT_EXERCISES_SQL, [], |row| row.get(0))
            .db_context("Failed to count exercises")?;

        if count > 0 {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        for (name, muscle_group, kind) in builtin_catalog() {
            tx.execute(
                INSERT_EXERCISE_SQL,
                params![name, muscle_group.as_str(), kind.as_str(), false, &now_str],
            )
            .map_err(|e| TrackerError::database_error("Failed to seed exercise", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Lists exercises, optionally restricted to one muscle group, sorted by
    /// name.
    pub fn list_exercises(&self, muscle_group: Option<MuscleGroup>) -> Result<Vec<Exercise>> {
        let mut query = format!("SELECT {EXERCISE_COLUMNS} FROM exercises");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(group) = muscle_group {
            query.push_str(" WHERE muscle_group = ?");
            params_vec.push(Box::new(group.as_str().to_string()));
        }
        query.push_str(" ORDER BY name");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let exercises = stmt
            .query_map(&params_refs[..], Self::build_exercise_from_row)
            .map_err(|e| TrackerError::database_error("Failed to query exercises", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch exercises", e))?;

        Ok(exercises)
    }

    /// Retrieves a single exercise by its ID.
    pub fn get_exercise(&self, id: u64) -> Result<Option<Exercise>> {
        let sql = format!("SELECT {EXERCISE_COLUMNS} FROM exercises WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let exercise = stmt
            .query_row(params![id as i64], Self::build_exercise_from_row)
            .optional()
            .map_err(|e| TrackerError::database_error("Failed to get exercise", e))?;

        Ok(exercise)
    }

    /// Looks an exercise up by name, case-insensitively.
    pub fn find_exercise_by_name(&self, name: &str) -> Result<Option<Exercise>> {
        let sql =
            format!("SELECT {EXERCISE_COLUMNS} FROM exercises WHERE name = ?1 COLLATE NOCASE");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let exercise = stmt
            .query_row(params![name], Self::build_exercise_from_row)
            .optional()
            .map_err(|e| TrackerError::database_error("Failed to find exercise", e))?;

        Ok(exercise)
    }

    /// Creates a custom exercise. Names are unique, case-insensitively.
    pub fn create_exercise(
        &mut self,
        name: &str,
        muscle_group: MuscleGroup,
        kind: ExerciseKind,
    ) -> Result<Exercise> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let name_taken: bool = tx
            .query_row(CHECK_EXERCISE_NAME_SQL, params![name], |row| row.get(0))
            .map_err(|e| TrackerError::database_error("Failed to check exercise name", e))?;

        if name_taken {
            return Err(TrackerError::invalid_input("name")
                .with_reason(format!("An exercise named '{name}' already exists")));
        }

        let now = Timestamp::now();
        tx.execute(
            INSERT_EXERCISE_SQL,
            params![
                name,
                muscle_group.as_str(),
                kind.as_str(),
                true,
                now.to_string()
            ],
        )
        .map_err(|e| TrackerError::database_error("Failed to insert exercise", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Exercise {
            id,
            name: name.into(),
            muscle_group,
            kind,
            is_custom: true,
            created_at: now,
        })
    }
}
