//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, TrackerError};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // sort_order and exercise_order arrived after the first release;
        // older databases lack the columns.
        if !self.workout_column_exists("sort_order") {
            self.connection
                .execute("ALTER TABLE workouts ADD COLUMN sort_order INTEGER", [])
                .map_err(|e| {
                    TrackerError::database_error(
                        "Failed to add sort_order column to workouts table",
                        e,
                    )
                })?;
        }

        if !self.workout_column_exists("exercise_order") {
            self.connection
                .execute("ALTER TABLE workouts ADD COLUMN exercise_order TEXT", [])
                .map_err(|e| {
                    TrackerError::database_error(
                        "Failed to add exercise_order column to workouts table",
                        e,
                    )
                })?;
        }

        Ok(())
    }

    fn workout_column_exists(&self, column: &str) -> bool {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('workouts') WHERE name = ?1",
                [column],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false)
    }
}
