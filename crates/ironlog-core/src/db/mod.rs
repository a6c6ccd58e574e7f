//! Database operations and SQLite management for workouts, sets, and
//! exercises.
//!
//! This module provides low-level database operations for the Ironlog
//! workout tracking system. It handles SQLite database connections, schema
//! management, and provides specialized query interfaces for workouts,
//! workout sets, and the exercise catalog.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod exercise_queries;
pub mod migrations;
pub mod set_queries;
pub mod utils;
pub mod workout_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
