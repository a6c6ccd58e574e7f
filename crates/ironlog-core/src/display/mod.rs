//! Display formatting functions and result types.
//!
//! This module provides helper types for formatting domain models, collections
//! and operation results, enabling consistent markdown output across different
//! contexts (lists, workout detail views, live timer readings).
//!
//! Business logic stays in the models; presentation lives here. Newtype
//! wrappers give collections and operation outcomes their own `Display`
//! implementations so the CLI never hand-assembles output strings.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (WorkoutSummaries, Exercises)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time and duration formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Exercises, WorkoutSummaries};
pub use datetime::{ElapsedTime, LocalDateTime, format_weight};
pub use models::{TimerDisplay, WorkoutDetail};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
