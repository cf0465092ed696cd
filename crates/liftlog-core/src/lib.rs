//! Core library for the liftlog workout tracking application.
//!
//! This crate provides the core business logic for recording workouts,
//! exercise sessions, and sets, including the journal persistence boundary,
//! data models, derived aggregates, and error handling.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): validated value types for workouts,
//!   sessions, sets, and exercises, each implementing [`std::fmt::Display`]
//! - **Aggregation** (model methods + [`history`]): pure derivations such as
//!   volume totals, top sets, and calendar-day grouping
//! - **Journal** ([`journal`]): JSON persistence that round-trips the value
//!   types field-for-field
//! - **Logbook** ([`logbook`]): the high-level async API interfaces talk to
//! - **Display Wrappers** ([`display`]): contextual formatting for
//!   collections and operation results
//!
//! # Quick Start
//!
//! ```rust
//! use liftlog_core::{params::{LogSet, StartWorkout}, LogbookBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a logbook instance
//! let logbook = LogbookBuilder::new()
//!     .with_journal_path(Some("journal.json"))
//!     .build()
//!     .await?;
//!
//! // Start a workout and log a set
//! let workout = logbook.start_workout(&StartWorkout::default()).await?;
//! let (_, set) = logbook
//!     .log_set(&LogSet {
//!         exercise: "Bench Press".to_string(),
//!         weight: 100.0,
//!         reps: 5,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Logged {} for workout {}", set.volume(), workout.id);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod history;
pub mod journal;
pub mod logbook;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use display::{
    CreateResult, History, HistoryDay, OperationStatus, UpdateResult, WorkoutSummaries,
};
pub use error::{LogbookError, Result};
pub use history::{group_by_day, Dated, DayGroup};
pub use journal::Journal;
pub use logbook::{Logbook, LogbookBuilder};
pub use models::{
    Exercise, ExerciseCategory, ExerciseSession, SetFlag, WorkSet, Workout, WorkoutSummary,
};
pub use params::{ConfirmSet, Id, ListWorkouts, LogSet, StartWorkout};
