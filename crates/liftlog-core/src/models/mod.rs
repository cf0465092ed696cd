//! Data models for workouts, exercise sessions, and sets.
//!
//! This module contains the core domain models of the workout log. All of
//! them are plain value types: construction validates, mutation is limited
//! to appending children or closing a workout, and every derived number
//! (volume totals, set counts, top sets) is computed on demand from the
//! stored fields. Display implementations live in
//! [`crate::display::models`] to keep data and presentation apart.
//!
//! The containment hierarchy mirrors how training is actually logged:
//!
//! ```text
//! Workout ──▶ ExerciseSession ──▶ WorkSet
//!   (one gym visit)   (one movement)    (one performed set)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use liftlog_core::models::{
//!     Exercise, ExerciseCategory, ExerciseSession, WorkSet, Workout,
//! };
//!
//! # fn example() -> liftlog_core::Result<()> {
//! let exercise = Exercise::new("Back Squat", ExerciseCategory::Legs, false)?;
//! let mut session = ExerciseSession::new(exercise);
//! session.add_set(WorkSet::new(
//!     100.0,
//!     5,
//!     Some(8.0),
//!     None,
//!     false,
//!     false,
//!     Timestamp::now(),
//!     vec![],
//! )?);
//!
//! let mut workout = Workout::start(Timestamp::now(), None);
//! workout.add_session(session);
//! assert_eq!(workout.total_volume(), 500.0);
//! # Ok(())
//! # }
//! ```

pub mod exercise;
pub mod session;
pub mod set;
pub mod summary;
pub mod workout;


// Re-export all public types at the models level
pub use exercise::{Exercise, ExerciseCategory};
pub use session::ExerciseSession;
pub use set::{SetFlag, WorkSet};
pub use summary::WorkoutSummary;
pub use workout::Workout;
