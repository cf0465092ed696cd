//! High-level logbook API for recording and querying workouts.
//!
//! This module provides the main [`Logbook`] interface for interacting with
//! the workout log. The logbook acts as the central coordinator between the
//! application layers and the journal file, implementing all business logic
//! for workout and set operations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │     Journal     │
//! │ (workout_*,     │───▶│ (workout_ops,   │───▶│  (via journal/) │
//! │  set_handlers)  │    │  set_ops)       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers      Business logic        JSON persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Logbook`] instances with configuration
//! - [`workout_ops`]: Workout operations (start, finish, show, list)
//! - [`set_ops`]: Set operations (log, confirm)
//! - [`workout_handlers`]: Workout operations returning display wrappers
//! - [`set_handlers`]: Set operations returning display wrappers
//!
//! ## Design Principles
//!
//! 1. **Async First**: Journal I/O runs under `spawn_blocking`, keeping the
//!    API usable from async interfaces
//! 2. **Error Propagation**: Validation and lifecycle errors surface to the
//!    immediate caller; nothing is swallowed
//! 3. **Value Semantics**: Operations return owned snapshots; mutation never
//!    leaks across calls
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use liftlog_core::{params::{LogSet, StartWorkout}, LogbookBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let logbook = LogbookBuilder::new()
//!     .with_journal_path(Some("journal.json"))
//!     .build()
//!     .await?;
//!
//! let workout = logbook.start_workout(&StartWorkout::default()).await?;
//! println!("Started workout {}", workout.id);
//!
//! logbook
//!     .log_set(&LogSet {
//!         exercise: "Back Squat".to_string(),
//!         weight: 100.0,
//!         reps: 5,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let finished = logbook.finish_workout().await?;
//! println!("Total volume: {}", finished.total_volume());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod set_handlers;
pub mod set_ops;
pub mod workout_handlers;
pub mod workout_ops;


// Re-export the main types
pub use builder::LogbookBuilder;

/// Main logbook interface for recording and querying workouts.
pub struct Logbook {
    pub(crate) journal_path: PathBuf,
}

impl Logbook {
    /// Creates a new logbook with the specified journal path.
    pub(crate) fn new(journal_path: PathBuf) -> Self {
        Self { journal_path }
    }
}
