//! Display formatting functions and result types.
//!
//! This module provides wrapper types for collections and operation results,
//! enabling consistent formatting across different output contexts. The
//! domain models implement [`std::fmt::Display`] directly (in [`models`]);
//! the wrappers here add contextual formatting on top:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Workout, Set)  │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (WorkoutSummaries, History)
//! - [`results`]: Operation result types (CreateResult, UpdateResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! All formatters produce markdown so the CLI's terminal renderer can apply
//! rich styling, and every wrapper handles its empty case explicitly.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{History, HistoryDay, WorkoutSummaries};
pub use datetime::{CivilDay, LocalDateTime};
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
