//! Error types for the workout logging library.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

/// Comprehensive error type for all logbook operations.
#[derive(Error, Debug)]
pub enum LogbookError {
    /// Invalid input validation errors, raised at construction time
    #[error("Invalid value for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Workout not found for the given ID
    #[error("Workout with ID {id} not found")]
    WorkoutNotFound { id: Uuid },
    /// Set not found for the given ID
    #[error("Set with ID {id} not found")]
    SetNotFound { id: Uuid },
    /// An operation required an in-progress workout and none exists
    #[error("No workout is currently in progress")]
    NoActiveWorkout,
    /// A workout is already in progress
    #[error("Workout {id} is already in progress; finish it before starting another")]
    WorkoutAlreadyActive { id: Uuid },
    /// The workout has already been finished
    #[error("Workout {id} has already been finished")]
    WorkoutAlreadyFinished { id: Uuid },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LogbookError {
        LogbookError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LogbookError {
    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to LogbookError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add lazy context to any error type, converting to LogbookError.
    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| LogbookError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }

    fn with_context_lazy<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| LogbookError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Specialized extension trait for file-system-related Results.
pub trait FsResultExt<T> {
    /// Map I/O errors to a FileSystem error carrying the offending path.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FsResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| LogbookError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Result type alias for logbook operations
pub type Result<T> = std::result::Result<T, LogbookError>;
