//! Parameter structures for logbook operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, future integrations) without framework-specific
//! derives or dependencies. These structures provide a clean interface for
//! passing data between different layers of the application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! Interface layers define their own wrapper structs (for example, clap
//! argument structs) and convert into these core types via `From`
//! implementations:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Logbook      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│  (operations)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! This keeps the core free of CLI framework dependencies while every
//! interface converts to the same parameter types, so validation happens in
//! exactly one place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ExerciseCategory, SetFlag};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_workout and confirm_set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: Uuid,
}

/// Parameters for starting a new workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartWorkout {
    /// Optional free-form notes for the workout
    pub notes: Option<String>,
}

/// Parameters for listing past workouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListWorkouts {
    /// Maximum number of workouts to return, most recent first
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Parameters for logging one set against the active workout.
///
/// This is the boundary where a confirmed entry (voice or manual, supplied
/// by the collaborator driving the interface) becomes a validated
/// [`crate::models::WorkSet`]. Category and flags arrive as strings and are
/// parsed by [`LogSet::validate`]; numeric range checks happen in the
/// `WorkSet` constructor so malformed sets can never be built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSet {
    /// Exercise name (catalog lookup is case-insensitive)
    pub exercise: String,
    /// Category override for exercises not in the catalog
    pub category: Option<String>,
    /// Weight moved
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Rated perceived exertion, 0 through 10
    pub rpe: Option<f64>,
    /// Estimated reps in reserve
    pub rir: Option<u32>,
    /// Whether this was a warmup set
    #[serde(default)]
    pub warmup: bool,
    /// Whether the set still awaits confirmation
    #[serde(default)]
    pub pending: bool,
    /// Qualitative flags ('pr', 'failure', 'dropset', 'pauserep')
    #[serde(default)]
    pub flags: Vec<String>,
}

impl LogSet {
    /// Validate string-typed fields and return their parsed forms.
    ///
    /// # Returns
    ///
    /// A tuple of (optional parsed category, parsed flags). Numeric range
    /// validation is left to the `WorkSet` constructor.
    ///
    /// # Errors
    ///
    /// * `LogbookError::Validation` - When the category string is invalid
    /// * `LogbookError::Validation` - When any flag string is invalid
    pub fn validate(&self) -> crate::Result<(Option<ExerciseCategory>, Vec<SetFlag>)> {
        use std::str::FromStr;

        let category = if let Some(category_str) = &self.category {
            Some(ExerciseCategory::from_str(category_str).map_err(|_| {
                crate::LogbookError::Validation {
                    field: "category".to_string(),
                    reason: format!(
                        "Invalid category: {category_str}. Must be one of 'push', 'pull', \
                         'legs', 'core', 'cardio', 'fullbody', or 'other'"
                    ),
                }
            })?)
        } else {
            None
        };

        let mut flags = Vec::with_capacity(self.flags.len());
        for flag_str in &self.flags {
            let flag =
                SetFlag::from_str(flag_str).map_err(|_| crate::LogbookError::Validation {
                    field: "flags".to_string(),
                    reason: format!(
                        "Invalid flag: {flag_str}. Must be one of 'pr', 'failure', \
                         'dropset', or 'pauserep'"
                    ),
                })?;
            flags.push(flag);
        }

        Ok((category, flags))
    }
}

/// Parameters for confirming a pending set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfirmSet {
    /// ID of the set to confirm
    pub id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogbookError;

    #[test]
    fn test_log_set_validate_no_category_no_flags() {
        let params = LogSet {
            exercise: "Bench Press".to_string(),
            weight: 100.0,
            reps: 5,
            ..Default::default()
        };

        let (category, flags) = params.validate().expect("valid params");
        assert_eq!(category, None);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_log_set_validate_category() {
        let params = LogSet {
            exercise: "Sled Push".to_string(),
            category: Some("cardio".to_string()),
            weight: 80.0,
            reps: 10,
            ..Default::default()
        };

        let (category, _) = params.validate().expect("valid params");
        assert_eq!(category, Some(ExerciseCategory::Cardio));
    }

    #[test]
    fn test_log_set_validate_invalid_category() {
        let params = LogSet {
            exercise: "Bench Press".to_string(),
            category: Some("arms".to_string()),
            weight: 100.0,
            reps: 5,
            ..Default::default()
        };

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            LogbookError::Validation { field, reason } => {
                assert_eq!(field, "category");
                assert!(reason.contains("Invalid category: arms"));
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_log_set_validate_flags() {
        let params = LogSet {
            exercise: "Deadlift".to_string(),
            weight: 180.0,
            reps: 3,
            flags: vec!["pr".to_string(), "failure".to_string()],
            ..Default::default()
        };

        let (_, flags) = params.validate().expect("valid params");
        assert_eq!(flags, vec![SetFlag::PersonalRecord, SetFlag::Failure]);
    }

    #[test]
    fn test_log_set_validate_invalid_flag() {
        let params = LogSet {
            exercise: "Deadlift".to_string(),
            weight: 180.0,
            reps: 3,
            flags: vec!["heroic".to_string()],
            ..Default::default()
        };

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            LogbookError::Validation { field, reason } => {
                assert_eq!(field, "flags");
                assert!(reason.contains("Invalid flag: heroic"));
            }
            _ => panic!("Expected Validation error"),
        }
    }
}
