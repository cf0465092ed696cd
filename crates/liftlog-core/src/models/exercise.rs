//! Exercise model definition and movement categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LogbookError, Result};

/// A named movement classified into a category.
///
/// Exercises are leaf value types: once created, the identifier never
/// changes and the name is stored trimmed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier for the exercise
    pub id: Uuid,

    /// Display name of the movement (trimmed, non-empty)
    pub name: String,

    /// Broad movement category
    pub category: ExerciseCategory,

    /// Whether this exercise was defined by the user rather than the
    /// built-in catalog
    pub is_custom: bool,
}

impl Exercise {
    /// Creates a new exercise with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::Validation` when the name is empty after
    /// trimming.
    pub fn new(
        name: impl Into<String>,
        category: ExerciseCategory,
        is_custom: bool,
    ) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LogbookError::validation("name")
                .with_reason("Exercise name must not be empty"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: trimmed.to_string(),
            category,
            is_custom,
        })
    }
}

/// Type-safe enumeration of movement categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    /// Pressing movements (bench press, overhead press, dips)
    Push,

    /// Pulling movements (rows, pull-ups, curls)
    Pull,

    /// Lower-body movements (squats, deadlifts, lunges)
    Legs,

    /// Trunk and midline work (planks, ab wheel)
    Core,

    /// Conditioning work (rowing, running, sled)
    Cardio,

    /// Compound whole-body movements (cleans, carries)
    FullBody,

    /// Anything that does not fit the above
    #[default]
    Other,
}

impl FromStr for ExerciseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "push" => Ok(ExerciseCategory::Push),
            "pull" => Ok(ExerciseCategory::Pull),
            "legs" => Ok(ExerciseCategory::Legs),
            "core" => Ok(ExerciseCategory::Core),
            "cardio" => Ok(ExerciseCategory::Cardio),
            "fullbody" | "full_body" => Ok(ExerciseCategory::FullBody),
            "other" => Ok(ExerciseCategory::Other),
            _ => Err(format!("Invalid exercise category: {s}")),
        }
    }
}

impl ExerciseCategory {
    /// Convert to canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Push => "push",
            ExerciseCategory::Pull => "pull",
            ExerciseCategory::Legs => "legs",
            ExerciseCategory::Core => "core",
            ExerciseCategory::Cardio => "cardio",
            ExerciseCategory::FullBody => "fullbody",
            ExerciseCategory::Other => "other",
        }
    }
}
