//! Work set model definition and set flags.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LogbookError, Result};

/// One performed set of an exercise.
///
/// Weight and reps are taken as given at logging time; `volume` is their
/// product and is never stored, only derived. Reps and reps-in-reserve use
/// unsigned integers, so negative values are unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkSet {
    /// Unique identifier for the set
    pub id: Uuid,

    /// Weight moved, in the user's working unit (must be finite and >= 0)
    pub weight: f64,

    /// Number of repetitions performed
    pub reps: u32,

    /// Rated perceived exertion, 0 through 10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,

    /// Estimated reps left in reserve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rir: Option<u32>,

    /// Whether this was a warmup set
    pub is_warmup: bool,

    /// True until the entry workflow confirms the set
    pub is_pending: bool,

    /// When the set was performed (UTC)
    pub performed_at: Timestamp,

    /// Qualitative flags; duplicates are removed at construction,
    /// first occurrence wins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<SetFlag>,
}

impl WorkSet {
    /// Creates a new set with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::Validation` when weight is negative or not
    /// finite, or when rpe is present and outside [0, 10].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        weight: f64,
        reps: u32,
        rpe: Option<f64>,
        rir: Option<u32>,
        is_warmup: bool,
        is_pending: bool,
        performed_at: Timestamp,
        flags: Vec<SetFlag>,
    ) -> Result<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(LogbookError::validation("weight")
                .with_reason(format!("Weight must be a non-negative number, got {weight}")));
        }
        if let Some(rpe) = rpe {
            if !rpe.is_finite() || !(0.0..=10.0).contains(&rpe) {
                return Err(LogbookError::validation("rpe")
                    .with_reason(format!("RPE must be between 0 and 10, got {rpe}")));
            }
        }

        let mut deduped: Vec<SetFlag> = Vec::with_capacity(flags.len());
        for flag in flags {
            if !deduped.contains(&flag) {
                deduped.push(flag);
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            weight,
            reps,
            rpe,
            rir,
            is_warmup,
            is_pending,
            performed_at,
            flags: deduped,
        })
    }

    /// Workload of this set: weight times reps.
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// Marks the set as confirmed by the entry workflow.
    pub fn confirm(&mut self) {
        self.is_pending = false;
    }
}

/// Type-safe enumeration of qualitative set flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SetFlag {
    /// A new personal record
    #[serde(rename = "pr")]
    PersonalRecord,

    /// The set ended in a failed rep
    Failure,

    /// Part of a drop set
    DropSet,

    /// Performed with paused reps
    PauseRep,
}

impl FromStr for SetFlag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pr" | "personal_record" => Ok(SetFlag::PersonalRecord),
            "failure" => Ok(SetFlag::Failure),
            "dropset" | "drop_set" => Ok(SetFlag::DropSet),
            "pauserep" | "pause_rep" => Ok(SetFlag::PauseRep),
            _ => Err(format!("Invalid set flag: {s}")),
        }
    }
}

impl SetFlag {
    /// Convert to canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SetFlag::PersonalRecord => "pr",
            SetFlag::Failure => "failure",
            SetFlag::DropSet => "dropset",
            SetFlag::PauseRep => "pauserep",
        }
    }
}
