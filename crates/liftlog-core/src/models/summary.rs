//! Workout summary types and functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Workout;

/// Summary information about a workout with derived aggregate statistics.
///
/// Summaries are the only source of aggregate numbers handed to display
/// layers; consumers must not recompute volume or set counts themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    /// Workout ID
    pub id: Uuid,
    /// When the workout started (UTC)
    pub started_at: Timestamp,
    /// When the workout was finished; `None` while in progress
    pub ended_at: Option<Timestamp>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Number of exercise sessions
    pub exercise_count: u32,
    /// Total number of sets across all sessions
    pub total_sets: u32,
    /// Number of sets still awaiting confirmation
    pub pending_sets: u32,
    /// Total volume (weight x reps summed over every set)
    pub total_volume: f64,
}

impl From<&Workout> for WorkoutSummary {
    fn from(workout: &Workout) -> Self {
        let total_sets = workout.total_sets() as u32;
        let pending_sets = workout
            .exercises
            .iter()
            .flat_map(|session| session.sets.iter())
            .filter(|set| set.is_pending)
            .count() as u32;

        Self {
            id: workout.id,
            started_at: workout.started_at,
            ended_at: workout.ended_at,
            notes: workout.notes.clone(),
            exercise_count: workout.exercises.len() as u32,
            total_sets,
            pending_sets,
            total_volume: workout.total_volume(),
        }
    }
}
