//! Workout model definition and lifecycle.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ExerciseSession;
use crate::error::{LogbookError, Result};

/// A single training session: an ordered collection of exercise sessions
/// bounded by a start time and an optional end time.
///
/// A workout is created open (`ended_at == None`), filled by appending
/// sessions and sets, and closed exactly once by [`Workout::finish`].
/// Closed workouts are treated as immutable history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Unique identifier for the workout
    pub id: Uuid,

    /// When the workout started (UTC)
    pub started_at: Timestamp,

    /// When the workout was finished; `None` while in progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<Timestamp>,

    /// Exercise sessions in the order they were started
    #[serde(default)]
    pub exercises: Vec<ExerciseSession>,

    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Workout {
    /// Opens a new workout with a fresh identifier.
    pub fn start(started_at: Timestamp, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at,
            ended_at: None,
            exercises: Vec::new(),
            notes,
        }
    }

    /// Whether the workout is still in progress.
    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Appends a session at the end of the workout.
    pub fn add_session(&mut self, session: ExerciseSession) {
        self.exercises.push(session);
    }

    /// Finds the session for an exercise by name (case-insensitive).
    pub fn session_mut(&mut self, exercise_name: &str) -> Option<&mut ExerciseSession> {
        let needle = exercise_name.trim().to_lowercase();
        self.exercises
            .iter_mut()
            .find(|session| session.exercise.name.to_lowercase() == needle)
    }

    /// Closes the workout. May only be called once.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::WorkoutAlreadyFinished` when the workout has
    /// already been closed, and `LogbookError::Validation` when `at` is
    /// earlier than the start time.
    pub fn finish(&mut self, at: Timestamp) -> Result<()> {
        if self.ended_at.is_some() {
            return Err(LogbookError::WorkoutAlreadyFinished { id: self.id });
        }
        if at < self.started_at {
            return Err(LogbookError::validation("ended_at")
                .with_reason("Workout cannot end before it started"));
        }
        self.ended_at = Some(at);
        Ok(())
    }

    /// Sum of each session's total volume; 0 for an empty workout.
    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseSession::total_volume).sum()
    }

    /// Total number of sets across all sessions.
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(ExerciseSession::set_count).sum()
    }
}
