//! Workout-level queries and mutations on the journal.

use jiff::Timestamp;
use uuid::Uuid;

use super::Journal;
use crate::error::{LogbookError, Result};
use crate::models::Workout;

impl Journal {
    /// Opens a new workout. At most one workout may be in progress at a
    /// time.
    pub fn start_workout(&mut self, notes: Option<String>) -> Result<Workout> {
        if let Some(active) = self.active_workout() {
            return Err(LogbookError::WorkoutAlreadyActive { id: active.id });
        }

        let workout = Workout::start(Timestamp::now(), notes);
        self.workouts_mut().push(workout.clone());
        self.save()?;
        Ok(workout)
    }

    /// The workout currently in progress, if any.
    pub fn active_workout(&self) -> Option<&Workout> {
        self.workouts().iter().find(|workout| workout.is_active())
    }

    /// Closes the in-progress workout.
    pub fn finish_workout(&mut self) -> Result<Workout> {
        let now = Timestamp::now();
        let workout = self
            .workouts_mut()
            .iter_mut()
            .find(|workout| workout.is_active())
            .ok_or(LogbookError::NoActiveWorkout)?;

        workout.finish(now)?;
        let finished = workout.clone();
        self.save()?;
        Ok(finished)
    }

    /// Retrieves a workout by its ID.
    pub fn get_workout(&self, id: Uuid) -> Option<Workout> {
        self.workouts()
            .iter()
            .find(|workout| workout.id == id)
            .cloned()
    }

    /// Lists workouts, most recently started first, optionally capped.
    pub fn list_workouts(&self, limit: Option<usize>) -> Vec<Workout> {
        let iter = self.workouts().iter().rev().cloned();
        match limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }
}
