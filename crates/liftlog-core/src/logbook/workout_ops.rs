//! Workout operations for the Logbook.

use tokio::task;

use super::Logbook;
use crate::{
    error::{LogbookError, Result},
    journal::Journal,
    models::Workout,
    params::{Id, ListWorkouts, StartWorkout},
};

impl Logbook {
    /// Opens a new workout. Fails when another workout is still in
    /// progress.
    pub async fn start_workout(&self, params: &StartWorkout) -> Result<Workout> {
        let journal_path = self.journal_path.clone();
        let notes = params.notes.clone();

        task::spawn_blocking(move || {
            let mut journal = Journal::open(&journal_path)?;
            journal.start_workout(notes)
        })
        .await
        .map_err(|e| LogbookError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Closes the in-progress workout and returns the finished record.
    pub async fn finish_workout(&self) -> Result<Workout> {
        let journal_path = self.journal_path.clone();

        task::spawn_blocking(move || {
            let mut journal = Journal::open(&journal_path)?;
            journal.finish_workout()
        })
        .await
        .map_err(|e| LogbookError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a workout by its ID.
    pub async fn get_workout(&self, params: &Id) -> Result<Option<Workout>> {
        let journal_path = self.journal_path.clone();
        let workout_id = params.id;

        task::spawn_blocking(move || {
            let journal = Journal::open(&journal_path)?;
            Ok(journal.get_workout(workout_id))
        })
        .await
        .map_err(|e| LogbookError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// The workout currently in progress, if any.
    pub async fn active_workout(&self) -> Result<Option<Workout>> {
        let journal_path = self.journal_path.clone();

        task::spawn_blocking(move || {
            let journal = Journal::open(&journal_path)?;
            Ok(journal.active_workout().cloned())
        })
        .await
        .map_err(|e| LogbookError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists workouts, most recently started first.
    pub async fn list_workouts(&self, params: &ListWorkouts) -> Result<Vec<Workout>> {
        let journal_path = self.journal_path.clone();
        let limit = params.limit;

        task::spawn_blocking(move || {
            let journal = Journal::open(&journal_path)?;
            Ok(journal.list_workouts(limit))
        })
        .await
        .map_err(|e| LogbookError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
