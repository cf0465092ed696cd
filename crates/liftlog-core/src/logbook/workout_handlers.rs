//! Workout handler operations that return formatted wrapper types.

use jiff::tz::TimeZone;
use tokio::task;

use super::Logbook;
use crate::{
    display::{CreateResult, History, HistoryDay, LocalDateTime, UpdateResult, WorkoutSummaries},
    error::{LogbookError, Result},
    history::group_by_day,
    journal::Journal,
    models::{Workout, WorkoutSummary},
    params::{Id, ListWorkouts, StartWorkout},
};

impl Logbook {
    /// Handle starting a workout, wrapped for display.
    pub async fn start_workout_result(
        &self,
        params: &StartWorkout,
    ) -> Result<CreateResult<Workout>> {
        let workout = self.start_workout(params).await?;
        Ok(CreateResult::new(workout))
    }

    /// Handle finishing the in-progress workout, wrapped for display with
    /// the closing time recorded as a change.
    pub async fn finish_workout_result(&self) -> Result<UpdateResult<Workout>> {
        let workout = self.finish_workout().await?;
        let changes = match &workout.ended_at {
            Some(ended_at) => vec![format!("Finished at {}", LocalDateTime(ended_at))],
            None => Vec::new(),
        };
        Ok(UpdateResult::with_changes(workout, changes))
    }

    /// Handle showing a complete workout with all its sessions and sets.
    pub async fn show_workout(&self, params: &Id) -> Result<Option<Workout>> {
        self.get_workout(params).await
    }

    /// Handle listing workouts as summaries with aggregate statistics.
    ///
    /// Converts workouts to summaries so every interface displays the same
    /// derived numbers instead of recomputing them.
    pub async fn list_workouts_summary(
        &self,
        params: &ListWorkouts,
    ) -> Result<WorkoutSummaries> {
        let workouts = self.list_workouts(params).await?;
        let summaries: Vec<WorkoutSummary> = workouts.iter().map(Into::into).collect();
        Ok(WorkoutSummaries(summaries))
    }

    /// Handle building the day-grouped workout history.
    ///
    /// The time zone is supplied by the caller so the grouping stays
    /// deterministic; interfaces pass the system zone, tests pin one.
    pub async fn history(&self, tz: TimeZone) -> Result<History> {
        let journal_path = self.journal_path.clone();

        let workouts = task::spawn_blocking(move || -> Result<Vec<Workout>> {
            let journal = Journal::open(&journal_path)?;
            Ok(journal.list_workouts(None))
        })
        .await
        .map_err(|e| LogbookError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        // list_workouts is newest-first; grouping wants chronological order
        // so each day's workouts read oldest to newest.
        let chronological: Vec<Workout> = workouts.into_iter().rev().collect();
        let days = group_by_day(&chronological, &tz)
            .into_iter()
            .map(|group| HistoryDay {
                day: group.day,
                workouts: group.items.into_iter().map(Into::into).collect(),
            })
            .collect();

        Ok(History(days))
    }
}
