//! Set-level queries and mutations on the journal.

use jiff::Timestamp;
use uuid::Uuid;

use super::Journal;
use crate::catalog;
use crate::error::{LogbookError, Result};
use crate::models::{Exercise, ExerciseCategory, ExerciseSession, WorkSet};
use crate::params::LogSet;

impl Journal {
    /// Logs a set against the in-progress workout.
    ///
    /// The session for the exercise is created on first use: catalog names
    /// resolve to their canonical entry, anything else becomes a custom
    /// exercise. Returns the owning workout's ID together with the stored
    /// set.
    pub fn log_set(&mut self, params: &LogSet) -> Result<(Uuid, WorkSet)> {
        let (category_override, flags) = params.validate()?;

        let set = WorkSet::new(
            params.weight,
            params.reps,
            params.rpe,
            params.rir,
            params.warmup,
            params.pending,
            Timestamp::now(),
            flags,
        )?;

        let exercise_name = params.exercise.clone();
        let workout = self
            .workouts_mut()
            .iter_mut()
            .find(|workout| workout.is_active())
            .ok_or(LogbookError::NoActiveWorkout)?;
        let workout_id = workout.id;

        let needle = exercise_name.trim().to_lowercase();
        let position = workout
            .exercises
            .iter()
            .position(|session| session.exercise.name.to_lowercase() == needle);

        let index = match position {
            Some(index) => index,
            None => {
                let exercise = match catalog::find_exercise(&exercise_name) {
                    Some(entry) => Exercise::new(
                        entry.name,
                        category_override.unwrap_or(entry.category),
                        false,
                    )?,
                    None => Exercise::new(
                        exercise_name,
                        category_override.unwrap_or(ExerciseCategory::Other),
                        true,
                    )?,
                };
                workout.add_session(ExerciseSession::new(exercise));
                workout.exercises.len() - 1
            }
        };

        workout.exercises[index].add_set(set.clone());
        self.save()?;
        Ok((workout_id, set))
    }

    /// Confirms a pending set, clearing its pending flag in place.
    pub fn confirm_set(&mut self, id: Uuid) -> Result<WorkSet> {
        let set = self
            .workouts_mut()
            .iter_mut()
            .flat_map(|workout| workout.exercises.iter_mut())
            .flat_map(|session| session.sets.iter_mut())
            .find(|set| set.id == id)
            .ok_or(LogbookError::SetNotFound { id })?;

        set.confirm();
        let confirmed = set.clone();
        self.save()?;
        Ok(confirmed)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use uuid::Uuid;

    use crate::journal::Journal;
    use crate::params::LogSet;
    use crate::LogbookError;

    fn open_test_journal(temp_dir: &TempDir) -> Journal {
        Journal::open(temp_dir.path().join("journal.json")).expect("open journal")
    }

    fn bench_set(weight: f64, reps: u32) -> LogSet {
        LogSet {
            exercise: "Bench Press".to_string(),
            weight,
            reps,
            ..Default::default()
        }
    }

    #[test]
    fn test_log_set_requires_active_workout() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut journal = open_test_journal(&temp_dir);

        match journal.log_set(&bench_set(100.0, 5)).unwrap_err() {
            LogbookError::NoActiveWorkout => {}
            _ => panic!("Expected NoActiveWorkout error"),
        }
    }

    #[test]
    fn test_log_set_reuses_session_for_same_exercise() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut journal = open_test_journal(&temp_dir);
        journal.start_workout(None).expect("start");

        let (workout_id, _) = journal.log_set(&bench_set(100.0, 5)).expect("log set");
        journal
            .log_set(&LogSet {
                exercise: "bench press".to_string(), // different case, same session
                weight: 102.5,
                reps: 3,
                ..Default::default()
            })
            .expect("log second set");

        let workout = journal.get_workout(workout_id).expect("workout exists");
        assert_eq!(workout.exercises.len(), 1);
        assert_eq!(workout.exercises[0].set_count(), 2);
        assert_eq!(workout.exercises[0].exercise.name, "Bench Press");
        assert!(!workout.exercises[0].exercise.is_custom);
    }

    #[test]
    fn test_log_set_unknown_exercise_becomes_custom() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut journal = open_test_journal(&temp_dir);
        journal.start_workout(None).expect("start");

        let (workout_id, _) = journal
            .log_set(&LogSet {
                exercise: "Sandbag Carry".to_string(),
                category: Some("fullbody".to_string()),
                weight: 60.0,
                reps: 4,
                ..Default::default()
            })
            .expect("log set");

        let workout = journal.get_workout(workout_id).expect("workout exists");
        let exercise = &workout.exercises[0].exercise;
        assert!(exercise.is_custom);
        assert_eq!(exercise.name, "Sandbag Carry");
        assert_eq!(
            exercise.category,
            crate::models::ExerciseCategory::FullBody
        );
    }

    #[test]
    fn test_log_set_propagates_validation_failure() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut journal = open_test_journal(&temp_dir);
        journal.start_workout(None).expect("start");

        let result = journal.log_set(&bench_set(-5.0, 10));
        match result.unwrap_err() {
            LogbookError::Validation { field, .. } => assert_eq!(field, "weight"),
            _ => panic!("Expected Validation error"),
        }

        // Nothing was appended on the failed log
        let workout = journal.active_workout().expect("still active");
        assert_eq!(workout.total_sets(), 0);
    }

    #[test]
    fn test_confirm_set_clears_pending() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut journal = open_test_journal(&temp_dir);
        journal.start_workout(None).expect("start");

        let (_, set) = journal
            .log_set(&LogSet {
                exercise: "Deadlift".to_string(),
                weight: 180.0,
                reps: 3,
                pending: true,
                ..Default::default()
            })
            .expect("log pending set");
        assert!(set.is_pending);

        let confirmed = journal.confirm_set(set.id).expect("confirm");
        assert_eq!(confirmed.id, set.id);
        assert!(!confirmed.is_pending);
    }

    #[test]
    fn test_confirm_set_unknown_id() {
        let temp_dir = TempDir::new().expect("temp dir");
        let mut journal = open_test_journal(&temp_dir);

        let missing = Uuid::new_v4();
        match journal.confirm_set(missing).unwrap_err() {
            LogbookError::SetNotFound { id } => assert_eq!(id, missing),
            _ => panic!("Expected SetNotFound error"),
        }
    }
}
