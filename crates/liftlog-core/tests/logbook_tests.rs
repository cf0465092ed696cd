use std::path::PathBuf;

use jiff::tz::TimeZone;
use liftlog_core::{LogbookBuilder, LogbookError, SetFlag};
use tempfile::TempDir;

mod common;

/// Helper function to create a temporary directory and journal path
fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let journal_path = temp_dir.path().join("test_journal.json");
    (temp_dir, journal_path)
}

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_workout_workflow() {
    let (_temp_dir, logbook) = common::create_test_logbook().await;

    // Start a workout
    let workout = logbook
        .start_workout(&liftlog_core::params::StartWorkout {
            notes: Some("Integration test session".to_string()),
        })
        .await
        .expect("Failed to start workout");
    assert!(workout.is_active());

    // Log working sets across two exercises
    let (workout_id, _) = logbook
        .log_set(&liftlog_core::params::LogSet {
            exercise: "Back Squat".to_string(),
            weight: 60.0,
            reps: 5,
            warmup: true,
            ..Default::default()
        })
        .await
        .expect("Failed to log warmup set");
    assert_eq!(workout_id, workout.id);

    logbook
        .log_set(&liftlog_core::params::LogSet {
            exercise: "Back Squat".to_string(),
            weight: 100.0,
            reps: 5,
            rpe: Some(8.0),
            flags: vec!["pr".to_string()],
            ..Default::default()
        })
        .await
        .expect("Failed to log top set");

    let (_, pending_set) = logbook
        .log_set(&liftlog_core::params::LogSet {
            exercise: "Bench Press".to_string(),
            weight: 80.0,
            reps: 8,
            pending: true,
            ..Default::default()
        })
        .await
        .expect("Failed to log pending set");
    assert!(pending_set.is_pending);

    // Verify the in-progress aggregates
    let active = logbook
        .active_workout()
        .await
        .expect("Failed to query active workout")
        .expect("Workout should be active");
    assert_eq!(active.exercises.len(), 2);
    assert_eq!(active.total_sets(), 3);
    assert_eq!(active.total_volume(), 300.0 + 500.0 + 640.0);

    let squat_session = &active.exercises[0];
    assert_eq!(squat_session.exercise.name, "Back Squat");
    let top = squat_session.top_set().expect("Session has sets");
    assert_eq!(top.weight, 100.0);
    assert_eq!(top.flags, vec![SetFlag::PersonalRecord]);

    // Confirm the pending set
    let confirmed = logbook
        .confirm_set(&liftlog_core::params::ConfirmSet { id: pending_set.id })
        .await
        .expect("Failed to confirm set");
    assert!(!confirmed.is_pending);

    // Finish the workout
    let finished = logbook
        .finish_workout()
        .await
        .expect("Failed to finish workout");
    assert_eq!(finished.id, workout.id);
    assert!(!finished.is_active());
    assert!(finished.ended_at.expect("finished") >= finished.started_at);

    // Listing shows the finished workout with its aggregates
    let summaries = logbook
        .list_workouts_summary(&liftlog_core::params::ListWorkouts::default())
        .await
        .expect("Failed to list workouts");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_sets, 3);
    assert_eq!(summaries[0].pending_sets, 0);
    assert_eq!(summaries[0].total_volume, 1440.0);

    // History groups the workout under one day
    let history = logbook
        .history(TimeZone::UTC)
        .await
        .expect("Failed to build history");
    assert_eq!(history.len(), 1);
    assert_eq!(history.0[0].workouts.len(), 1);
}

#[tokio::test]
async fn test_journal_persistence_across_logbooks() {
    let (_temp_dir, journal_path) = create_test_environment();

    let workout_id = {
        // Log a workout through the first logbook instance
        let logbook = LogbookBuilder::new()
            .with_journal_path(Some(journal_path.clone()))
            .build()
            .await
            .expect("Failed to create first logbook");

        let workout = logbook
            .start_workout(&liftlog_core::params::StartWorkout::default())
            .await
            .expect("Failed to start workout");

        logbook
            .log_set(&liftlog_core::params::LogSet {
                exercise: "Deadlift".to_string(),
                weight: 180.0,
                reps: 3,
                rpe: Some(9.0),
                rir: Some(1),
                flags: vec!["pr".to_string()],
                ..Default::default()
            })
            .await
            .expect("Failed to log set");

        logbook
            .finish_workout()
            .await
            .expect("Failed to finish workout");
        workout.id
    };

    // A fresh logbook over the same journal sees identical values
    let logbook = LogbookBuilder::new()
        .with_journal_path(Some(journal_path))
        .build()
        .await
        .expect("Failed to create second logbook");

    let workout = logbook
        .get_workout(&liftlog_core::params::Id { id: workout_id })
        .await
        .expect("Failed to get workout")
        .expect("Workout should persist");

    assert_eq!(workout.exercises.len(), 1);
    let set = &workout.exercises[0].sets[0];
    assert_eq!(set.weight, 180.0);
    assert_eq!(set.reps, 3);
    assert_eq!(set.rpe, Some(9.0));
    assert_eq!(set.rir, Some(1));
    assert_eq!(set.flags, vec![SetFlag::PersonalRecord]);
    assert_eq!(workout.total_volume(), 540.0);
}

#[tokio::test]
async fn test_validation_errors_surface_to_caller() {
    let (_temp_dir, logbook) = common::create_test_logbook().await;

    logbook
        .start_workout(&liftlog_core::params::StartWorkout::default())
        .await
        .expect("Failed to start workout");

    // Negative weight is rejected at construction time
    let result = logbook
        .log_set(&liftlog_core::params::LogSet {
            exercise: "Bench Press".to_string(),
            weight: -5.0,
            reps: 10,
            ..Default::default()
        })
        .await;
    match result.unwrap_err() {
        LogbookError::Validation { field, .. } => assert_eq!(field, "weight"),
        other => panic!("Expected Validation error, got {other:?}"),
    }

    // Out-of-range RPE is rejected
    let result = logbook
        .log_set(&liftlog_core::params::LogSet {
            exercise: "Bench Press".to_string(),
            weight: 135.0,
            reps: 5,
            rpe: Some(11.0),
            ..Default::default()
        })
        .await;
    match result.unwrap_err() {
        LogbookError::Validation { field, .. } => assert_eq!(field, "rpe"),
        other => panic!("Expected Validation error, got {other:?}"),
    }

    // A valid set still goes through afterwards
    logbook
        .log_set(&liftlog_core::params::LogSet {
            exercise: "Bench Press".to_string(),
            weight: 135.0,
            reps: 5,
            rpe: Some(8.0),
            ..Default::default()
        })
        .await
        .expect("Valid set should be accepted");

    let active = logbook
        .active_workout()
        .await
        .expect("Failed to query active workout")
        .expect("Workout should be active");
    assert_eq!(active.total_sets(), 1);
}

#[tokio::test]
async fn test_second_start_rejected_while_active() {
    let (_temp_dir, logbook) = common::create_test_logbook().await;

    let first = logbook
        .start_workout(&liftlog_core::params::StartWorkout::default())
        .await
        .expect("Failed to start workout");

    let result = logbook
        .start_workout(&liftlog_core::params::StartWorkout::default())
        .await;
    match result.unwrap_err() {
        LogbookError::WorkoutAlreadyActive { id } => assert_eq!(id, first.id),
        other => panic!("Expected WorkoutAlreadyActive error, got {other:?}"),
    }
}
