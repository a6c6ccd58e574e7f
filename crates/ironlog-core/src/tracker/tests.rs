//! Tests for the tracker module.

use tempfile::TempDir;

use super::*;
use crate::params::{CreateExercise, Id, ListExercises, RenameWorkout, ReorderWorkouts, StartWorkout};
use crate::session::SessionStart;

/// Helper function to create a test tracker
async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn started(outcome: SessionStart) -> crate::models::Workout {
    match outcome {
        SessionStart::Started(workout) => workout,
        SessionStart::AlreadyOpen(open) => {
            panic!("Expected a new workout, found open workout {}", open.id)
        }
    }
}

#[tokio::test]
async fn test_start_session_creates_running_workout() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(
        tracker
            .start_session(&StartWorkout {
                name: Some("Push Day".to_string()),
                ..Default::default()
            })
            .await
            .expect("Failed to start session"),
    );

    assert_eq!(workout.name, "Push Day");
    assert!(workout.is_open());
    assert!(workout.timer.is_running());

    // The stored record agrees with what was returned.
    let loaded = tracker
        .get_workout(&Id { id: workout.id })
        .await
        .expect("Failed to load workout")
        .expect("Workout missing");
    assert!(loaded.timer.is_running());
    assert!(loaded.is_open());
}

#[tokio::test]
async fn test_second_start_reports_open_workout() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let first = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("Failed to start session"),
    );

    let outcome = tracker
        .start_session(&StartWorkout::default())
        .await
        .expect("Failed to call start_session");
    match outcome {
        SessionStart::AlreadyOpen(open) => assert_eq!(open.id, first.id),
        SessionStart::Started(_) => panic!("Guard should have refused a second open workout"),
    }
}

#[tokio::test]
async fn test_finish_open_starts_fresh_workout() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let first = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("Failed to start session"),
    );

    let second = started(
        tracker
            .start_session(&StartWorkout {
                finish_open: true,
                ..Default::default()
            })
            .await
            .expect("Failed to start second session"),
    );
    assert_ne!(first.id, second.id);

    let finished = tracker
        .get_workout(&Id { id: first.id })
        .await
        .expect("Failed to load workout")
        .expect("Workout missing");
    assert!(!finished.is_open());
    assert!(finished.timer.is_finished());
}

#[tokio::test]
async fn test_rename_and_list_workouts() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("Failed to start session"),
    );

    tracker
        .rename_workout(&RenameWorkout {
            id: workout.id,
            name: "Leg Day".to_string(),
        })
        .await
        .expect("Failed to rename workout");

    let summaries = tracker.list_workouts().await.expect("Failed to list");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "Leg Day");
    assert!(summaries[0].is_open());
    assert_eq!(summaries[0].total_sets, 0);
}

#[tokio::test]
async fn test_rename_missing_workout_is_not_found() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let err = tracker
        .rename_workout(&RenameWorkout {
            id: 999,
            name: "Ghost".to_string(),
        })
        .await
        .expect_err("Renaming a missing workout should fail");
    assert!(matches!(
        err,
        crate::TrackerError::WorkoutNotFound { id: 999 }
    ));
}

#[tokio::test]
async fn test_reorder_workouts_controls_list_order() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let a = started(
        tracker
            .start_session(&StartWorkout {
                name: Some("A".to_string()),
                ..Default::default()
            })
            .await
            .unwrap(),
    );
    let b = started(
        tracker
            .start_session(&StartWorkout {
                name: Some("B".to_string()),
                finish_open: true,
                ..Default::default()
            })
            .await
            .unwrap(),
    );

    tracker
        .reorder_workouts(&ReorderWorkouts {
            ids: vec![b.id, a.id],
        })
        .await
        .expect("Failed to reorder workouts");

    let names: Vec<String> = tracker
        .list_workouts()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["B".to_string(), "A".to_string()]);
}

#[tokio::test]
async fn test_delete_workout_cascades() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(tracker.start_session(&StartWorkout::default()).await.unwrap());
    let mut session = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("Failed to open session");
    session
        .add_exercise("Barbell Squat")
        .await
        .expect("Failed to add exercise");

    tracker
        .delete_workout(&Id { id: workout.id })
        .await
        .expect("Failed to delete workout");

    assert!(tracker
        .get_workout(&Id { id: workout.id })
        .await
        .unwrap()
        .is_none());
    assert!(tracker.list_workouts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_exercise_catalog_seeded_and_filterable() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let all = tracker
        .list_exercises(&ListExercises::default())
        .await
        .expect("Failed to list exercises");
    assert!(!all.is_empty());

    let legs = tracker
        .list_exercises(&ListExercises {
            muscle_group: Some("legs".to_string()),
        })
        .await
        .expect("Failed to filter exercises");
    assert!(!legs.is_empty());
    assert!(legs
        .iter()
        .all(|e| e.muscle_group == crate::models::MuscleGroup::Legs));
}

#[tokio::test]
async fn test_create_and_resolve_custom_exercise() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let created = tracker
        .create_exercise(&CreateExercise {
            name: "Face Pull".to_string(),
            muscle_group: Some("shoulders".to_string()),
            kind: None,
        })
        .await
        .expect("Failed to create exercise");
    assert!(created.is_custom);

    // By name, case-insensitively.
    let by_name = tracker
        .resolve_exercise("face pull")
        .await
        .expect("Failed to resolve by name");
    assert_eq!(by_name.id, created.id);

    // By numeric ID.
    let by_id = tracker
        .resolve_exercise(&created.id.to_string())
        .await
        .expect("Failed to resolve by id");
    assert_eq!(by_id.id, created.id);

    // Duplicate names are rejected.
    let err = tracker
        .create_exercise(&CreateExercise {
            name: "FACE PULL".to_string(),
            muscle_group: None,
            kind: None,
        })
        .await
        .expect_err("Duplicate exercise name should fail");
    assert!(matches!(err, crate::TrackerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_resolve_unknown_exercise_fails() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    assert!(tracker.resolve_exercise("Nonexistent Lift").await.is_err());
    assert!(matches!(
        tracker.resolve_exercise("99999").await,
        Err(crate::TrackerError::ExerciseNotFound { id: 99999 })
    ));
}
