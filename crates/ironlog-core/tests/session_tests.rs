mod common;

use common::create_test_tracker;
use ironlog_core::{
    Database, Exercise, Id, SessionStart, StartWorkout, TrackerError, session::AddExerciseOutcome,
};
use jiff::{Timestamp, civil::date};

fn started(outcome: SessionStart) -> ironlog_core::Workout {
    match outcome {
        SessionStart::Started(workout) => workout,
        SessionStart::AlreadyOpen(workout) => {
            panic!("Expected a fresh session, found open workout {}", workout.id)
        }
    }
}

fn added(outcome: AddExerciseOutcome) -> Exercise {
    match outcome {
        AddExerciseOutcome::Added(exercise) => exercise,
        AddExerciseOutcome::AlreadyPresent(exercise) => {
            panic!("Exercise {} was already present", exercise.name)
        }
    }
}

#[tokio::test]
async fn test_fresh_session_lifecycle() {
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
    assert!(workout.timer.is_running());

    let mut session = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("Failed to open session");

    let bench = added(
        session
            .add_exercise("Barbell Bench Press")
            .await
            .expect("Failed to add exercise"),
    );

    // The exercise arrives with one placeholder set; fill and complete it,
    // then log a second one.
    session
        .complete_set(bench.id, 1, Some(60.0), Some(8))
        .await
        .expect("Failed to complete set");
    session
        .add_set(bench.id, None, Some(8))
        .await
        .expect("Failed to add set");
    session
        .complete_set(bench.id, 2, None, None)
        .await
        .expect("Failed to complete second set");

    let stats = session.stats();
    assert_eq!(stats.total_sets, 2);
    assert_eq!(stats.completed_sets, 2);
    assert_eq!(stats.exercise_count, 1);
    assert!((stats.total_volume - 960.0).abs() < f64::EPSILON);

    let timer = session.finish().await.expect("Failed to finish");
    assert!(timer.is_finished());

    let reloaded = tracker
        .get_workout(&Id { id: workout.id })
        .await
        .expect("query failed")
        .expect("workout should exist");
    assert!(!reloaded.is_open());
    assert!(
        tracker
            .find_open_workout()
            .await
            .expect("query failed")
            .is_none()
    );
}

#[tokio::test]
async fn test_edit_set_preserves_completion() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("Failed to start session"),
    );
    let mut session = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("Failed to open session");

    let bench = added(
        session
            .add_exercise("Barbell Bench Press")
            .await
            .expect("Failed to add exercise"),
    );
    let completed = session
        .complete_set(bench.id, 1, Some(60.0), Some(8))
        .await
        .expect("Failed to complete set");
    let completed_at = completed.completed_at.expect("set should be completed");

    // Correcting a typo in the logged weight must not reopen the set.
    session
        .edit_set(bench.id, 1, Some(62.5), None)
        .await
        .expect("Failed to edit set");

    let reloaded = tracker
        .get_workout(&Id { id: workout.id })
        .await
        .expect("query failed")
        .expect("workout should exist");
    let set = &reloaded.sets[0];
    assert!((set.weight - 62.5).abs() < f64::EPSILON);
    assert_eq!(set.reps, 8);
    assert_eq!(set.completed_at, Some(completed_at));
    assert!(set.is_completed());
}

#[tokio::test]
async fn test_interrupted_session_recovery() {
    let (temp_dir, tracker) = create_test_tracker().await;
    let db_path = temp_dir.path().join("test.db");

    // Stage a checkpoint with known timestamps: 30s banked before a pause,
    // then running again from t0+40s. The process then "dies".
    let workout_id = {
        let mut db = Database::new(&db_path).expect("Failed to open database");
        let workout = db
            .create_workout("Interrupted", date(2026, 3, 14))
            .expect("Failed to create workout");
        let t0 = Timestamp::from_second(1_773_000_000).unwrap();
        db.start_timer(workout.id, t0).expect("start");
        db.pause_timer(workout.id, Timestamp::from_second(1_773_000_030).unwrap())
            .expect("pause");
        db.start_timer(workout.id, Timestamp::from_second(1_773_000_040).unwrap())
            .expect("resume");
        workout.id
    };

    let session = tracker
        .open_session(&Id { id: workout_id })
        .await
        .expect("Failed to reopen session");

    assert!(session.workout().timer.is_running());
    let now = Timestamp::from_second(1_773_000_105).unwrap();
    assert_eq!(session.elapsed_ms(now), 95_000);

    // Reloading again from the same checkpoint must agree exactly.
    let again = tracker
        .open_session(&Id { id: workout_id })
        .await
        .expect("Failed to reopen session");
    assert_eq!(again.workout().timer, session.workout().timer);
}

#[tokio::test]
async fn test_exercise_removal_cascades() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("start"),
    );
    let mut session = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("open");

    let bench = added(session.add_exercise("Barbell Bench Press").await.expect("add"));
    let row = added(session.add_exercise("Barbell Row").await.expect("add"));
    session
        .add_set(row.id, Some(40.0), Some(10))
        .await
        .expect("add set");

    let removed = session.remove_exercise(bench.id).await.expect("remove");
    assert_eq!(removed, 1); // the placeholder set
    assert!(!session.composition().contains(bench.id));

    let reloaded = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("reopen");
    assert_eq!(reloaded.workout().exercise_order, vec![row.id]);
    assert!(
        reloaded
            .workout()
            .sets
            .iter()
            .all(|s| s.exercise_id == row.id)
    );

    let err = session.remove_exercise(bench.id).await.unwrap_err();
    assert!(matches!(err, TrackerError::ExerciseNotFound { .. }));
}

#[tokio::test]
async fn test_set_reorder_flushes_on_save() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("start"),
    );
    let mut session = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("open");

    let squat = added(session.add_exercise("Barbell Squat").await.expect("add"));
    session
        .edit_set(squat.id, 1, Some(60.0), None)
        .await
        .expect("edit");
    session
        .add_set(squat.id, Some(70.0), None)
        .await
        .expect("add");
    session
        .add_set(squat.id, Some(80.0), None)
        .await
        .expect("add");

    // Memory-only until saved.
    session.reorder_sets(squat.id, &[3, 1, 2]).expect("reorder");
    let before_save = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("reopen");
    let weights: Vec<f64> = before_save.workout().sets.iter().map(|s| s.weight).collect();
    assert_eq!(weights, vec![60.0, 70.0, 80.0]);

    session.save().await.expect("save");
    session.save().await.expect("second save");

    let reloaded = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("reopen");
    let group = reloaded
        .composition()
        .group(squat.id)
        .expect("group should exist");
    let weights: Vec<f64> = group.sets.iter().map(|s| s.weight).collect();
    let numbers: Vec<u32> = group.sets.iter().map(|s| s.set_number).collect();
    assert_eq!(weights, vec![80.0, 60.0, 70.0]);
    assert_eq!(numbers, vec![1, 2, 3]);

    // A permutation that doesn't cover every set is rejected.
    let err = session.reorder_sets(squat.id, &[1, 2]).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_reorder_exercises_persists() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("start"),
    );
    let mut session = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("open");

    let a = added(session.add_exercise("Barbell Bench Press").await.expect("add"));
    let b = added(session.add_exercise("Barbell Row").await.expect("add"));
    let c = added(session.add_exercise("Deadlift").await.expect("add"));

    session
        .reorder_exercises(&[c.id, a.id, b.id])
        .await
        .expect("reorder");

    let reloaded = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("reopen");
    assert_eq!(reloaded.workout().exercise_order, vec![c.id, a.id, b.id]);

    // Not a permutation: one exercise missing.
    let err = session.reorder_exercises(&[a.id, b.id]).await.unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
    assert_eq!(session.workout().exercise_order, vec![c.id, a.id, b.id]);
}

#[tokio::test]
async fn test_complete_set_starts_rest_countdown() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("start"),
    );
    let mut session = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("open");

    let bench = added(session.add_exercise("Barbell Bench Press").await.expect("add"));

    // Completing the unfilled placeholder is rejected before any write.
    let err = session.complete_set(bench.id, 1, None, None).await.unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
    assert!(session.rest().is_none());

    session
        .complete_set(bench.id, 1, Some(60.0), Some(8))
        .await
        .expect("complete");

    let rest = session.rest().expect("rest timer should be running");
    assert_eq!(rest.duration_seconds(), ironlog_core::DEFAULT_REST_SECONDS);

    session.skip_rest();
    assert!(session.rest().is_none());
}

#[tokio::test]
async fn test_add_set_inherits_previous_weight() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("start"),
    );
    let mut session = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("open");

    let bench = added(session.add_exercise("Barbell Bench Press").await.expect("add"));
    session
        .edit_set(bench.id, 1, Some(100.0), None)
        .await
        .expect("edit");

    let next = session.add_set(bench.id, None, None).await.expect("add");
    assert_eq!(next.set_number, 2);
    assert!((next.weight - 100.0).abs() < f64::EPSILON);
    assert_eq!(next.reps, 0);
    assert!(!next.is_completed());
}

#[tokio::test]
async fn test_pause_resume_roundtrip() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let workout = started(
        tracker
            .start_session(&StartWorkout::default())
            .await
            .expect("start"),
    );
    let mut session = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("open");

    let paused = session.pause().await.expect("pause");
    assert!(!paused.is_running());

    // Pausing twice is a state error, not a silent no-op.
    assert!(session.pause().await.is_err());

    let resumed = session.resume().await.expect("resume");
    assert!(resumed.is_running());

    // The persisted checkpoint matches what the session holds.
    let reloaded = tracker
        .open_session(&Id { id: workout.id })
        .await
        .expect("reopen");
    assert!(reloaded.workout().timer.is_running());
}
