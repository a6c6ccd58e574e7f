#[cfg(test)]
mod model_tests {
    use jiff::civil::date;
    use jiff::Timestamp;

    use crate::models::{
        Exercise, ExerciseKind, MuscleGroup, TimerState, Workout, WorkoutSet, WorkoutSummary,
    };

    fn create_test_set(set_number: u32, weight: f64, reps: u32, completed: bool) -> WorkoutSet {
        WorkoutSet {
            id: Some(u64::from(set_number)),
            workout_id: 1,
            exercise_id: 7,
            set_number,
            weight,
            reps,
            rest_seconds: 90,
            completed_at: if completed {
                Some(Timestamp::from_second(1_640_995_200).unwrap())
            } else {
                None
            },
        }
    }

    fn create_test_workout() -> Workout {
        Workout {
            id: 1,
            name: "Push Day".to_string(),
            date: date(2022, 1, 1),
            started_at: Timestamp::from_second(1_640_995_200).unwrap(),
            completed_at: None,
            notes: None,
            sort_order: None,
            exercise_order: vec![7],
            timer: TimerState::Stopped,
            sets: vec![
                create_test_set(1, 60.0, 8, true),
                create_test_set(2, 62.5, 6, true),
                create_test_set(3, 62.5, 0, false),
            ],
        }
    }

    #[test]
    fn test_set_completion_requires_reps_and_timestamp() {
        let completed = create_test_set(1, 60.0, 8, true);
        assert!(completed.is_completed());

        let no_timestamp = create_test_set(1, 60.0, 8, false);
        assert!(!no_timestamp.is_completed());

        let mut zero_reps = create_test_set(1, 60.0, 0, true);
        zero_reps.reps = 0;
        assert!(!zero_reps.is_completed());
    }

    #[test]
    fn test_set_volume_zero_unless_completed() {
        assert_eq!(create_test_set(1, 60.0, 8, true).volume(), 480.0);
        assert_eq!(create_test_set(1, 60.0, 8, false).volume(), 0.0);
    }

    #[test]
    fn test_bodyweight_set_is_valid() {
        let set = create_test_set(1, 0.0, 12, true);
        assert!(set.is_completed());
        assert_eq!(set.volume(), 0.0);
    }

    #[test]
    fn test_workout_summary_from_workout() {
        let workout = create_test_workout();
        let summary = WorkoutSummary::from(&workout);

        assert_eq!(summary.total_sets, 3);
        assert_eq!(summary.completed_sets, 2);
        assert_eq!(summary.total_volume, 60.0 * 8.0 + 62.5 * 6.0);
        assert_eq!(summary.exercise_count, 1);
        assert!(summary.is_open());
        assert_eq!(summary.duration_minutes, None);
    }

    #[test]
    fn test_finished_duration_uses_timer_total() {
        let mut workout = create_test_workout();
        workout.completed_at = Some(Timestamp::from_second(1_641_000_000).unwrap());
        workout.timer = TimerState::Finished {
            accumulated_ms: 45 * 60_000,
        };
        assert_eq!(workout.duration_minutes(), Some(45));
    }

    #[test]
    fn test_legacy_duration_falls_back_to_wall_clock() {
        let mut workout = create_test_workout();
        // 30 minutes of wall-clock time, no timer data.
        workout.completed_at = Some(Timestamp::from_second(1_640_995_200 + 1800).unwrap());
        workout.timer = TimerState::Finished { accumulated_ms: 0 };
        assert_eq!(workout.duration_minutes(), Some(30));
    }

    #[test]
    fn test_exercise_ids_deduplicated_in_first_seen_order() {
        let mut workout = create_test_workout();
        let mut other = create_test_set(1, 100.0, 5, true);
        other.exercise_id = 3;
        workout.sets.insert(1, other);

        assert_eq!(workout.exercise_ids_in_set_order(), vec![7, 3]);
    }

    #[test]
    fn test_muscle_group_round_trip() {
        for group in [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Legs,
            MuscleGroup::Abs,
            MuscleGroup::Cardio,
            MuscleGroup::Other,
        ] {
            assert_eq!(group.as_str().parse::<MuscleGroup>().unwrap(), group);
        }
        assert!("torso".parse::<MuscleGroup>().is_err());
    }

    #[test]
    fn test_builtin_catalog_is_well_formed() {
        let catalog = crate::models::exercise::builtin_catalog();
        assert!(!catalog.is_empty());
        // No duplicate names; cardio entries carry the cardio kind.
        for (i, (name, group, kind)) in catalog.iter().enumerate() {
            assert!(catalog[i + 1..].iter().all(|(n, _, _)| n != name));
            if *group == MuscleGroup::Cardio {
                assert_eq!(*kind, ExerciseKind::Cardio);
            }
        }
    }

    #[test]
    fn test_exercise_serialization_uses_lowercase_tags() {
        let exercise = Exercise {
            id: 1,
            name: "Barbell Squat".to_string(),
            muscle_group: MuscleGroup::Legs,
            kind: ExerciseKind::Strength,
            is_custom: false,
            created_at: Timestamp::from_second(1_640_995_200).unwrap(),
        };
        let json = serde_json::to_string(&exercise).unwrap();
        assert!(json.contains("\"muscle_group\":\"legs\""));
        assert!(json.contains("\"kind\":\"strength\""));
    }
}
