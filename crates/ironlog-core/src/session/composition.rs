//! In-memory exercise and set composition for an active workout.
//!
//! The composition is the ordered view the user works against: exercises in
//! display order, each holding its sets numbered contiguously from 1. All
//! operations here are pure in-memory transforms; the session layer decides
//! when each change reaches storage.

use crate::error::{Result, TrackerError};
use crate::models::WorkoutSet;

/// One exercise's block of sets within a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseGroup {
    /// Exercise this block belongs to
    pub exercise_id: u64,
    /// Sets ordered by set number
    pub sets: Vec<WorkoutSet>,
}

/// Ordered exercise groups for one workout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    groups: Vec<ExerciseGroup>,
}

impl Composition {
    /// Builds the composition from a flat set list and the persisted
    /// exercise order.
    ///
    /// Exercises named by the order list come first, in that order; any
    /// exercise with sets but no order entry is appended in first-seen
    /// order. An exercise may appear with zero sets only via the order list,
    /// which preserves a just-added exercise across a reload.
    pub fn from_sets(sets: &[WorkoutSet], exercise_order: &[u64]) -> Self {
        let mut groups: Vec<ExerciseGroup> = exercise_order
            .iter()
            .map(|&exercise_id| ExerciseGroup {
                exercise_id,
                sets: Vec::new(),
            })
            .collect();

        for set in sets {
            if !groups.iter().any(|g| g.exercise_id == set.exercise_id) {
                groups.push(ExerciseGroup {
                    exercise_id: set.exercise_id,
                    sets: Vec::new(),
                });
            }
        }

        for group in &mut groups {
            group.sets = sets
                .iter()
                .filter(|s| s.exercise_id == group.exercise_id)
                .cloned()
                .collect();
            group.sets.sort_by_key(|s| s.set_number);
        }

        Self { groups }
    }

    /// Exercise IDs in display order.
    pub fn exercise_ids(&self) -> Vec<u64> {
        self.groups.iter().map(|g| g.exercise_id).collect()
    }

    /// Whether the workout contains the exercise.
    pub fn contains(&self, exercise_id: u64) -> bool {
        self.groups.iter().any(|g| g.exercise_id == exercise_id)
    }

    /// All groups, in display order.
    pub fn groups(&self) -> &[ExerciseGroup] {
        &self.groups
    }

    /// The group for an exercise, if present.
    pub fn group(&self, exercise_id: u64) -> Option<&ExerciseGroup> {
        self.groups.iter().find(|g| g.exercise_id == exercise_id)
    }

    /// Total number of sets across all exercises.
    pub fn set_count(&self) -> usize {
        self.groups.iter().map(|g| g.sets.len()).sum()
    }

    /// Appends an empty group for the exercise. Returns false without
    /// changing anything if the exercise is already present.
    pub fn add_exercise(&mut self, exercise_id: u64) -> bool {
        if self.contains(exercise_id) {
            return false;
        }
        self.groups.push(ExerciseGroup {
            exercise_id,
            sets: Vec::new(),
        });
        true
    }

    /// Removes an exercise and every one of its sets.
    pub fn remove_exercise(&mut self, exercise_id: u64) -> Option<ExerciseGroup> {
        let index = self
            .groups
            .iter()
            .position(|g| g.exercise_id == exercise_id)?;
        Some(self.groups.remove(index))
    }

    /// Builds the next set for an exercise: number = count + 1, weight
    /// defaulted from the last set, zero reps.
    ///
    /// The exercise must already be present. The returned set has no ID; the
    /// caller persists it and then inserts the stored form via
    /// [`Composition::push_set`].
    pub fn next_set(
        &self,
        workout_id: u64,
        exercise_id: u64,
        weight: Option<f64>,
        reps: Option<u32>,
        default_rest_seconds: u32,
    ) -> Result<WorkoutSet> {
        let group = self
            .group(exercise_id)
            .ok_or(TrackerError::ExerciseNotFound { id: exercise_id })?;

        let inherited_weight = group.sets.last().map(|s| s.weight).unwrap_or(0.0);
        let rest_seconds = group
            .sets
            .last()
            .map(|s| s.rest_seconds)
            .unwrap_or(default_rest_seconds);

        Ok(WorkoutSet {
            id: None,
            workout_id,
            exercise_id,
            set_number: group.sets.len() as u32 + 1,
            weight: weight.unwrap_or(inherited_weight),
            reps: reps.unwrap_or(0),
            rest_seconds,
            completed_at: None,
        })
    }

    /// Appends a persisted set to its exercise group.
    pub fn push_set(&mut self, set: WorkoutSet) -> Result<()> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.exercise_id == set.exercise_id)
            .ok_or(TrackerError::ExerciseNotFound {
                id: set.exercise_id,
            })?;
        group.sets.push(set);
        Ok(())
    }

    /// Mutable access to one set, addressed by exercise and set number.
    pub fn set_mut(&mut self, exercise_id: u64, set_number: u32) -> Option<&mut WorkoutSet> {
        self.groups
            .iter_mut()
            .find(|g| g.exercise_id == exercise_id)?
            .sets
            .iter_mut()
            .find(|s| s.set_number == set_number)
    }

    /// Immutable access to one set.
    pub fn set(&self, exercise_id: u64, set_number: u32) -> Option<&WorkoutSet> {
        self.group(exercise_id)?
            .sets
            .iter()
            .find(|s| s.set_number == set_number)
    }

    /// Removes a set and renumbers the survivors contiguously from 1.
    pub fn delete_set(&mut self, exercise_id: u64, set_number: u32) -> Option<WorkoutSet> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.exercise_id == exercise_id)?;
        let index = group.sets.iter().position(|s| s.set_number == set_number)?;
        let removed = group.sets.remove(index);
        Self::renumber(group);
        Some(removed)
    }

    /// Rearranges an exercise's sets into the order given by their current
    /// numbers, then renumbers from 1.
    ///
    /// `set_numbers` must be a permutation of the exercise's current
    /// numbering.
    pub fn reorder_sets(&mut self, exercise_id: u64, set_numbers: &[u32]) -> Result<()> {
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.exercise_id == exercise_id)
            .ok_or(TrackerError::ExerciseNotFound { id: exercise_id })?;

        let mut expected: Vec<u32> = group.sets.iter().map(|s| s.set_number).collect();
        expected.sort_unstable();
        let mut given = set_numbers.to_vec();
        given.sort_unstable();
        if expected != given {
            return Err(TrackerError::invalid_input("set_numbers").with_reason(format!(
                "Expected a permutation of the exercise's {} set numbers",
                expected.len()
            )));
        }

        let mut reordered = Vec::with_capacity(group.sets.len());
        for &number in set_numbers {
            let index = group
                .sets
                .iter()
                .position(|s| s.set_number == number)
                .ok_or_else(|| {
                    TrackerError::invalid_input("set_numbers")
                        .with_reason(format!("No set numbered {number}"))
                })?;
            reordered.push(group.sets.remove(index));
        }
        group.sets = reordered;
        Self::renumber(group);
        Ok(())
    }

    /// Rearranges exercises into the given order.
    ///
    /// `exercise_ids` must be a permutation of the current exercises.
    pub fn reorder_exercises(&mut self, exercise_ids: &[u64]) -> Result<()> {
        let mut expected = self.exercise_ids();
        expected.sort_unstable();
        let mut given = exercise_ids.to_vec();
        given.sort_unstable();
        if expected != given {
            return Err(TrackerError::invalid_input("exercise_ids").with_reason(format!(
                "Expected a permutation of the workout's {} exercises",
                expected.len()
            )));
        }

        let mut reordered = Vec::with_capacity(self.groups.len());
        for &exercise_id in exercise_ids {
            let index = self
                .groups
                .iter()
                .position(|g| g.exercise_id == exercise_id)
                .ok_or(TrackerError::ExerciseNotFound { id: exercise_id })?;
            reordered.push(self.groups.remove(index));
        }
        self.groups = reordered;
        Ok(())
    }

    /// Full (set id, set number) assignment for every persisted set, in the
    /// current in-memory order.
    ///
    /// This is what the reorder flush writes back; computing it from scratch
    /// every time is what makes the flush idempotent.
    pub fn numbering(&self) -> Vec<(u64, u32)> {
        self.groups
            .iter()
            .flat_map(|g| g.sets.iter())
            .filter_map(|s| s.id.map(|id| (id, s.set_number)))
            .collect()
    }

    /// All sets flattened in display order.
    pub fn all_sets(&self) -> Vec<WorkoutSet> {
        self.groups
            .iter()
            .flat_map(|g| g.sets.iter().cloned())
            .collect()
    }

    fn renumber(group: &mut ExerciseGroup) {
        for (index, set) in group.sets.iter_mut().enumerate() {
            set.set_number = index as u32 + 1;
        }
    }
}
