//! Active workout session: the controller binding one workout, its exercise
//! composition, the workout timer, and the rest countdown to storage.
//!
//! All mutations follow a storage-first rule: the database write happens
//! before the in-memory state is replaced, so a failed write leaves the
//! session equal to the last durable state. Set reorders are the one
//! deliberate exception; they stay in memory until [`WorkoutSession::save`]
//! flushes the recomputed numbering wholesale.

use jiff::Timestamp;

use crate::error::{Result, TrackerError};
use crate::models::{Exercise, TimerState, Workout, WorkoutSet};
use crate::tracker::Tracker;

pub mod composition;
pub mod rest;
pub mod stats;

pub use composition::{Composition, ExerciseGroup};
pub use rest::RestTimer;
pub use stats::SessionStats;

/// Outcome of asking to start a workout while another may be open.
#[derive(Debug, Clone)]
pub enum SessionStart {
    /// A new workout was created and its timer started
    Started(Workout),
    /// An open workout already exists; nothing was created
    AlreadyOpen(Workout),
}

/// Outcome of adding an exercise to a session.
#[derive(Debug, Clone)]
pub enum AddExerciseOutcome {
    /// The exercise was added with one placeholder set
    Added(Exercise),
    /// The exercise was already part of the workout; nothing changed
    AlreadyPresent(Exercise),
}

/// An open workout being actively edited.
pub struct WorkoutSession {
    tracker: Tracker,
    workout: Workout,
    composition: Composition,
    rest: Option<RestTimer>,
}

impl WorkoutSession {
    pub(crate) fn new(tracker: Tracker, workout: Workout) -> Self {
        let composition = Composition::from_sets(&workout.sets, &workout.exercise_order);
        Self {
            tracker,
            workout,
            composition,
            rest: None,
        }
    }

    /// The underlying workout, sets included.
    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    /// The ordered exercise composition.
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Derived statistics for the current state.
    pub fn stats(&self) -> SessionStats {
        SessionStats::compute(&self.workout)
    }

    /// Elapsed active time as of `now`; pure, safe to poll every second.
    pub fn elapsed_ms(&self, now: Timestamp) -> u64 {
        self.workout.timer.elapsed_ms(now)
    }

    /// The rest countdown, if one is running.
    pub fn rest(&self) -> Option<&RestTimer> {
        self.rest.as_ref()
    }

    /// Dismisses the rest countdown.
    pub fn skip_rest(&mut self) {
        self.rest = None;
    }

    /// Pauses the workout timer.
    pub async fn pause(&mut self) -> Result<TimerState> {
        let state = self.tracker.pause_timer(self.workout.id).await?;
        self.workout.timer = state;
        Ok(state)
    }

    /// Resumes (or first starts) the workout timer.
    pub async fn resume(&mut self) -> Result<TimerState> {
        let state = self.tracker.resume_timer(self.workout.id).await?;
        self.workout.timer = state;
        Ok(state)
    }

    /// Finishes the workout: flushes pending reorders, freezes the timer,
    /// and stamps the completion time.
    pub async fn finish(&mut self) -> Result<TimerState> {
        self.save().await?;
        let (state, completed_at) = self.tracker.finish_workout_record(self.workout.id).await?;
        self.workout.timer = state;
        self.workout.completed_at = Some(completed_at);
        self.rest = None;
        Ok(state)
    }

    /// Adds an exercise (by ID or name) with one placeholder set.
    ///
    /// Adding an exercise that is already present changes nothing and
    /// reports it back instead of failing.
    pub async fn add_exercise(&mut self, exercise: &str) -> Result<AddExerciseOutcome> {
        let exercise = self.tracker.resolve_exercise(exercise).await?;
        if self.composition.contains(exercise.id) {
            return Ok(AddExerciseOutcome::AlreadyPresent(exercise));
        }

        let mut order = self.composition.exercise_ids();
        order.push(exercise.id);
        self.tracker
            .set_exercise_order(self.workout.id, order.clone())
            .await?;

        let seed = WorkoutSet {
            id: None,
            workout_id: self.workout.id,
            exercise_id: exercise.id,
            set_number: 1,
            weight: 0.0,
            reps: 0,
            rest_seconds: self.tracker.default_rest_seconds(),
            completed_at: None,
        };
        let stored = self.tracker.insert_set(seed).await?;

        self.composition.add_exercise(exercise.id);
        self.composition.push_set(stored)?;
        self.workout.exercise_order = order;
        self.sync_sets();
        Ok(AddExerciseOutcome::Added(exercise))
    }

    /// Removes an exercise and all of its sets. Returns the number of
    /// persisted sets removed.
    pub async fn remove_exercise(&mut self, exercise_id: u64) -> Result<usize> {
        if !self.composition.contains(exercise_id) {
            return Err(TrackerError::ExerciseNotFound { id: exercise_id });
        }

        let remaining: Vec<u64> = self
            .composition
            .exercise_ids()
            .into_iter()
            .filter(|&id| id != exercise_id)
            .collect();

        let removed = self
            .tracker
            .remove_exercise_sets(self.workout.id, exercise_id, remaining.clone())
            .await?;

        self.composition.remove_exercise(exercise_id);
        self.workout.exercise_order = remaining;
        self.sync_sets();
        Ok(removed)
    }

    /// Adds a set to an exercise. Weight defaults to the previous set's;
    /// reps default to zero.
    pub async fn add_set(
        &mut self,
        exercise_id: u64,
        weight: Option<f64>,
        reps: Option<u32>,
    ) -> Result<WorkoutSet> {
        let next = self.composition.next_set(
            self.workout.id,
            exercise_id,
            weight,
            reps,
            self.tracker.default_rest_seconds(),
        )?;
        let stored = self.tracker.insert_set(next).await?;
        self.composition.push_set(stored.clone())?;
        self.sync_sets();
        Ok(stored)
    }

    /// Edits a set's weight and reps; any completion timestamp is left
    /// untouched.
    pub async fn edit_set(
        &mut self,
        exercise_id: u64,
        set_number: u32,
        weight: Option<f64>,
        reps: Option<u32>,
    ) -> Result<WorkoutSet> {
        let (set_id, new_weight, new_reps) = {
            let set = self.find_set(exercise_id, set_number)?;
            (
                set.id.ok_or(TrackerError::SetNotFound {
                    id: u64::from(set_number),
                })?,
                weight.unwrap_or(set.weight),
                reps.unwrap_or(set.reps),
            )
        };

        self.tracker
            .update_set_values(set_id, new_weight, new_reps)
            .await?;

        let set = self
            .composition
            .set_mut(exercise_id, set_number)
            .ok_or(TrackerError::SetNotFound {
                id: u64::from(set_number),
            })?;
        set.weight = new_weight;
        set.reps = new_reps;
        let updated = set.clone();
        self.sync_sets();
        Ok(updated)
    }

    /// Completes a set and restarts the rest countdown.
    ///
    /// The effective rep count must be greater than zero; completing an
    /// unfilled placeholder is rejected without touching storage.
    pub async fn complete_set(
        &mut self,
        exercise_id: u64,
        set_number: u32,
        weight: Option<f64>,
        reps: Option<u32>,
    ) -> Result<WorkoutSet> {
        let (set_id, final_weight, final_reps, rest_seconds) = {
            let set = self.find_set(exercise_id, set_number)?;
            (
                set.id.ok_or(TrackerError::SetNotFound {
                    id: u64::from(set_number),
                })?,
                weight.unwrap_or(set.weight),
                reps.unwrap_or(set.reps),
                set.rest_seconds,
            )
        };

        if final_reps == 0 {
            return Err(TrackerError::invalid_input("reps")
                .with_reason("A completed set must have at least one rep"));
        }

        let now = Timestamp::now();
        self.tracker
            .complete_set_record(set_id, final_weight, final_reps, now)
            .await?;

        let set = self
            .composition
            .set_mut(exercise_id, set_number)
            .ok_or(TrackerError::SetNotFound {
                id: u64::from(set_number),
            })?;
        set.weight = final_weight;
        set.reps = final_reps;
        set.completed_at = Some(now);
        let completed = set.clone();

        self.rest = Some(RestTimer::start(rest_seconds, now));
        self.sync_sets();
        Ok(completed)
    }

    /// Deletes a set; the exercise's remaining sets are renumbered
    /// contiguously from 1, in storage and in memory.
    pub async fn delete_set(&mut self, exercise_id: u64, set_number: u32) -> Result<()> {
        let set_id = self
            .find_set(exercise_id, set_number)?
            .id
            .ok_or(TrackerError::SetNotFound {
                id: u64::from(set_number),
            })?;

        self.tracker.delete_set_record(set_id).await?;

        self.composition.delete_set(exercise_id, set_number);
        self.sync_sets();
        Ok(())
    }

    /// Reorders an exercise's sets in memory. The new numbering reaches
    /// storage on the next [`WorkoutSession::save`] or
    /// [`WorkoutSession::finish`].
    pub fn reorder_sets(&mut self, exercise_id: u64, set_numbers: &[u32]) -> Result<()> {
        self.composition.reorder_sets(exercise_id, set_numbers)?;
        self.sync_sets();
        Ok(())
    }

    /// Reorders the workout's exercises and persists the order list.
    pub async fn reorder_exercises(&mut self, exercise_ids: &[u64]) -> Result<()> {
        let mut reordered = self.composition.clone();
        reordered.reorder_exercises(exercise_ids)?;

        self.tracker
            .set_exercise_order(self.workout.id, reordered.exercise_ids())
            .await?;

        self.workout.exercise_order = reordered.exercise_ids();
        self.composition = reordered;
        self.sync_sets();
        Ok(())
    }

    /// Flushes deferred state: recomputes every set number and the exercise
    /// order from memory and overwrites storage with them.
    ///
    /// Recompute-and-overwrite makes this idempotent; calling it with
    /// nothing pending rewrites the same values.
    pub async fn save(&mut self) -> Result<()> {
        let numbering = self.composition.numbering();
        if !numbering.is_empty() {
            self.tracker.renumber_sets(numbering).await?;
        }
        let order = self.composition.exercise_ids();
        self.tracker
            .set_exercise_order(self.workout.id, order.clone())
            .await?;
        self.workout.exercise_order = order;
        Ok(())
    }

    fn find_set(&self, exercise_id: u64, set_number: u32) -> Result<&WorkoutSet> {
        if !self.composition.contains(exercise_id) {
            return Err(TrackerError::ExerciseNotFound { id: exercise_id });
        }
        self.composition
            .set(exercise_id, set_number)
            .ok_or(TrackerError::SetNotFound {
                id: u64::from(set_number),
            })
    }

    fn sync_sets(&mut self) {
        self.workout.sets = self.composition.all_sets();
    }
}
