//! Command-line interface definitions and handlers
//!
//! This module defines the subcommand structure using clap's derive API and
//! the handler that executes each command against the core tracker. It
//! implements the parameter wrapper pattern for clean separation between CLI
//! framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument struct with clap derives and
//! converts it into the framework-free parameter types from
//! [`ironlog_core::params`]. Clap handles parsing and help text; input
//! validation (dates, muscle groups, rep counts) stays in the core so every
//! interface shares one set of error messages.
//!
//! Commands that operate on sets or a workout's exercises accept an optional
//! `--workout <ID>`; when omitted they target the currently open workout.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use ironlog_core::{
    Tracker,
    display::{
        CreateResult, DeleteResult, ElapsedTime, Exercises, OperationStatus, TimerDisplay,
        UpdateResult, WorkoutDetail, WorkoutSummaries, format_weight,
    },
    models::Workout,
    params::{
        AddSet, CompleteSet, CreateExercise, EditSet, Id, ListExercises, RenameWorkout,
        ReorderWorkouts, SetRef, StartWorkout, UpdateNotes,
    },
    session::{AddExerciseOutcome, SessionStart, WorkoutSession},
};
use jiff::Timestamp;
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Workout commands
// ============================================================================

/// Start a new workout session
///
/// Refuses to start while another workout is open, so there is never more
/// than one session being logged at a time. Pass --finish-open to close the
/// open workout and start fresh in one step.
#[derive(Args)]
pub struct StartWorkoutArgs {
    /// Name for the workout (defaults to "Workout")
    pub name: Option<String>,
    /// Calendar day for the workout in YYYY-MM-DD form (defaults to today)
    #[arg(long, help = "Calendar day for the workout (YYYY-MM-DD, default today)")]
    pub date: Option<String>,
    /// Finish the currently open workout instead of refusing to start
    #[arg(long)]
    pub finish_open: bool,
}

impl From<StartWorkoutArgs> for StartWorkout {
    fn from(val: StartWorkoutArgs) -> Self {
        StartWorkout {
            name: val.name,
            date: val.date,
            finish_open: val.finish_open,
        }
    }
}

/// Show details of a workout
///
/// Displays the workout's metadata, stopwatch reading and every exercise
/// with its sets. Without an ID the currently open workout is shown.
#[derive(Args)]
pub struct ShowWorkoutArgs {
    /// ID of the workout to display (defaults to the open workout)
    pub id: Option<u64>,
    /// Keep redrawing the stopwatch once a second until interrupted
    #[arg(long)]
    pub watch: bool,
}

/// Target a workout by ID, or the open one when omitted
#[derive(Args)]
pub struct TargetWorkoutArgs {
    /// Workout ID (defaults to the open workout)
    pub id: Option<u64>,
}

/// Rename a workout
#[derive(Args)]
pub struct RenameWorkoutArgs {
    /// ID of the workout to rename
    pub id: u64,
    /// New name for the workout
    pub name: String,
}

impl From<RenameWorkoutArgs> for RenameWorkout {
    fn from(val: RenameWorkoutArgs) -> Self {
        RenameWorkout {
            id: val.id,
            name: val.name,
        }
    }
}

/// Replace a workout's notes
#[derive(Args)]
pub struct NotesArgs {
    /// ID of the workout to annotate
    pub id: u64,
    /// The notes text; omit to clear existing notes
    pub notes: Option<String>,
}

impl From<NotesArgs> for UpdateNotes {
    fn from(val: NotesArgs) -> Self {
        UpdateNotes {
            id: val.id,
            notes: val.notes,
        }
    }
}

/// Delete a workout permanently
#[derive(Args)]
pub struct DeleteWorkoutArgs {
    /// ID of the workout to permanently delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Assign an explicit display order to workouts
#[derive(Args)]
pub struct ReorderWorkoutsArgs {
    /// Workout IDs in their new display order
    #[arg(required = true)]
    pub ids: Vec<u64>,
}

impl From<ReorderWorkoutsArgs> for ReorderWorkouts {
    fn from(val: ReorderWorkoutsArgs) -> Self {
        ReorderWorkouts { ids: val.ids }
    }
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Start a new workout session
    #[command(alias = "st")]
    Start(StartWorkoutArgs),
    /// List all workouts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a workout
    #[command(alias = "s")]
    Show(ShowWorkoutArgs),
    /// Pause the workout stopwatch
    #[command(alias = "p")]
    Pause(TargetWorkoutArgs),
    /// Resume a paused workout stopwatch
    #[command(alias = "r")]
    Resume(TargetWorkoutArgs),
    /// Finish a workout, stopping the stopwatch for good
    #[command(alias = "f")]
    Finish(TargetWorkoutArgs),
    /// Rename a workout
    Rename(RenameWorkoutArgs),
    /// Replace a workout's notes
    Notes(NotesArgs),
    /// Delete a workout permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteWorkoutArgs),
    /// Assign an explicit display order to workouts
    Reorder(ReorderWorkoutsArgs),
}

// ============================================================================
// Exercise commands
// ============================================================================

/// List the exercise catalog
#[derive(Args)]
pub struct ListExercisesArgs {
    /// Only show exercises for one muscle group
    #[arg(
        long,
        help = "Filter by muscle group (chest, back, shoulders, biceps, triceps, legs, abs, cardio, other)"
    )]
    pub muscle_group: Option<String>,
}

impl From<ListExercisesArgs> for ListExercises {
    fn from(val: ListExercisesArgs) -> Self {
        ListExercises {
            muscle_group: val.muscle_group,
        }
    }
}

/// Add a custom exercise to the catalog
#[derive(Args)]
pub struct CreateExerciseArgs {
    /// Name of the exercise
    pub name: String,
    /// Muscle group the exercise targets (defaults to "other")
    #[arg(long)]
    pub muscle_group: Option<String>,
    /// Kind of exercise: "strength" or "cardio" (defaults to "strength")
    #[arg(long)]
    pub kind: Option<String>,
}

impl From<CreateExerciseArgs> for CreateExercise {
    fn from(val: CreateExerciseArgs) -> Self {
        CreateExercise {
            name: val.name,
            muscle_group: val.muscle_group,
            kind: val.kind,
        }
    }
}

/// Add an exercise to a workout
///
/// The exercise may be given by catalog ID or by (case-insensitive) name.
/// It arrives with one empty placeholder set ready to be filled in.
#[derive(Args)]
pub struct AddExerciseArgs {
    /// Exercise ID or name
    pub exercise: String,
    /// Workout ID (defaults to the open workout)
    #[arg(long)]
    pub workout: Option<u64>,
}

/// Remove an exercise and all of its sets from a workout
#[derive(Args)]
pub struct RemoveExerciseArgs {
    /// Exercise ID or name
    pub exercise: String,
    /// Workout ID (defaults to the open workout)
    #[arg(long)]
    pub workout: Option<u64>,
}

/// Rearrange the exercises within a workout
#[derive(Args)]
pub struct OrderExercisesArgs {
    /// Exercise IDs in their new order; must cover every exercise in the
    /// workout exactly once
    #[arg(required = true)]
    pub exercise_ids: Vec<u64>,
    /// Workout ID (defaults to the open workout)
    #[arg(long)]
    pub workout: Option<u64>,
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// List the exercise catalog
    #[command(aliases = ["l", "ls"])]
    List(ListExercisesArgs),
    /// Add a custom exercise to the catalog
    #[command(alias = "c")]
    Create(CreateExerciseArgs),
    /// Add an exercise to a workout
    #[command(alias = "a")]
    Add(AddExerciseArgs),
    /// Remove an exercise and all of its sets from a workout
    #[command(alias = "rm")]
    Remove(RemoveExerciseArgs),
    /// Rearrange the exercises within a workout
    #[command(alias = "o")]
    Order(OrderExercisesArgs),
}

// ============================================================================
// Set commands
// ============================================================================

/// Add a set to an exercise
///
/// Without --weight the new set inherits the previous set's weight, which
/// covers the common straight-sets case with no typing.
#[derive(Args)]
pub struct AddSetArgs {
    /// Exercise ID or name
    pub exercise: String,
    /// Weight in kilograms (defaults to the previous set's weight)
    #[arg(short, long)]
    pub weight: Option<f64>,
    /// Rep count (defaults to 0, a placeholder to fill in later)
    #[arg(short, long)]
    pub reps: Option<u32>,
    /// Workout ID (defaults to the open workout)
    #[arg(long)]
    pub workout: Option<u64>,
}

impl AddSetArgs {
    fn into_params(self, workout_id: u64, exercise_id: u64) -> AddSet {
        AddSet {
            workout_id,
            exercise_id,
            weight: self.weight,
            reps: self.reps,
        }
    }
}

/// Edit a set's weight or reps
#[derive(Args)]
pub struct EditSetArgs {
    /// Exercise ID or name
    pub exercise: String,
    /// 1-based set number within the exercise
    pub number: u32,
    /// New weight in kilograms
    #[arg(short, long)]
    pub weight: Option<f64>,
    /// New rep count
    #[arg(short, long)]
    pub reps: Option<u32>,
    /// Workout ID (defaults to the open workout)
    #[arg(long)]
    pub workout: Option<u64>,
}

impl EditSetArgs {
    fn into_params(self, workout_id: u64, exercise_id: u64) -> EditSet {
        EditSet {
            set: SetRef {
                workout_id,
                exercise_id,
                set_number: self.number,
            },
            weight: self.weight,
            reps: self.reps,
        }
    }
}

/// Mark a set as completed
///
/// Completing a set stamps it with the current time and starts the rest
/// countdown. Weight and reps may be corrected inline; otherwise the stored
/// values are used.
#[derive(Args)]
pub struct CompleteSetArgs {
    /// Exercise ID or name
    pub exercise: String,
    /// 1-based set number within the exercise
    pub number: u32,
    /// Final weight in kilograms, if different from the stored value
    #[arg(short, long)]
    pub weight: Option<f64>,
    /// Final rep count, if different from the stored value
    #[arg(short, long)]
    pub reps: Option<u32>,
    /// Workout ID (defaults to the open workout)
    #[arg(long)]
    pub workout: Option<u64>,
}

impl CompleteSetArgs {
    fn into_params(self, workout_id: u64, exercise_id: u64) -> CompleteSet {
        CompleteSet {
            set: SetRef {
                workout_id,
                exercise_id,
                set_number: self.number,
            },
            weight: self.weight,
            reps: self.reps,
        }
    }
}

/// Delete a set from an exercise
#[derive(Args)]
pub struct DeleteSetArgs {
    /// Exercise ID or name
    pub exercise: String,
    /// 1-based set number within the exercise
    pub number: u32,
    /// Workout ID (defaults to the open workout)
    #[arg(long)]
    pub workout: Option<u64>,
}

/// Rearrange the sets of one exercise
#[derive(Args)]
pub struct OrderSetsArgs {
    /// Exercise ID or name
    pub exercise: String,
    /// Current set numbers in their new order; must cover every set of the
    /// exercise exactly once
    #[arg(required = true)]
    pub numbers: Vec<u32>,
    /// Workout ID (defaults to the open workout)
    #[arg(long)]
    pub workout: Option<u64>,
}

#[derive(Subcommand)]
pub enum SetCommands {
    /// Add a set to an exercise
    #[command(alias = "a")]
    Add(AddSetArgs),
    /// Edit a set's weight or reps
    #[command(alias = "e")]
    Edit(EditSetArgs),
    /// Mark a set as completed
    #[command(aliases = ["c", "done"])]
    Complete(CompleteSetArgs),
    /// Delete a set from an exercise
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteSetArgs),
    /// Rearrange the sets of one exercise
    #[command(alias = "o")]
    Order(OrderSetsArgs),
}

// ============================================================================
// Command handler
// ============================================================================

/// Executes parsed commands against the tracker and renders the results.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command handler.
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Open a session for the given workout ID, or for the currently open
    /// workout when no ID was given.
    async fn open_target(&self, id: Option<u64>) -> Result<WorkoutSession> {
        match id {
            Some(id) => Ok(self.tracker.open_session(&Id { id }).await?),
            None => self
                .tracker
                .open_current_session()
                .await?
                .context("No open workout. Start one with `ironlog workout start`."),
        }
    }

    /// Fetch a workout by ID, or the currently open one when no ID was given.
    async fn fetch_target(&self, id: Option<u64>) -> Result<Workout> {
        match id {
            Some(id) => self
                .tracker
                .get_workout(&Id { id })
                .await?
                .with_context(|| format!("Workout {id} not found")),
            None => self
                .tracker
                .find_open_workout()
                .await?
                .context("No open workout. Start one with `ironlog workout start`."),
        }
    }

    async fn resolve_exercise(&self, exercise: &str) -> Result<ironlog_core::Exercise> {
        Ok(self.tracker.resolve_exercise(exercise).await?)
    }

    /// List all workouts; this is also the default action with no command.
    pub async fn list_workouts(&self) -> Result<()> {
        let summaries = self.tracker.list_workouts().await?;
        self.renderer
            .render(&format!("# Workouts\n\n{}", WorkoutSummaries(summaries)))
    }

    pub async fn handle_workout_command(&self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::Start(args) => {
                debug!("Starting workout session");
                match self.tracker.start_session(&args.into()).await? {
                    SessionStart::Started(workout) => {
                        self.renderer.render(&CreateResult::new(workout).to_string())
                    }
                    SessionStart::AlreadyOpen(workout) => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Workout {} ('{}') is still open. Finish it first or pass --finish-open.",
                            workout.id, workout.name
                        ))
                        .to_string(),
                    ),
                }
            }
            WorkoutCommands::List => self.list_workouts().await,
            WorkoutCommands::Show(args) => self.show_workout(args).await,
            WorkoutCommands::Pause(args) => {
                let mut session = self.open_target(args.id).await?;
                session.pause().await?;
                let elapsed = ElapsedTime(session.elapsed_ms(Timestamp::now()));
                self.renderer.render(
                    &OperationStatus::success(format!("Workout paused at {elapsed}")).to_string(),
                )
            }
            WorkoutCommands::Resume(args) => {
                let mut session = self.open_target(args.id).await?;
                session.resume().await?;
                let elapsed = ElapsedTime(session.elapsed_ms(Timestamp::now()));
                self.renderer.render(
                    &OperationStatus::success(format!("Workout resumed at {elapsed}")).to_string(),
                )
            }
            WorkoutCommands::Finish(args) => {
                let mut session = self.open_target(args.id).await?;
                session.finish().await?;
                let stats = session.stats();
                let workout = session.workout();
                let mut output = format!(
                    "Finished workout '{}' (ID: {})\n\n",
                    workout.name, workout.id
                );
                if let Some(minutes) = stats.duration_minutes {
                    output.push_str(&format!("- Duration: {minutes} min\n"));
                }
                output.push_str(&format!(
                    "- Sets: {} completed of {}\n- Volume: {} kg\n",
                    stats.completed_sets,
                    stats.total_sets,
                    format_weight(stats.total_volume)
                ));
                self.renderer.render(&output)
            }
            WorkoutCommands::Rename(args) => {
                let params: RenameWorkout = args.into();
                self.tracker.rename_workout(&params).await?;
                let workout = self.fetch_target(Some(params.id)).await?;
                let changes = vec![format!("Renamed to '{}'", params.name)];
                self.renderer
                    .render(&UpdateResult::with_changes(workout, changes).to_string())
            }
            WorkoutCommands::Notes(args) => {
                let params: UpdateNotes = args.into();
                let change = if params.notes.is_some() {
                    "Updated notes"
                } else {
                    "Cleared notes"
                };
                self.tracker.update_notes(&params).await?;
                let workout = self.fetch_target(Some(params.id)).await?;
                self.renderer.render(
                    &UpdateResult::with_changes(workout, vec![change.to_string()]).to_string(),
                )
            }
            WorkoutCommands::Delete(args) => {
                if !args.confirm {
                    bail!("Deletion requires --confirm");
                }
                let workout = self.fetch_target(Some(args.id)).await?;
                self.tracker.delete_workout(&Id { id: args.id }).await?;
                self.renderer.render(&DeleteResult::new(workout).to_string())
            }
            WorkoutCommands::Reorder(args) => {
                self.tracker.reorder_workouts(&args.into()).await?;
                self.list_workouts().await
            }
        }
    }

    async fn show_workout(&self, args: ShowWorkoutArgs) -> Result<()> {
        let workout = self.fetch_target(args.id).await?;
        let exercises = self.tracker.list_exercises(&ListExercises::default()).await?;
        self.renderer
            .render(&WorkoutDetail::new(&workout, &exercises).to_string())?;

        if workout.is_open() {
            let timer = TimerDisplay {
                workout: &workout,
                now: Timestamp::now(),
            };
            self.renderer.render(&format!("\nStopwatch: {timer}"))?;
        }

        if args.watch && workout.timer.is_running() {
            self.watch_timer(&workout).await?;
        }
        Ok(())
    }

    /// Redraw the stopwatch once a second until Ctrl-C.
    async fn watch_timer(&self, workout: &Workout) -> Result<()> {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let timer = TimerDisplay { workout, now: Timestamp::now() };
                    print!("\r{timer}    ");
                    std::io::stdout().flush()?;
                }
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    return Ok(());
                }
            }
        }
    }

    pub async fn handle_exercise_command(&self, command: ExerciseCommands) -> Result<()> {
        match command {
            ExerciseCommands::List(args) => {
                let exercises = self.tracker.list_exercises(&args.into()).await?;
                self.renderer
                    .render(&format!("# Exercises\n\n{}", Exercises(exercises)))
            }
            ExerciseCommands::Create(args) => {
                let exercise = self.tracker.create_exercise(&args.into()).await?;
                self.renderer.render(&CreateResult::new(exercise).to_string())
            }
            ExerciseCommands::Add(args) => {
                let mut session = self.open_target(args.workout).await?;
                match session.add_exercise(&args.exercise).await? {
                    AddExerciseOutcome::Added(exercise) => self.renderer.render(
                        &OperationStatus::success(format!(
                            "Added {} to workout {}",
                            exercise.name,
                            session.workout().id
                        ))
                        .to_string(),
                    ),
                    AddExerciseOutcome::AlreadyPresent(exercise) => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "{} is already in this workout",
                            exercise.name
                        ))
                        .to_string(),
                    ),
                }
            }
            ExerciseCommands::Remove(args) => {
                let mut session = self.open_target(args.workout).await?;
                let exercise = self.resolve_exercise(&args.exercise).await?;
                let removed = session.remove_exercise(exercise.id).await?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Removed {} and {removed} of its sets",
                        exercise.name
                    ))
                    .to_string(),
                )
            }
            ExerciseCommands::Order(args) => {
                let mut session = self.open_target(args.workout).await?;
                session.reorder_exercises(&args.exercise_ids).await?;
                self.renderer.render(
                    &OperationStatus::success("Exercises reordered".to_string()).to_string(),
                )
            }
        }
    }

    pub async fn handle_set_command(&self, command: SetCommands) -> Result<()> {
        match command {
            SetCommands::Add(args) => {
                let mut session = self.open_target(args.workout).await?;
                let exercise = self.resolve_exercise(&args.exercise).await?;
                let params = args.into_params(session.workout().id, exercise.id);
                params.validate()?;
                let set = session
                    .add_set(params.exercise_id, params.weight, params.reps)
                    .await?;
                self.renderer.render(&CreateResult::new(set).to_string())
            }
            SetCommands::Edit(args) => {
                let mut session = self.open_target(args.workout).await?;
                let exercise = self.resolve_exercise(&args.exercise).await?;
                let params = args.into_params(session.workout().id, exercise.id);
                params.validate()?;
                let set = session
                    .edit_set(
                        params.set.exercise_id,
                        params.set.set_number,
                        params.weight,
                        params.reps,
                    )
                    .await?;
                self.renderer
                    .render(&UpdateResult::new(set).to_string())
            }
            SetCommands::Complete(args) => {
                let mut session = self.open_target(args.workout).await?;
                let exercise = self.resolve_exercise(&args.exercise).await?;
                let params = args.into_params(session.workout().id, exercise.id);
                params.validate()?;
                let set = session
                    .complete_set(
                        params.set.exercise_id,
                        params.set.set_number,
                        params.weight,
                        params.reps,
                    )
                    .await?;
                let mut message = format!(
                    "Completed set {} of {}: {} kg × {}",
                    set.set_number,
                    exercise.name,
                    format_weight(set.weight),
                    set.reps
                );
                if let Some(rest) = session.rest() {
                    message.push_str(&format!(". Rest {}s", rest.duration_seconds()));
                }
                self.renderer
                    .render(&OperationStatus::success(message).to_string())
            }
            SetCommands::Delete(args) => {
                let mut session = self.open_target(args.workout).await?;
                let exercise = self.resolve_exercise(&args.exercise).await?;
                session.delete_set(exercise.id, args.number).await?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Deleted set {} of {}; remaining sets renumbered",
                        args.number, exercise.name
                    ))
                    .to_string(),
                )
            }
            SetCommands::Order(args) => {
                let mut session = self.open_target(args.workout).await?;
                let exercise = self.resolve_exercise(&args.exercise).await?;
                session.reorder_sets(exercise.id, &args.numbers)?;
                session.save().await?;
                self.renderer.render(
                    &OperationStatus::success(format!("Sets of {} reordered", exercise.name))
                        .to_string(),
                )
            }
        }
    }
}
