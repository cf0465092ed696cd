//! Command-line interface definitions using clap
//!
//! This module defines the CLI argument structures using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Logbook
//! ```
//!
//! Each command defines a wrapper struct with clap-specific attributes
//! (short/long flags, help text, value delimiters) and an explicit `From`
//! conversion into the corresponding `liftlog_core::params` type, so the
//! core stays free of CLI framework derives and every conversion is
//! verifiable at compile time. The [`Cli`] struct at the bottom drives the
//! logbook with the converted parameters and renders the results.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use jiff::tz::TimeZone;
use liftlog_core::{
    params::{ConfirmSet, Id, ListWorkouts, LogSet, StartWorkout},
    Logbook, OperationStatus,
};
use uuid::Uuid;

use crate::renderer::TerminalRenderer;

/// Start a new workout
///
/// Opens a workout that subsequent `set log` commands append to. Only one
/// workout may be in progress at a time; finish it before starting another.
#[derive(Args)]
pub struct StartWorkoutArgs {
    /// Free-form notes for the workout
    #[arg(short, long, help = "Optional notes recorded with the workout")]
    pub notes: Option<String>,
}

impl From<StartWorkoutArgs> for StartWorkout {
    fn from(val: StartWorkoutArgs) -> Self {
        StartWorkout { notes: val.notes }
    }
}

/// Show details of a specific workout
///
/// Displays the full workout including every exercise session, its sets,
/// the session top set, and the workout volume totals.
#[derive(Args)]
pub struct ShowWorkoutArgs {
    /// ID of the workout to display
    #[arg(help = "Unique identifier of the workout to show details for")]
    pub id: Uuid,
}

impl From<ShowWorkoutArgs> for Id {
    fn from(val: ShowWorkoutArgs) -> Self {
        Id { id: val.id }
    }
}

/// List recent workouts
///
/// Displays workout summaries most recent first, with exercise and set
/// counts, volume totals, and pending-set counts.
#[derive(Args)]
pub struct ListWorkoutsArgs {
    /// Maximum number of workouts to show
    #[arg(short, long, help = "Limit the list to the N most recent workouts")]
    pub limit: Option<usize>,
}

impl From<ListWorkoutsArgs> for ListWorkouts {
    fn from(val: ListWorkoutsArgs) -> Self {
        ListWorkouts { limit: val.limit }
    }
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Start a new workout
    #[command(alias = "s")]
    Start(StartWorkoutArgs),
    /// Finish the workout in progress
    #[command(alias = "f")]
    Finish,
    /// Show details of a specific workout
    Show(ShowWorkoutArgs),
    /// List recent workouts
    #[command(aliases = ["l", "ls"])]
    List(ListWorkoutsArgs),
}

/// Log a set against the workout in progress
///
/// The exercise name is matched against the built-in catalog
/// case-insensitively; unknown names create a custom exercise. Weight and
/// reps are required; everything else is optional detail.
#[derive(Args)]
pub struct LogSetArgs {
    /// Exercise name (e.g. "Bench Press")
    pub exercise: String,
    /// Weight moved
    #[arg(allow_negative_numbers = true)]
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Rated perceived exertion, 0 through 10
    #[arg(long, help = "Rated perceived exertion between 0 and 10")]
    pub rpe: Option<f64>,
    /// Estimated reps left in reserve
    #[arg(long, help = "Estimated repetitions left in reserve")]
    pub rir: Option<u32>,
    /// Mark the set as a warmup
    #[arg(short, long, help = "Record the set as a warmup")]
    pub warmup: bool,
    /// Mark the set as awaiting confirmation
    #[arg(short, long, help = "Record the set as pending confirmation")]
    pub pending: bool,
    /// Category for exercises not in the catalog
    #[arg(
        short,
        long,
        help = "Movement category used when the exercise is not in the catalog"
    )]
    pub category: Option<CategoryArg>,
    /// Qualitative flags - comma-separated list
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Flags (pr, failure, dropset, pauserep) as comma-separated list"
    )]
    pub flags: Vec<FlagArg>,
}

impl From<LogSetArgs> for LogSet {
    fn from(val: LogSetArgs) -> Self {
        LogSet {
            exercise: val.exercise,
            category: val.category.map(|c| c.to_string()),
            weight: val.weight,
            reps: val.reps,
            rpe: val.rpe,
            rir: val.rir,
            warmup: val.warmup,
            pending: val.pending,
            flags: val.flags.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Confirm a pending set
///
/// Clears the pending flag set when a set was logged with `--pending`,
/// marking the entry as verified by the user.
#[derive(Args)]
pub struct ConfirmSetArgs {
    /// ID of the set to confirm
    #[arg(help = "Unique identifier of the pending set to confirm")]
    pub id: Uuid,
}

impl From<ConfirmSetArgs> for ConfirmSet {
    fn from(val: ConfirmSetArgs) -> Self {
        ConfirmSet { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum SetCommands {
    /// Log a set against the workout in progress
    #[command(alias = "l")]
    Log(LogSetArgs),
    /// Confirm a pending set
    #[command(alias = "c")]
    Confirm(ConfirmSetArgs),
}

/// Command-line argument representation of movement categories
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum CategoryArg {
    Push,
    Pull,
    Legs,
    Core,
    Cardio,
    FullBody,
    Other,
}

impl std::fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryArg::Push => write!(f, "push"),
            CategoryArg::Pull => write!(f, "pull"),
            CategoryArg::Legs => write!(f, "legs"),
            CategoryArg::Core => write!(f, "core"),
            CategoryArg::Cardio => write!(f, "cardio"),
            CategoryArg::FullBody => write!(f, "fullbody"),
            CategoryArg::Other => write!(f, "other"),
        }
    }
}

/// Command-line argument representation of set flags
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum FlagArg {
    /// A new personal record
    Pr,
    /// The set ended in a failed rep
    Failure,
    /// Part of a drop set
    Dropset,
    /// Performed with paused reps
    Pauserep,
}

impl std::fmt::Display for FlagArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagArg::Pr => write!(f, "pr"),
            FlagArg::Failure => write!(f, "failure"),
            FlagArg::Dropset => write!(f, "dropset"),
            FlagArg::Pauserep => write!(f, "pauserep"),
        }
    }
}

/// Command dispatcher: converts CLI arguments to core parameters, drives
/// the logbook, and renders the results.
pub struct Cli {
    logbook: Logbook,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(logbook: Logbook, renderer: TerminalRenderer) -> Self {
        Self { logbook, renderer }
    }

    /// Dispatch a workout subcommand.
    pub async fn handle_workout_command(self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::Start(args) => {
                let result = self.logbook.start_workout_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            WorkoutCommands::Finish => {
                let result = self.logbook.finish_workout_result().await?;
                self.renderer.render(&result.to_string())
            }
            WorkoutCommands::Show(args) => {
                let params = args.into();
                match self.logbook.show_workout(&params).await? {
                    Some(workout) => self.renderer.render(&workout.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "Workout with ID {} not found.",
                            params.id
                        ))
                        .to_string(),
                    ),
                }
            }
            WorkoutCommands::List(args) => self.list_workouts(&args.into()).await,
        }
    }

    /// Dispatch a set subcommand.
    pub async fn handle_set_command(self, command: SetCommands) -> Result<()> {
        match command {
            SetCommands::Log(args) => {
                let (_, result) = self.logbook.log_set_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
            SetCommands::Confirm(args) => {
                let result = self.logbook.confirm_set_result(&args.into()).await?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    /// Render recent workouts as a summary list.
    pub async fn list_workouts(&self, params: &ListWorkouts) -> Result<()> {
        let summaries = self.logbook.list_workouts_summary(params).await?;
        self.renderer
            .render(&format!("# Recent Workouts\n\n{summaries}"))
    }

    /// Render the day-grouped workout history in the system time zone.
    pub async fn history(self) -> Result<()> {
        let history = self.logbook.history(TimeZone::system()).await?;
        self.renderer.render(&history.to_string())
    }

    /// Default view when no subcommand is given: the active workout, or
    /// the recent list when nothing is in progress.
    pub async fn default_view(self) -> Result<()> {
        match self.logbook.active_workout().await? {
            Some(workout) => self.renderer.render(&workout.to_string()),
            None => self.list_workouts(&ListWorkouts::default()).await,
        }
    }
}
