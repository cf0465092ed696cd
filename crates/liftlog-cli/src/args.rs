use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{SetCommands, WorkoutCommands};

/// Main command-line interface for the liftlog workout tracking tool
///
/// Liftlog records strength training sessions as workouts made of exercise
/// sessions and sets, keeps the history in a local JSON journal, and derives
/// the aggregate numbers (volume totals, top sets, day-grouped history) that
/// the commands display.
#[derive(Parser)]
#[command(version, about, name = "liftlog")]
pub struct Args {
    /// Path to the journal file. Defaults to
    /// $XDG_DATA_HOME/liftlog/journal.json
    #[arg(long, global = true)]
    pub journal_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the liftlog CLI
///
/// The CLI is organized into three main command categories:
/// - `workout`: Start, finish, show, and list workouts
/// - `set`: Log sets against the active workout and confirm pending ones
/// - `history`: Show the day-grouped workout history
///
/// Running without a subcommand shows the active workout, or the most
/// recent workouts when nothing is in progress.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage workouts
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Log and confirm sets within the active workout
    #[command(alias = "s")]
    Set {
        #[command(subcommand)]
        command: SetCommands,
    },
    /// Show the day-grouped workout history
    #[command(alias = "h")]
    History,
}
