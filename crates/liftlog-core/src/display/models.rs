//! Display implementations for domain models.
//!
//! All Display trait implementations for the core domain models live here,
//! separated from the model definitions to maintain clean separation of
//! concerns. Output is markdown for rich terminal display: workouts format
//! with headers and metadata, sessions as sub-sections, sets as list items.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    ExerciseCategory, ExerciseSession, SetFlag, WorkSet, Workout, WorkoutSummary,
};

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SetFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WorkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.weight, self.reps)?;

        if let Some(rpe) = self.rpe {
            write!(f, " @ RPE {rpe}")?;
        }
        if let Some(rir) = self.rir {
            write!(f, " (RIR {rir})")?;
        }
        if self.is_warmup {
            write!(f, " [warmup]")?;
        }
        if !self.flags.is_empty() {
            let flags: Vec<&str> = self.flags.iter().map(SetFlag::as_str).collect();
            write!(f, " [{}]", flags.join(", "))?;
        }
        if self.is_pending {
            write!(f, " (pending)")?;
        }

        Ok(())
    }
}

impl fmt::Display for ExerciseSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({})",
            self.exercise.name,
            self.exercise.category.as_str()
        )?;
        writeln!(f)?;

        for set in &self.sets {
            writeln!(f, "- {set}")?;
        }

        if let Some(top) = self.top_set() {
            writeln!(f)?;
            writeln!(f, "Top set: {}x{} ({})", top.weight, top.reps, top.volume())?;
            writeln!(f, "Session volume: {}", self.total_volume())?;
        } else {
            writeln!(f, "No sets logged.")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Workout {}", self.id)?;
        writeln!(f)?;

        // Metadata section
        if let Some(ended_at) = &self.ended_at {
            writeln!(f, "- Status: finished")?;
            writeln!(f, "- Started: {}", LocalDateTime(&self.started_at))?;
            writeln!(f, "- Finished: {}", LocalDateTime(ended_at))?;
        } else {
            writeln!(f, "- Status: in progress")?;
            writeln!(f, "- Started: {}", LocalDateTime(&self.started_at))?;
        }
        writeln!(f, "- Total volume: {}", self.total_volume())?;
        writeln!(f, "- Total sets: {}", self.total_sets())?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        if !self.exercises.is_empty() {
            writeln!(f, "\n## Exercises")?;
            writeln!(f)?;
            for session in &self.exercises {
                write!(f, "{session}")?;
            }
        } else {
            writeln!(f, "\nNo exercises logged in this workout.")?;
        }

        Ok(())
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Workout {} ({} exercises, {} sets)",
            self.id, self.exercise_count, self.total_sets
        )?;
        writeln!(f)?;

        writeln!(f, "- **Started**: {}", LocalDateTime(&self.started_at))?;
        if let Some(ended_at) = &self.ended_at {
            writeln!(f, "- **Finished**: {}", LocalDateTime(ended_at))?;
        } else {
            writeln!(f, "- **In progress**")?;
        }
        writeln!(f, "- **Volume**: {}", self.total_volume)?;

        if self.pending_sets > 0 {
            writeln!(f, "- **Pending sets**: {}", self.pending_sets)?;
        }
        if let Some(notes) = &self.notes {
            writeln!(f, "- **Notes**: {notes}")?;
        }
        writeln!(f)?; // Blank line after each workout

        Ok(())
    }
}
