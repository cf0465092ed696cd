//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers that format collections of workouts with consistent
//! structure and graceful empty-collection handling.

use std::{fmt, ops::Index};

use jiff::civil::Date;

use super::datetime::CivilDay;
use crate::models::WorkoutSummary;

/// Newtype wrapper for displaying collections of workout summaries.
///
/// Provides clean Display formatting for workout collections without title
/// handling, allowing consumers to handle titles separately. Handles empty
/// collections gracefully.
pub struct WorkoutSummaries(pub Vec<WorkoutSummary>);

impl WorkoutSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of workout summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the workout summary at the given index.
    pub fn get(&self, index: usize) -> Option<&WorkoutSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the workout summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutSummary> {
        self.0.iter()
    }
}

impl Index<usize> for WorkoutSummaries {
    type Output = WorkoutSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for WorkoutSummaries {
    type Item = WorkoutSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WorkoutSummaries {
    type Item = &'a WorkoutSummary;
    type IntoIter = std::slice::Iter<'a, WorkoutSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for WorkoutSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No workouts found.")
        } else {
            for workout in &self.0 {
                write!(f, "{workout}")?;
            }
            Ok(())
        }
    }
}

/// One calendar day of logged workouts, for history display.
pub struct HistoryDay {
    /// The civil day, in the zone the history was built with
    pub day: Date,
    /// Summaries of the workouts started on that day, in log order
    pub workouts: Vec<WorkoutSummary>,
}

/// Newtype wrapper for displaying day-grouped workout history.
///
/// Days are expected in descending order (most recent first), as produced
/// by [`crate::history::group_by_day`]. Handles the empty history case.
pub struct History(pub Vec<HistoryDay>);

impl History {
    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of days with at least one workout.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No workout history yet.");
        }

        for day in &self.0 {
            writeln!(f, "# {}", CivilDay(day.day))?;
            writeln!(f)?;
            for workout in &day.workouts {
                write!(f, "{workout}")?;
            }
        }
        Ok(())
    }
}
