//! Exercise session model: the ordered sets of one exercise in a workout.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Exercise, WorkSet};

/// All sets performed for one exercise within one workout.
///
/// Sets are kept in insertion order, which is chronological order under
/// normal operation. The session never reorders or sorts them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseSession {
    /// Unique identifier for the session
    pub id: Uuid,

    /// The exercise this session tracks
    pub exercise: Exercise,

    /// Performed sets, insertion order = chronological order
    #[serde(default)]
    pub sets: Vec<WorkSet>,
}

impl ExerciseSession {
    /// Creates an empty session for an exercise.
    pub fn new(exercise: Exercise) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise,
            sets: Vec::new(),
        }
    }

    /// Appends a set at the end of the session.
    pub fn add_set(&mut self, set: WorkSet) {
        self.sets.push(set);
    }

    /// Number of sets in this session.
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Sum of each set's volume; 0 for an empty session.
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(WorkSet::volume).sum()
    }

    /// The set with the greatest volume, or `None` when the session is
    /// empty. Ties resolve to the earliest-inserted set.
    pub fn top_set(&self) -> Option<&WorkSet> {
        let mut best: Option<&WorkSet> = None;
        for set in &self.sets {
            match best {
                Some(current) if set.volume() <= current.volume() => {}
                _ => best = Some(set),
            }
        }
        best
    }
}
