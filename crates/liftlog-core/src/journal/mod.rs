//! Journal storage for the workout log.
//!
//! This module provides the persistence boundary for the logbook: a flat
//! JSON document holding the full workout history. The domain value types
//! serialize field-for-field, so loading a journal and saving it back
//! reproduces identical workouts, sessions, and sets (identifiers and
//! timestamps included). There is deliberately no query engine here; the
//! document is small enough to hold in memory and every read is a plain
//! iteration over the loaded workouts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FsResultExt, Result};
use crate::models::Workout;

pub mod set_queries;
pub mod workout_queries;

/// On-disk shape of the journal file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct JournalDocument {
    #[serde(default)]
    workouts: Vec<Workout>,
}

/// Journal file handler: loads the workout history, answers queries, and
/// persists after each mutation.
pub struct Journal {
    path: PathBuf,
    workouts: Vec<Workout>,
}

impl Journal {
    /// Opens a journal file, creating an empty journal when the file does
    /// not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let workouts = if path.exists() {
            let contents = fs::read_to_string(&path).fs_context(&path)?;
            let document: JournalDocument = serde_json::from_str(&contents)?;
            document.workouts
        } else {
            Vec::new()
        };

        Ok(Self { path, workouts })
    }

    /// Writes the journal back to disk.
    ///
    /// The document is written to a sibling temp file first and renamed
    /// into place, so a crash mid-write never leaves a truncated journal.
    pub(crate) fn save(&self) -> Result<()> {
        let document = JournalDocument {
            workouts: self.workouts.clone(),
        };
        let contents = serde_json::to_string_pretty(&document)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).fs_context(&tmp_path)?;
        fs::rename(&tmp_path, &self.path).fs_context(&self.path)?;
        Ok(())
    }

    /// All stored workouts in insertion (chronological) order.
    pub(crate) fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub(crate) fn workouts_mut(&mut self) -> &mut Vec<Workout> {
        &mut self.workouts
    }
}
