//! Set operations for the Logbook.

use tokio::task;
use uuid::Uuid;

use super::Logbook;
use crate::{
    error::{LogbookError, Result},
    journal::Journal,
    models::WorkSet,
    params::{ConfirmSet, LogSet},
};

impl Logbook {
    /// Logs a set against the in-progress workout, creating the exercise
    /// session on first use. Returns the owning workout's ID together with
    /// the stored set.
    pub async fn log_set(&self, params: &LogSet) -> Result<(Uuid, WorkSet)> {
        let journal_path = self.journal_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut journal = Journal::open(&journal_path)?;
            journal.log_set(&params)
        })
        .await
        .map_err(|e| LogbookError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Confirms a pending set.
    pub async fn confirm_set(&self, params: &ConfirmSet) -> Result<WorkSet> {
        let journal_path = self.journal_path.clone();
        let set_id = params.id;

        task::spawn_blocking(move || {
            let mut journal = Journal::open(&journal_path)?;
            journal.confirm_set(set_id)
        })
        .await
        .map_err(|e| LogbookError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
