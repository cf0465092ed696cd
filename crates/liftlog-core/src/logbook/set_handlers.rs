//! Set handler operations that return formatted wrapper types.

use uuid::Uuid;

use super::Logbook;
use crate::{
    display::{CreateResult, UpdateResult},
    error::Result,
    models::WorkSet,
    params::{ConfirmSet, LogSet},
};

impl Logbook {
    /// Handle logging a set, wrapped for display. Returns the owning
    /// workout's ID alongside the wrapper so interfaces can reference it.
    pub async fn log_set_result(&self, params: &LogSet) -> Result<(Uuid, CreateResult<WorkSet>)> {
        let (workout_id, set) = self.log_set(params).await?;
        Ok((workout_id, CreateResult::new(set)))
    }

    /// Handle confirming a pending set, wrapped for display.
    pub async fn confirm_set_result(&self, params: &ConfirmSet) -> Result<UpdateResult<WorkSet>> {
        let set = self.confirm_set(params).await?;
        Ok(UpdateResult::with_changes(
            set,
            vec!["Marked set as confirmed".to_string()],
        ))
    }
}
