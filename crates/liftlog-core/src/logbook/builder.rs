//! Builder for creating and configuring Logbook instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Logbook;
use crate::{
    error::{LogbookError, Result},
    journal::Journal,
};

/// Builder for creating and configuring Logbook instances.
#[derive(Debug, Clone)]
pub struct LogbookBuilder {
    journal_path: Option<PathBuf>,
}

impl LogbookBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { journal_path: None }
    }

    /// Sets a custom journal file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/liftlog/journal.json` or
    /// `~/.local/share/liftlog/journal.json`
    pub fn with_journal_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.journal_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured logbook instance.
    ///
    /// # Errors
    ///
    /// Returns `LogbookError::FileSystem` if the journal path is invalid
    /// Returns `LogbookError::Serialization` if an existing journal cannot
    /// be parsed
    pub async fn build(self) -> Result<Logbook> {
        let journal_path = if let Some(path) = self.journal_path {
            path
        } else {
            Self::default_journal_path()?
        };

        if let Some(parent) = journal_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LogbookError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let journal_path_clone = journal_path.clone();
        task::spawn_blocking(move || {
            let _journal = Journal::open(&journal_path_clone)?;
            Ok::<(), LogbookError>(())
        })
        .await
        .map_err(|e| LogbookError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Logbook::new(journal_path))
    }

    /// Returns the default journal path following XDG Base Directory
    /// specification.
    fn default_journal_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("liftlog")
            .place_data_file("journal.json")
            .map_err(|e| LogbookError::XdgDirectory(e.to_string()))
    }
}

impl Default for LogbookBuilder {
    fn default() -> Self {
        Self::new()
    }
}
