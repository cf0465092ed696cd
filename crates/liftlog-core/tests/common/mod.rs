use liftlog_core::LogbookBuilder;
use tempfile::TempDir;

/// Helper function to create a test logbook
pub async fn create_test_logbook() -> (TempDir, liftlog_core::Logbook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let journal_path = temp_dir.path().join("journal.json");
    let logbook = LogbookBuilder::new()
        .with_journal_path(Some(&journal_path))
        .build()
        .await
        .expect("Failed to create logbook");
    (temp_dir, logbook)
}
