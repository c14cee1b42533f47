use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Invalid outcome: {0}")]
    InvalidOutcome(String),

    #[error("Record for '{activity}' was changed by another submission, reload and retry")]
    RecordConflict { activity: String },
}

pub type Result<T> = std::result::Result<T, StorageError>;
