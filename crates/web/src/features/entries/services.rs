use sqlx::PgPool;
use storage::{
    dto::entry::SubmitEntryRequest,
    error::Result,
    models::Entry,
    repository::entry::EntryRepository,
    services::ingestion,
};
use uuid::Uuid;

/// Validate, score and persist one submission.
pub async fn submit_entry(pool: &PgPool, request: &SubmitEntryRequest) -> Result<Entry> {
    ingestion::submit_entry(pool, request).await
}

/// Journal of recent entries, most recent first.
pub async fn list_entries(pool: &PgPool, limit: i64) -> Result<Vec<Entry>> {
    let repo = EntryRepository::new(pool);
    repo.list(Some(limit)).await
}

/// Delete one entry permanently.
pub async fn delete_entry(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = EntryRepository::new(pool);
    repo.delete(id).await
}
