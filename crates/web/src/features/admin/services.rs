use sqlx::PgPool;
use storage::{
    error::Result,
    repository::{entry::EntryRepository, record::RecordRepository},
};

/// Delete every entry. Irreversible.
pub async fn delete_all_entries(pool: &PgPool) -> Result<u64> {
    let repo = EntryRepository::new(pool);
    repo.delete_all().await
}

/// Null out every record value, retaining labels.
pub async fn reset_record_values(pool: &PgPool) -> Result<u64> {
    let repo = RecordRepository::new(pool);
    repo.reset_values().await
}
