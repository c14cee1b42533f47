use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Entry;

/// Column list shared by every query returning full entry rows.
const ENTRY_COLUMNS: &str = "id, created_at, activity, team, score_points, \
                             participation_points, record_bonus, record_value";

/// Fields for an entry about to be inserted; id and timestamp are assigned
/// by the server.
#[derive(Debug)]
pub struct NewEntry<'a> {
    pub activity: &'a str,
    pub team: &'a str,
    pub score_points: i32,
    pub participation_points: i32,
    pub record_bonus: i32,
    pub record_value: Option<&'a str>,
}

pub struct EntryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EntryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one entry and return the created row with its server-assigned
    /// id and timestamp.
    pub async fn insert(&self, new_entry: &NewEntry<'_>) -> Result<Entry> {
        let sql = format!(
            "INSERT INTO entries \
                 (activity, team, score_points, participation_points, record_bonus, record_value) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {ENTRY_COLUMNS}"
        );

        let entry = sqlx::query_as::<_, Entry>(&sql)
            .bind(new_entry.activity)
            .bind(new_entry.team)
            .bind(new_entry.score_points)
            .bind(new_entry.participation_points)
            .bind(new_entry.record_bonus)
            .bind(new_entry.record_value)
            .fetch_one(self.pool)
            .await?;

        Ok(entry)
    }

    /// Number of entries already accepted for this (activity, team) pair.
    pub async fn count_for(&self, activity: &str, team: &str) -> Result<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM entries WHERE activity = $1 AND team = $2")
                .bind(activity)
                .bind(team)
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// Journal listing, most recent first.
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Entry>> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM entries \
             ORDER BY created_at DESC \
             LIMIT $1"
        );

        let entries = sqlx::query_as::<_, Entry>(&sql)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;

        Ok(entries)
    }

    /// Full entry set in arrival order, for aggregation.
    pub async fn list_ascending(&self) -> Result<Vec<Entry>> {
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM entries ORDER BY created_at ASC");

        let entries = sqlx::query_as::<_, Entry>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(entries)
    }

    /// Delete one entry by id. Irreversible.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Delete every entry. Irreversible, admin bulk reset only.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM entries").execute(self.pool).await?;

        Ok(result.rows_affected())
    }
}
