use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::ActivityRecord;

pub struct RecordRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RecordRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All ledger rows that have been written at least once.
    pub async fn list(&self) -> Result<Vec<ActivityRecord>> {
        let records =
            sqlx::query_as::<_, ActivityRecord>("SELECT activity, label, value FROM records")
                .fetch_all(self.pool)
                .await?;

        Ok(records)
    }

    /// Current ledger row for one activity, if any.
    pub async fn find(&self, activity: &str) -> Result<Option<ActivityRecord>> {
        let record = sqlx::query_as::<_, ActivityRecord>(
            "SELECT activity, label, value FROM records WHERE activity = $1",
        )
        .bind(activity)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }

    /// Overwrite the current best for an activity, guarded by the value the
    /// submitter last observed.
    ///
    /// The update only applies while the stored value still equals
    /// `expected_previous`; a concurrent claim that got there first makes
    /// the guard fail and surfaces as [`StorageError::RecordConflict`]
    /// instead of being silently overwritten.
    pub async fn upsert_guarded(
        &self,
        activity: &str,
        label: &str,
        value: &str,
        expected_previous: Option<&str>,
    ) -> Result<ActivityRecord> {
        let record = sqlx::query_as::<_, ActivityRecord>(
            "INSERT INTO records (activity, label, value) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (activity) DO UPDATE \
                 SET label = EXCLUDED.label, value = EXCLUDED.value \
                 WHERE records.value IS NOT DISTINCT FROM $4 \
             RETURNING activity, label, value",
        )
        .bind(activity)
        .bind(label)
        .bind(value)
        .bind(expected_previous)
        .fetch_optional(self.pool)
        .await?;

        record.ok_or_else(|| StorageError::RecordConflict {
            activity: activity.to_string(),
        })
    }

    /// Clear every current best while retaining the labels. Part of the
    /// admin bulk reset.
    pub async fn reset_values(&self) -> Result<u64> {
        let result = sqlx::query("UPDATE records SET value = NULL")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Team attributed with the current best for an activity: the most
    /// recent record-claiming entry whose value matches the ledger exactly.
    pub async fn current_holder(&self, activity: &str, value: &str) -> Result<Option<String>> {
        let holder: Option<String> = sqlx::query_scalar(
            "SELECT team FROM entries \
             WHERE activity = $1 AND record_bonus > 0 AND record_value = $2 \
             ORDER BY created_at DESC \
             LIMIT 1",
        )
        .bind(activity)
        .bind(value)
        .fetch_optional(self.pool)
        .await?;

        Ok(holder)
    }
}
