use std::collections::HashMap;

use sqlx::PgPool;
use storage::{
    dto::record::RecordStatusResponse,
    error::Result,
    models::{ActivityRecord, activity},
    repository::record::RecordRepository,
};

/// Record table for every record-supporting activity in display order.
///
/// Stored ledger rows take precedence over the catalog defaults; activities
/// never claimed show their default label with no value. Holder attribution
/// matches the ledger value against the most recent claiming entry.
pub async fn record_table(pool: &PgPool) -> Result<Vec<RecordStatusResponse>> {
    let repo = RecordRepository::new(pool);

    let stored: HashMap<String, ActivityRecord> = repo
        .list()
        .await?
        .into_iter()
        .map(|record| (record.activity.clone(), record))
        .collect();

    let mut rows = Vec::new();
    for entry in activity::all().into_iter().filter(|a| a.supports_record) {
        let stored_row = stored.get(&entry.name);
        let label = stored_row
            .map(|record| record.label.clone())
            .unwrap_or(entry.record_label);
        let value = stored_row.and_then(|record| record.value.clone());

        let holder = match &value {
            Some(value) => repo.current_holder(&entry.name, value).await?,
            None => None,
        };

        rows.push(RecordStatusResponse {
            activity: entry.name,
            label,
            value,
            holder,
        });
    }

    Ok(rows)
}
