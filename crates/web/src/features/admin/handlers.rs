use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use storage::Database;
use utoipa::ToSchema;

use crate::error::WebError;
use crate::events::{ChangeEvent, EventBus};

use super::services;

#[derive(Debug, Serialize, ToSchema)]
pub struct ResetSummary {
    pub entries_deleted: u64,
    pub records_reset: u64,
}

/// Irreversible bulk reset: delete every entry, then clear every record
/// value. The two steps are sequential, not transactional; if the second
/// fails the response says exactly how far the reset got so the operator
/// can finish it manually.
#[utoipa::path(
    post,
    path = "/api/admin/reset",
    responses(
        (status = 200, description = "All entries deleted and record values cleared", body = ResetSummary),
        (status = 401, description = "Admin PIN required"),
        (status = 500, description = "Reset partially completed, message says which step failed")
    ),
    security(("station_pin" = [])),
    tag = "admin"
)]
pub async fn reset_event(
    State(db): State<Database>,
    State(bus): State<Arc<EventBus>>,
) -> Result<Json<ResetSummary>, WebError> {
    let entries_deleted = services::delete_all_entries(db.pool()).await?;
    bus.publish(ChangeEvent::EntriesCleared);
    tracing::info!(entries_deleted, "bulk reset: entries deleted");

    let records_reset = match services::reset_record_values(db.pool()).await {
        Ok(count) => count,
        Err(err) => {
            tracing::error!(error = %err, "bulk reset: record reset failed after entries were deleted");
            return Err(WebError::InternalServerError(format!(
                "{entries_deleted} entries were deleted but the record reset failed: {err}. \
                 Retry the reset to clear the remaining record values."
            )));
        }
    };
    bus.publish(ChangeEvent::RecordsReset);
    tracing::info!(records_reset, "bulk reset: record values cleared");

    Ok(Json(ResetSummary {
        entries_deleted,
        records_reset,
    }))
}
