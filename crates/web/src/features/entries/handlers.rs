use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::entry::{EntryResponse, SubmitEntryRequest},
    models::{ActivityRecord, activity},
};
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::events::{ChangeEvent, EventBus};

use super::services;

const DEFAULT_JOURNAL_LIMIT: i64 = 100;

#[derive(Debug, Deserialize, IntoParams)]
pub struct JournalQuery {
    /// Maximum number of entries to return, most recent first.
    pub limit: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/api/entries",
    request_body = SubmitEntryRequest,
    responses(
        (status = 201, description = "Entry created with its point breakdown", body = EntryResponse),
        (status = 400, description = "Invalid or missing outcome for the activity category"),
        (status = 409, description = "A concurrent record claim won the race, reload and retry"),
        (status = 401, description = "Missing or unknown station PIN")
    ),
    security(("station_pin" = [])),
    tag = "entries"
)]
pub async fn submit_entry(
    State(db): State<Database>,
    State(bus): State<Arc<EventBus>>,
    Json(request): Json<SubmitEntryRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let entry = services::submit_entry(db.pool(), &request).await?;

    if entry.record_bonus > 0 {
        bus.publish(ChangeEvent::RecordUpdated {
            record: ActivityRecord {
                activity: entry.activity.clone(),
                label: activity::record_label(&entry.activity).to_string(),
                value: entry.record_value.clone(),
            },
        });
    }
    bus.publish(ChangeEvent::EntryInserted {
        entry: entry.clone(),
    });

    Ok((StatusCode::CREATED, Json(EntryResponse::from(entry))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/entries",
    params(JournalQuery),
    responses(
        (status = 200, description = "Journal of recent entries, most recent first", body = Vec<EntryResponse>)
    ),
    tag = "entries"
)]
pub async fn list_entries(
    State(db): State<Database>,
    Query(query): Query<JournalQuery>,
) -> Result<Json<Vec<EntryResponse>>, WebError> {
    let limit = query.limit.unwrap_or(DEFAULT_JOURNAL_LIMIT);
    if limit < 1 {
        return Err(WebError::BadRequest("limit must be >= 1".to_string()));
    }

    let entries = services::list_entries(db.pool(), limit).await?;
    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/entries/{id}",
    params(
        ("id" = Uuid, Path, description = "Entry id")
    ),
    responses(
        (status = 204, description = "Entry deleted permanently"),
        (status = 404, description = "Entry not found"),
        (status = 401, description = "Missing or unknown station PIN")
    ),
    security(("station_pin" = [])),
    tag = "entries"
)]
pub async fn delete_entry(
    State(db): State<Database>,
    State(bus): State<Arc<EventBus>>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_entry(db.pool(), id).await?;

    bus.publish(ChangeEvent::EntryDeleted { id });

    Ok(StatusCode::NO_CONTENT.into_response())
}
