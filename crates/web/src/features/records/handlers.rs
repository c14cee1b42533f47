use axum::{Json, extract::State};
use storage::{Database, dto::record::RecordStatusResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/records",
    responses(
        (status = 200, description = "Current best per record-supporting activity, with holder attribution", body = Vec<RecordStatusResponse>)
    ),
    tag = "records"
)]
pub async fn list_records(
    State(db): State<Database>,
) -> Result<Json<Vec<RecordStatusResponse>>, WebError> {
    let rows = services::record_table(db.pool()).await?;
    Ok(Json(rows))
}
