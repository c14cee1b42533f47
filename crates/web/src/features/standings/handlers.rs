use axum::{Json, extract::State};
use storage::{Database, dto::standings::StandingRow};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/standings/teams",
    responses(
        (status = 200, description = "Ranked standings by team, descending combined total", body = Vec<StandingRow>)
    ),
    tag = "standings"
)]
pub async fn get_team_standings(
    State(db): State<Database>,
) -> Result<Json<Vec<StandingRow>>, WebError> {
    let rows = services::team_standings(db.pool()).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/standings/classes",
    responses(
        (status = 200, description = "Ranked standings by class, sub-groups rolled up", body = Vec<StandingRow>)
    ),
    tag = "standings"
)]
pub async fn get_class_standings(
    State(db): State<Database>,
) -> Result<Json<Vec<StandingRow>>, WebError> {
    let rows = services::class_standings(db.pool()).await?;
    Ok(Json(rows))
}
