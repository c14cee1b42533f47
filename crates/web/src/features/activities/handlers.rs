use axum::Json;
use storage::models::{Activity, activity};

/// The static activity catalog in display order (duel, triple, race, free).
#[utoipa::path(
    get,
    path = "/api/activities",
    responses(
        (status = 200, description = "Activity catalog in display order", body = Vec<Activity>)
    ),
    tag = "activities"
)]
pub async fn list_activities() -> Json<Vec<Activity>> {
    Json(activity::all())
}
