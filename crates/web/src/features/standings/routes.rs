use axum::{Router, routing::get};

use super::handlers::{get_class_standings, get_team_standings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/teams", get(get_team_standings))
        .route("/classes", get(get_class_standings))
}
