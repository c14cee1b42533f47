use axum::{Router, routing::get};

use super::handlers::{change_events, live_standings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(change_events))
        .route("/standings", get(live_standings))
}
