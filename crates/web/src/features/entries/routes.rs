use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{delete_entry, list_entries, submit_entry};
use crate::middleware::auth::{Pins, require_operator};
use crate::state::AppState;

pub fn routes(pins: Pins) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(submit_entry))
        .route("/:id", delete(delete_entry))
        .route_layer(middleware::from_fn_with_state(pins, require_operator));

    Router::new().route("/", get(list_entries)).merge(protected)
}
