use axum::{Router, middleware, routing::post};

use super::handlers::reset_event;
use crate::middleware::auth::{Pins, require_admin};
use crate::state::AppState;

pub fn routes(pins: Pins) -> Router<AppState> {
    Router::new()
        .route("/reset", post(reset_event))
        .route_layer(middleware::from_fn_with_state(pins, require_admin))
}
