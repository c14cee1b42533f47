use std::sync::Arc;

use axum::extract::FromRef;
use storage::Database;

use crate::events::EventBus;
use crate::features::live::feed::StandingsFeed;
use crate::middleware::auth::Pins;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub bus: Arc<EventBus>,
    pub feed: StandingsFeed,
    pub pins: Pins,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<EventBus> {
    fn from_ref(state: &AppState) -> Self {
        state.bus.clone()
    }
}

impl FromRef<AppState> for StandingsFeed {
    fn from_ref(state: &AppState) -> Self {
        state.feed.clone()
    }
}

impl FromRef<AppState> for Pins {
    fn from_ref(state: &AppState) -> Self {
        state.pins.clone()
    }
}
