use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{
    Stream, StreamExt,
    wrappers::{BroadcastStream, WatchStream},
};

use crate::events::EventBus;

use super::feed::StandingsFeed;

/// Raw change feed: one SSE event per store mutation. Clients that fall
/// behind simply miss dropped events and should refetch; the standings
/// stream below is self-healing either way.
pub async fn change_events(
    State(bus): State<Arc<EventBus>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(bus.subscribe()).filter_map(|result| {
        let event = result.ok()?;
        let sse = Event::default().json_data(&event).ok()?;
        Some(Ok::<Event, Infallible>(sse))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Live standings snapshots: the current snapshot immediately on connect,
/// then one per recomputation. Intermediate snapshots may be coalesced.
pub async fn live_standings(
    State(feed): State<StandingsFeed>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = WatchStream::new(feed.subscribe()).filter_map(|snapshot| {
        let sse = Event::default().json_data(&snapshot).ok()?;
        Some(Ok::<Event, Infallible>(sse))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
