//! In-process change feed backed by a `tokio::sync::broadcast` channel.
//!
//! Every successful store mutation publishes a [`ChangeEvent`]; the live
//! standings feed and the SSE endpoints subscribe. Standings recomputation
//! is idempotent over the entry set, so subscribers may coalesce or replay
//! events freely.

use serde::Serialize;
use tokio::sync::broadcast;
use utoipa::ToSchema;
use uuid::Uuid;

use storage::models::{ActivityRecord, Entry};

/// A store mutation that display views must react to.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    EntryInserted { entry: Entry },
    EntryDeleted { id: Uuid },
    EntriesCleared,
    RecordUpdated { record: ActivityRecord },
    RecordsReset,
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// Fan-out hub for [`ChangeEvent`]s, shared via `Arc<EventBus>`.
pub struct EventBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity. Slow receivers that
    /// fall more than `capacity` events behind observe a lag error and must
    /// resynchronize from the store.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers. With zero subscribers
    /// the event is dropped; the store already holds the durable state.
    pub fn publish(&self, event: ChangeEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_entry() -> Entry {
        Entry {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            activity: "Combat de Sumo".to_string(),
            team: "2nd A 1".to_string(),
            score_points: 10,
            participation_points: 10,
            record_bonus: 0,
            record_value: None,
        }
    }

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(ChangeEvent::EntryInserted {
            entry: sample_entry(),
        });

        let received = rx.recv().await.expect("should receive the event");
        assert!(matches!(received, ChangeEvent::EntryInserted { .. }));
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ChangeEvent::EntriesCleared);

        assert!(matches!(
            rx1.recv().await.unwrap(),
            ChangeEvent::EntriesCleared
        ));
        assert!(matches!(
            rx2.recv().await.unwrap(),
            ChangeEvent::EntriesCleared
        ));
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(ChangeEvent::RecordsReset);
    }
}
