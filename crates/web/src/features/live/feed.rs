//! Live standings: an in-memory snapshot of the entry set, kept current by
//! folding change events, with recomputed standings published through a
//! `watch` channel. Late readers only ever see the latest snapshot, which
//! gives coalescing for free.

use serde::Serialize;
use tokio::sync::{broadcast, watch};
use utoipa::ToSchema;

use storage::Database;
use storage::dto::standings::StandingRow;
use storage::error::Result;
use storage::models::Entry;
use storage::repository::entry::EntryRepository;
use storage::services::standings;

use crate::events::{ChangeEvent, EventBus};

/// Both leaderboard granularities, recomputed together from one snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LiveStandings {
    pub teams: Vec<StandingRow>,
    pub classes: Vec<StandingRow>,
}

pub fn compute(entries: &[Entry]) -> LiveStandings {
    LiveStandings {
        teams: standings::by_team(entries),
        classes: standings::by_class(entries),
    }
}

/// Fold one change event into the entry snapshot. Record-only changes do
/// not move any standing.
pub fn apply(entries: &mut Vec<Entry>, event: &ChangeEvent) {
    match event {
        ChangeEvent::EntryInserted { entry } => entries.push(entry.clone()),
        ChangeEvent::EntryDeleted { id } => entries.retain(|entry| entry.id != *id),
        ChangeEvent::EntriesCleared => entries.clear(),
        ChangeEvent::RecordUpdated { .. } | ChangeEvent::RecordsReset => {}
    }
}

/// Handle to the live standings task. Cheap to clone; each clone can take
/// independent `watch` receivers for SSE sessions.
#[derive(Clone)]
pub struct StandingsFeed {
    rx: watch::Receiver<LiveStandings>,
}

impl StandingsFeed {
    /// Load the initial snapshot and start the fold task.
    pub async fn spawn(db: Database, bus: &EventBus) -> Result<Self> {
        let mut entries = EntryRepository::new(db.pool()).list_ascending().await?;
        let (tx, rx) = watch::channel(compute(&entries));
        let mut events = bus.subscribe();

        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        apply(&mut entries, &event);
                        let _ = tx.send(compute(&entries));
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Missed events cannot be replayed; resynchronize
                        // from the store instead.
                        tracing::warn!(
                            skipped,
                            "standings feed lagged behind the change feed, reloading snapshot"
                        );
                        match EntryRepository::new(db.pool()).list_ascending().await {
                            Ok(fresh) => {
                                entries = fresh;
                                let _ = tx.send(compute(&entries));
                            }
                            Err(err) => {
                                tracing::error!(error = %err, "failed to reload entries after lag");
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Ok(Self { rx })
    }

    pub fn subscribe(&self) -> watch::Receiver<LiveStandings> {
        self.rx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn entry(team: &str, score: i32) -> Entry {
        Entry {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            activity: "Course en sac".to_string(),
            team: team.to_string(),
            score_points: score,
            participation_points: 10,
            record_bonus: 0,
            record_value: None,
        }
    }

    #[test]
    fn insert_event_extends_the_snapshot() {
        let mut entries = vec![entry("2nd A 1", 10)];
        apply(
            &mut entries,
            &ChangeEvent::EntryInserted {
                entry: entry("2nd B", 7),
            },
        );

        let snapshot = compute(&entries);
        assert_eq!(snapshot.teams.len(), 2);
        assert_eq!(snapshot.teams[0].key, "2nd A 1");
    }

    #[test]
    fn delete_event_removes_only_the_matching_entry() {
        let kept = entry("2nd A 1", 10);
        let removed = entry("2nd B", 7);
        let removed_id = removed.id;
        let mut entries = vec![kept, removed];

        apply(&mut entries, &ChangeEvent::EntryDeleted { id: removed_id });

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].team, "2nd A 1");
    }

    #[test]
    fn clear_event_empties_the_standings() {
        let mut entries = vec![entry("2nd A 1", 10), entry("2nd B", 7)];
        apply(&mut entries, &ChangeEvent::EntriesCleared);

        let snapshot = compute(&entries);
        assert!(snapshot.teams.is_empty());
        assert!(snapshot.classes.is_empty());
    }

    #[test]
    fn record_events_do_not_move_standings() {
        let mut entries = vec![entry("2nd A 1", 10)];
        let before = compute(&entries);

        apply(&mut entries, &ChangeEvent::RecordsReset);

        let after = compute(&entries);
        assert_eq!(before.teams, after.teams);
        assert_eq!(before.classes, after.classes);
    }
}
