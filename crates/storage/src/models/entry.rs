use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One submitted outcome for a team on an activity, immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Entry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub activity: String,
    pub team: String,
    pub score_points: i32,
    pub participation_points: i32,
    pub record_bonus: i32,
    pub record_value: Option<String>,
}

impl Entry {
    /// Total points the entry contributes to a standing.
    pub fn combined(&self) -> i32 {
        self.score_points + self.participation_points + self.record_bonus
    }
}
