use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One aggregated row of a leaderboard, keyed by team or by class.
/// Derived on every read from the full entry set, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StandingRow {
    pub key: String,
    pub score_points: i64,
    pub participation_points: i64,
    pub record_bonus: i64,
    pub combined: i64,
}
