use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DuelResult {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TripleResult {
    Win,
    Draw,
    Loss,
}

/// Category-specific outcome of a heat. The shape must match the category
/// of the submitted activity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutcomePayload {
    Duel { result: DuelResult },
    Triple { result: TripleResult },
    Race { placement: u8 },
    Free { score: String },
}

/// Request payload for submitting one team result.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitEntryRequest {
    #[validate(length(min = 1, max = 255, message = "Activity is required"))]
    pub activity: String,

    #[validate(length(min = 1, max = 255, message = "Team is required"))]
    pub team: String,

    pub outcome: OutcomePayload,

    /// Operator-asserted "record beaten" flag. Ignored for activities that
    /// do not support records.
    #[serde(default)]
    pub record_beaten: bool,

    /// New best value, required when `record_beaten` is set on a
    /// record-supporting activity.
    pub record_value: Option<String>,
}

/// Response containing one journal entry with its point breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntryResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub activity: String,
    pub team: String,
    pub score_points: i32,
    pub participation_points: i32,
    pub record_bonus: i32,
    pub record_value: Option<String>,
    pub combined: i32,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        let combined = entry.combined();
        Self {
            id: entry.id,
            created_at: entry.created_at,
            activity: entry.activity,
            team: entry.team,
            score_points: entry.score_points,
            participation_points: entry.participation_points,
            record_bonus: entry.record_bonus,
            record_value: entry.record_value,
            combined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_payload_deserializes_tagged_forms() {
        let duel: OutcomePayload =
            serde_json::from_str(r#"{"type": "duel", "result": "win"}"#).unwrap();
        assert!(matches!(
            duel,
            OutcomePayload::Duel {
                result: DuelResult::Win
            }
        ));

        let race: OutcomePayload =
            serde_json::from_str(r#"{"type": "race", "placement": 3}"#).unwrap();
        assert!(matches!(race, OutcomePayload::Race { placement: 3 }));

        let free: OutcomePayload =
            serde_json::from_str(r#"{"type": "free", "score": "42"}"#).unwrap();
        assert!(matches!(free, OutcomePayload::Free { score } if score == "42"));
    }

    #[test]
    fn record_beaten_defaults_to_false() {
        let req: SubmitEntryRequest = serde_json::from_str(
            r#"{
                "activity": "Combat de Sumo",
                "team": "2nd A 1",
                "outcome": {"type": "duel", "result": "loss"}
            }"#,
        )
        .unwrap();
        assert!(!req.record_beaten);
        assert!(req.record_value.is_none());
    }
}
