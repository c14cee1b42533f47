use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// The single current best known value for an activity.
///
/// `value` is free-form text because units differ per activity (seconds,
/// centimeters, counts). `value` is `None` until a first record claim is
/// accepted, and again after a bulk reset (which retains the label).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ActivityRecord {
    pub activity: String,
    pub label: String,
    pub value: Option<String>,
}
