use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Record table row for display: current best per activity plus the team
/// holding it, when attributable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordStatusResponse {
    pub activity: String,
    pub label: String,
    pub value: Option<String>,
    /// Team attributed with the current best. `None` when no entry matches
    /// the ledger value, e.g. right after a reset.
    pub holder: Option<String>,
}
