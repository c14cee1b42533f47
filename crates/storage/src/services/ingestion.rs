use sqlx::PgPool;

use crate::dto::entry::SubmitEntryRequest;
use crate::error::{Result, StorageError};
use crate::models::activity;
use crate::models::Entry;
use crate::repository::entry::{EntryRepository, NewEntry};
use crate::repository::record::RecordRepository;
use crate::services::scoring;

/// Fixed bonus for beating an activity record.
const RECORD_BONUS: i32 = 20;

/// Validate a record claim before any ledger mutation.
///
/// Returns the trimmed new value when the claim awards a bonus. A "beaten"
/// flag on an activity without record support is ignored rather than
/// rejected; a claim without a value is rejected outright.
fn validated_record_claim<'a>(
    activity_name: &str,
    record_beaten: bool,
    record_value: Option<&'a str>,
) -> Result<Option<&'a str>> {
    if !record_beaten || !activity::supports_record(activity_name) {
        return Ok(None);
    }

    record_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(Some)
        .ok_or_else(|| {
            StorageError::InvalidOutcome(
                "a new record value is required when claiming a record".to_string(),
            )
        })
}

/// Build and persist one scoring entry from a submission.
///
/// Side effects happen in a fixed order: score validation (fail fast), a
/// fresh prior-pass count, the guarded record upsert when a record is
/// claimed, then the entry insert. If the record update lands but the
/// insert fails, the ledger holds a value with no matching entry; that
/// window is logged for manual reconciliation, not auto-recovered.
pub async fn submit_entry(pool: &PgPool, request: &SubmitEntryRequest) -> Result<Entry> {
    let category = activity::category_of(&request.activity);
    let score_points = scoring::score_points(category, &request.outcome)?;

    // The count must come from the store on every submission; a cached
    // count breaks the decay for concurrent submitters.
    let entry_repo = EntryRepository::new(pool);
    let prior_passes = entry_repo
        .count_for(&request.activity, &request.team)
        .await?;
    let participation_points = scoring::participation_bonus(prior_passes);

    let mut record_bonus = 0;
    let mut record_value: Option<String> = None;

    if let Some(value) = validated_record_claim(
        &request.activity,
        request.record_beaten,
        request.record_value.as_deref(),
    )? {
        let record_repo = RecordRepository::new(pool);
        let previous = record_repo
            .find(&request.activity)
            .await?
            .and_then(|record| record.value);
        let label = activity::record_label(&request.activity);

        // Guarded against the value we just read, so a concurrent claim
        // surfaces as a conflict instead of being silently overwritten.
        record_repo
            .upsert_guarded(&request.activity, label, value, previous.as_deref())
            .await?;

        record_bonus = RECORD_BONUS;
        record_value = Some(value.to_string());
    }

    let new_entry = NewEntry {
        activity: &request.activity,
        team: &request.team,
        score_points,
        participation_points,
        record_bonus,
        record_value: record_value.as_deref(),
    };

    match entry_repo.insert(&new_entry).await {
        Ok(entry) => Ok(entry),
        Err(err) => {
            if record_bonus > 0 {
                tracing::warn!(
                    activity = %request.activity,
                    team = %request.team,
                    value = record_value.as_deref().unwrap_or_default(),
                    "entry insert failed after a record update; the ledger now \
                     holds a value with no matching entry"
                );
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_without_beaten_flag_awards_nothing() {
        let claim = validated_record_claim("Tir à la corde", false, Some("12s")).unwrap();
        assert_eq!(claim, None);
    }

    #[test]
    fn claim_on_unsupported_activity_is_ignored() {
        let claim = validated_record_claim("Jenga géant", true, Some("whatever")).unwrap();
        assert_eq!(claim, None);
    }

    #[test]
    fn claim_without_value_is_rejected() {
        for value in [None, Some(""), Some("   ")] {
            assert!(matches!(
                validated_record_claim("Tir à la corde", true, value),
                Err(StorageError::InvalidOutcome(_))
            ));
        }
    }

    #[test]
    fn valid_claim_returns_the_trimmed_value() {
        let claim = validated_record_claim("Course en sac", true, Some("  14.2s ")).unwrap();
        assert_eq!(claim, Some("14.2s"));
    }
}
