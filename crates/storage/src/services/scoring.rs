use crate::dto::entry::{DuelResult, OutcomePayload, TripleResult};
use crate::error::{Result, StorageError};
use crate::models::Category;

/// Points awarded for an outcome in a given category.
///
/// An outcome whose shape does not match the category, a race placement
/// outside 1-4 and a free score that is not a non-negative integer are all
/// rejected: the caller must not produce a partial entry from them.
pub fn score_points(category: Category, outcome: &OutcomePayload) -> Result<i32> {
    match (category, outcome) {
        (Category::Duel, OutcomePayload::Duel { result }) => Ok(match result {
            DuelResult::Win => 10,
            DuelResult::Loss => 4,
        }),
        (Category::Triple, OutcomePayload::Triple { result }) => Ok(match result {
            TripleResult::Win => 10,
            TripleResult::Draw => 7,
            TripleResult::Loss => 5,
        }),
        (Category::Race, OutcomePayload::Race { placement }) => match *placement {
            1 => Ok(10),
            2 => Ok(7),
            3 => Ok(5),
            4 => Ok(3),
            other => Err(StorageError::InvalidOutcome(format!(
                "race placement must be between 1 and 4, got {other}"
            ))),
        },
        (Category::Free, OutcomePayload::Free { score }) => {
            let trimmed = score.trim();
            if trimmed.is_empty() {
                return Err(StorageError::InvalidOutcome(
                    "a free score is required".to_string(),
                ));
            }
            let value: i32 = trimmed.parse().map_err(|_| {
                StorageError::InvalidOutcome(format!(
                    "free score must be a non-negative integer, got '{trimmed}'"
                ))
            })?;
            if value < 0 {
                return Err(StorageError::InvalidOutcome(
                    "free score must be non-negative".to_string(),
                ));
            }
            Ok(value)
        }
        (expected, _) => Err(StorageError::InvalidOutcome(format!(
            "outcome does not match the {expected:?} category of this activity"
        ))),
    }
}

/// Bonus for a team's nth pass at an activity: the first three attempts are
/// rewarded, decaying to zero.
pub fn participation_bonus(prior_passes: i64) -> i32 {
    match prior_passes {
        0 => 10,
        1 => 5,
        2 => 2,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duel_outcomes() {
        let win = OutcomePayload::Duel {
            result: DuelResult::Win,
        };
        let loss = OutcomePayload::Duel {
            result: DuelResult::Loss,
        };
        assert_eq!(score_points(Category::Duel, &win).unwrap(), 10);
        assert_eq!(score_points(Category::Duel, &loss).unwrap(), 4);
    }

    #[test]
    fn triple_outcomes() {
        for (result, expected) in [
            (TripleResult::Win, 10),
            (TripleResult::Draw, 7),
            (TripleResult::Loss, 5),
        ] {
            let outcome = OutcomePayload::Triple { result };
            assert_eq!(score_points(Category::Triple, &outcome).unwrap(), expected);
        }
    }

    #[test]
    fn race_placements() {
        for (placement, expected) in [(1, 10), (2, 7), (3, 5), (4, 3)] {
            let outcome = OutcomePayload::Race { placement };
            assert_eq!(score_points(Category::Race, &outcome).unwrap(), expected);
        }
    }

    #[test]
    fn race_placement_outside_range_is_rejected() {
        for placement in [0, 5, 200] {
            let outcome = OutcomePayload::Race { placement };
            assert!(matches!(
                score_points(Category::Race, &outcome),
                Err(StorageError::InvalidOutcome(_))
            ));
        }
    }

    #[test]
    fn free_score_is_the_submitted_value() {
        let outcome = OutcomePayload::Free {
            score: "37".to_string(),
        };
        assert_eq!(score_points(Category::Free, &outcome).unwrap(), 37);

        let zero = OutcomePayload::Free {
            score: " 0 ".to_string(),
        };
        assert_eq!(score_points(Category::Free, &zero).unwrap(), 0);
    }

    #[test]
    fn invalid_free_scores_are_rejected() {
        for score in ["", "  ", "abc", "12.5", "-3"] {
            let outcome = OutcomePayload::Free {
                score: score.to_string(),
            };
            assert!(
                matches!(
                    score_points(Category::Free, &outcome),
                    Err(StorageError::InvalidOutcome(_))
                ),
                "'{score}' should be rejected"
            );
        }
    }

    #[test]
    fn mismatched_outcome_shape_is_rejected() {
        let duel = OutcomePayload::Duel {
            result: DuelResult::Win,
        };
        assert!(matches!(
            score_points(Category::Race, &duel),
            Err(StorageError::InvalidOutcome(_))
        ));

        let free = OutcomePayload::Free {
            score: "10".to_string(),
        };
        assert!(matches!(
            score_points(Category::Duel, &free),
            Err(StorageError::InvalidOutcome(_))
        ));
    }

    #[test]
    fn participation_bonus_decays_to_zero() {
        assert_eq!(participation_bonus(0), 10);
        assert_eq!(participation_bonus(1), 5);
        assert_eq!(participation_bonus(2), 2);
        for prior in [3, 4, 10, 1000] {
            assert_eq!(participation_bonus(prior), 0);
        }
    }
}
