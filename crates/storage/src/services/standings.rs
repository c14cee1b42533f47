use std::collections::HashMap;

use crate::dto::standings::StandingRow;
use crate::models::Entry;

/// Fold entries into ranked standings, one row per grouping key, sorted
/// descending by combined total.
///
/// The fold is pure and total: every key with at least one entry appears
/// exactly once, and ties keep the first-appearance order of the input.
/// Feed entries in `created_at` ascending order so that tie order matches
/// arrival order.
pub fn aggregate<F>(entries: &[Entry], key_of: F) -> Vec<StandingRow>
where
    F: Fn(&Entry) -> String,
{
    let mut rows: Vec<StandingRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = key_of(entry);
        let idx = match index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = rows.len();
                rows.push(StandingRow {
                    key: key.clone(),
                    score_points: 0,
                    participation_points: 0,
                    record_bonus: 0,
                    combined: 0,
                });
                index.insert(key, idx);
                idx
            }
        };

        let row = &mut rows[idx];
        row.score_points += i64::from(entry.score_points);
        row.participation_points += i64::from(entry.participation_points);
        row.record_bonus += i64::from(entry.record_bonus);
        row.combined = row.score_points + row.participation_points + row.record_bonus;
    }

    // sort_by is stable, so equal totals keep first-appearance order.
    rows.sort_by(|a, b| b.combined.cmp(&a.combined));
    rows
}

/// Standings grouped by the raw team label.
pub fn by_team(entries: &[Entry]) -> Vec<StandingRow> {
    aggregate(entries, |entry| entry.team.clone())
}

/// Standings grouped by class, sub-groups of the same class rolled up.
pub fn by_class(entries: &[Entry]) -> Vec<StandingRow> {
    aggregate(entries, |entry| class_key(&entry.team).to_string())
}

/// Class of a team label: the label with a trailing whitespace-separated
/// all-digit token stripped ("2nd A 1" -> "2nd A"). Labels without such a
/// token are their own class.
pub fn class_key(team: &str) -> &str {
    let trimmed = team.trim_end();
    if let Some((prefix, last)) = trimmed.rsplit_once(char::is_whitespace)
        && !last.is_empty()
        && last.chars().all(|c| c.is_ascii_digit())
    {
        return prefix.trim_end();
    }
    team
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn entry(team: &str, score: i32, participation: i32, record: i32) -> Entry {
        Entry {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            activity: "Combat de Sumo".to_string(),
            team: team.to_string(),
            score_points: score,
            participation_points: participation,
            record_bonus: record,
            record_value: None,
        }
    }

    #[test]
    fn class_key_strips_trailing_numeric_token() {
        assert_eq!(class_key("2nd A 1"), "2nd A");
        assert_eq!(class_key("2nd MTNE A 3"), "2nd MTNE A");
        assert_eq!(class_key("2nd MEMN"), "2nd MEMN");
        assert_eq!(class_key("2nd B 12"), "2nd B");
    }

    #[test]
    fn class_key_ignores_non_numeric_trailing_token() {
        assert_eq!(class_key("2nd MTNE B"), "2nd MTNE B");
        assert_eq!(class_key("2nd A 1a"), "2nd A 1a");
    }

    #[test]
    fn aggregate_sums_components_and_combined() {
        let entries = vec![entry("2nd A 1", 10, 10, 0), entry("2nd A 1", 4, 5, 20)];
        let rows = by_team(&entries);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.key, "2nd A 1");
        assert_eq!(row.score_points, 14);
        assert_eq!(row.participation_points, 15);
        assert_eq!(row.record_bonus, 20);
        assert_eq!(row.combined, 49);
    }

    #[test]
    fn combined_invariant_holds_for_every_row() {
        let entries = vec![
            entry("2nd A 1", 10, 10, 0),
            entry("2nd B", 7, 5, 20),
            entry("2nd A 2", 3, 2, 0),
            entry("2nd B", 5, 2, 0),
        ];
        for rows in [by_team(&entries), by_class(&entries)] {
            for row in rows {
                assert_eq!(
                    row.combined,
                    row.score_points + row.participation_points + row.record_bonus
                );
            }
        }
    }

    #[test]
    fn subgroups_roll_up_into_one_class_row() {
        // First pass: duel win, 10 + 10. Second pass, same pair: loss, 4 + 5.
        let entries = vec![entry("2nd A 1", 10, 10, 0), entry("2nd A 1", 4, 5, 0)];
        let rows = by_class(&entries);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.key, "2nd A");
        assert_eq!(row.score_points, 14);
        assert_eq!(row.participation_points, 15);
        assert_eq!(row.record_bonus, 0);
        assert_eq!(row.combined, 29);
    }

    #[test]
    fn rows_are_sorted_descending_by_combined() {
        let entries = vec![
            entry("low", 3, 0, 0),
            entry("high", 10, 10, 20),
            entry("mid", 7, 5, 0),
        ];
        let rows = by_team(&entries);
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["high", "mid", "low"]);
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let entries = vec![
            entry("first", 10, 0, 0),
            entry("second", 10, 0, 0),
            entry("third", 10, 0, 0),
        ];
        let rows = by_team(&entries);
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["first", "second", "third"]);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let entries = vec![
            entry("2nd A 1", 10, 10, 0),
            entry("2nd B", 7, 5, 0),
            entry("2nd A 2", 5, 10, 20),
        ];
        assert_eq!(by_class(&entries), by_class(&entries));
        assert_eq!(by_team(&entries), by_team(&entries));
    }

    #[test]
    fn every_team_with_an_entry_appears_exactly_once() {
        let entries = vec![
            entry("a", 1, 0, 0),
            entry("b", 2, 0, 0),
            entry("a", 3, 0, 0),
            entry("c", 4, 0, 0),
            entry("b", 5, 0, 0),
        ];
        let mut keys: Vec<String> = by_team(&entries).into_iter().map(|r| r.key).collect();
        keys.sort();
        assert_eq!(keys, ["a", "b", "c"]);
    }
}
