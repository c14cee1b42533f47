use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Scoring category of an activity. Determines which outcome shape and
/// point table apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Duel,
    Triple,
    Race,
    Free,
}

/// Duel activities: two teams face off, win or loss only.
const DUEL_ACTIVITIES: &[&str] = &[
    "Accronomètre",
    "Jenga géant",
    "Morpion géant",
    "Combat de Sumo",
    "Tir à la corde",
    "Tir croisé (électronique)",
];

/// Triple-outcome activities: win, draw or loss.
const TRIPLE_ACTIVITIES: &[&str] = &["Baby-foot humain"];

/// Race activities: scored by placement 1 through 4.
const RACE_ACTIVITIES: &[&str] = &[
    "Ballon coop’",
    "Blind test",
    "Course en sac",
    "Foulard musical",
    "La rumeur",
    "La tour infernale",
    "Mission à l’aveugle",
    "Question pour un champion",
    "Teamwalk (Ski Géant)",
];

/// Free-score activities: the submitted value is the score.
const FREE_ACTIVITIES: &[&str] = &["Archery Tag", "Tyro Basket"];

/// Activities excluded from the record bonus.
const NO_RECORD_ACTIVITIES: &[&str] = &[
    "Foulard musical",
    "Jenga géant",
    "Morpion géant",
    "Tir croisé (électronique)",
    "Blind test",
    "La rumeur",
    "Question pour un champion",
];

/// What each activity's record measures.
const RECORD_LABELS: &[(&str, &str)] = &[
    ("Accronomètre", "Meilleur chrono (mm:ss ou s)"),
    ("Jenga géant", "Plus haute tour (cm)"),
    ("Morpion géant", "Victoires consécutives"),
    ("Combat de Sumo", "Victoire la plus rapide (s)"),
    ("Tir à la corde", "Victoire la plus rapide (s)"),
    ("Tir croisé (électronique)", "Score le plus élevé"),
    ("Baby-foot humain", "Score de victoire le plus large"),
    ("Ballon coop’", "Meilleur chrono (s)"),
    ("Blind test", "Plus grand nombre de bonnes réponses"),
    ("Course en sac", "Meilleur chrono (s)"),
    ("Foulard musical", "Derniers survivants (compte)"),
    ("La rumeur", "Chaîne la plus longue sans erreur"),
    ("La tour infernale", "Hauteur max (cm)"),
    ("Mission à l’aveugle", "Meilleur chrono (s)"),
    ("Question pour un champion", "Score le plus élevé"),
    ("Teamwalk (Ski Géant)", "Meilleur chrono (s)"),
    ("Archery Tag", "Cibles tombées (sur 5 joueurs)"),
    ("Tyro Basket", "Points d'équipe max"),
];

/// A catalog activity with everything the scoring pipeline needs to know
/// about it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Activity {
    pub name: String,
    pub category: Category,
    pub supports_record: bool,
    pub record_label: String,
}

/// Category of an activity. Anything not listed as duel, triple or race is
/// scored as a free activity.
pub fn category_of(activity: &str) -> Category {
    if DUEL_ACTIVITIES.contains(&activity) {
        Category::Duel
    } else if TRIPLE_ACTIVITIES.contains(&activity) {
        Category::Triple
    } else if RACE_ACTIVITIES.contains(&activity) {
        Category::Race
    } else {
        Category::Free
    }
}

/// Whether the activity can award the record bonus.
pub fn supports_record(activity: &str) -> bool {
    !NO_RECORD_ACTIVITIES.contains(&activity)
}

/// Description of what the activity's record measures.
pub fn record_label(activity: &str) -> &'static str {
    RECORD_LABELS
        .iter()
        .find(|(name, _)| *name == activity)
        .map(|(_, label)| *label)
        .unwrap_or("Record")
}

/// The full catalog in display order: duel, then triple, then race, then
/// free. Every listing view uses this order.
pub fn all() -> Vec<Activity> {
    DUEL_ACTIVITIES
        .iter()
        .chain(TRIPLE_ACTIVITIES)
        .chain(RACE_ACTIVITIES)
        .chain(FREE_ACTIVITIES)
        .map(|&name| Activity {
            name: name.to_string(),
            category: category_of(name),
            supports_record: supports_record(name),
            record_label: record_label(name).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_activities_resolve_to_their_category() {
        assert_eq!(category_of("Combat de Sumo"), Category::Duel);
        assert_eq!(category_of("Baby-foot humain"), Category::Triple);
        assert_eq!(category_of("Course en sac"), Category::Race);
        assert_eq!(category_of("Archery Tag"), Category::Free);
    }

    #[test]
    fn unknown_activity_defaults_to_free() {
        assert_eq!(category_of("Ping-pong"), Category::Free);
    }

    #[test]
    fn record_excluded_activities_do_not_support_records() {
        for name in NO_RECORD_ACTIVITIES {
            assert!(!supports_record(name), "{name} should not support records");
        }
        assert!(supports_record("Combat de Sumo"));
        assert!(supports_record("Tyro Basket"));
    }

    #[test]
    fn record_label_falls_back_for_unknown_activity() {
        assert_eq!(record_label("Jenga géant"), "Plus haute tour (cm)");
        assert_eq!(record_label("Ping-pong"), "Record");
    }

    #[test]
    fn catalog_is_ordered_duel_triple_race_free() {
        let catalog = all();
        assert_eq!(catalog.len(), 18);

        let boundaries: Vec<Category> = catalog.iter().map(|a| a.category).collect();
        let mut sorted = boundaries.clone();
        sorted.sort_by_key(|c| match c {
            Category::Duel => 0,
            Category::Triple => 1,
            Category::Race => 2,
            Category::Free => 3,
        });
        assert_eq!(boundaries, sorted, "catalog must group categories in display order");

        assert_eq!(catalog.first().unwrap().name, "Accronomètre");
        assert_eq!(catalog.last().unwrap().name, "Tyro Basket");
    }
}
