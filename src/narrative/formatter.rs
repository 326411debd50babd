use super::Narrative;
use itertools::Itertools;

/// Assembles the natural-language query from a `Narrative`.
pub struct QueryFormatter;

impl QueryFormatter {
    /// Builds the query sentence. Sections appear in a fixed order and only when present:
    /// opening, effects, potency, dosage, price.
    pub fn format(narrative: &Narrative) -> String {
        let mut query = String::from("Looking for ");

        if !narrative.subcategories.is_empty() {
            query.push_str(&format!("{} edibles", join_labels(&narrative.subcategories)));
        } else if let Some(category) = &narrative.category {
            query.push_str(&format!("{} products", category));
        } else {
            query.push_str("products");
        }

        if !narrative.effects.is_empty() {
            let verb = if narrative.effects.len() == 1 {
                "makes"
            } else {
                "make"
            };
            query.push_str(&format!(
                " that {} me feel {}",
                verb,
                join_labels(&narrative.effects)
            ));
        }

        if let Some(potency) = &narrative.potency {
            query.push_str(&format!(", with {} THC percentage", potency));
        }

        if let Some(dosage) = &narrative.dosage {
            query.push_str(&format!(", with {} dosage per piece", dosage));
        }

        if let Some(price) = &narrative.price {
            query.push_str(&format!(", {}", price));
        }

        query
    }
}

/// Joins labels as `A`, `A and B`, or `A, B and C` (no comma before the final "and").
pub fn join_labels(labels: &[String]) -> String {
    match labels {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.iter().join(", "), last),
    }
}
