mod formatter;

pub use formatter::{QueryFormatter, join_labels};

/// The query-relevant pieces of a selection snapshot, one slot per narrative section.
///
/// Each slot holds display text exactly as it appears in the metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narrative {
    pub category: Option<String>,
    pub subcategories: Vec<String>,
    pub effects: Vec<String>,
    pub potency: Option<String>,
    pub dosage: Option<String>,
    pub price: Option<String>,
}
