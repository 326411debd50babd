use crate::flow::OptionValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display strings keyed by step id.
pub type Metadata = BTreeMap<String, MetadataEntry>;

/// Constraints for the downstream search backend, keyed by filter name.
pub type Filters = BTreeMap<String, FilterValue>;

/// Filter keys produced by the step-specific rules.
pub mod keys {
    pub const CATEGORY: &str = "category";
    pub const SUBCATEGORY: &str = "subcategory";
    pub const EFFECTS: &str = "effects";
    pub const PRICE: &str = "price";
    pub const PRICE_MIN: &str = "price_min";
    pub const PRICE_MAX: &str = "price_max";
    pub const THC_PERCENTAGE_MIN: &str = "thc_percentage_min";
    pub const THC_PERCENTAGE_MAX: &str = "thc_percentage_max";
    pub const THC_PER_UNIT_MG_MIN: &str = "thc_per_unit_mg_min";
    pub const THC_PER_UNIT_MG_MAX: &str = "thc_per_unit_mg_max";
}

/// The result of compiling one selection snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformedMetadata {
    pub metadata: Metadata,
    pub query: String,
    pub filters: Filters,
}

/// A step's display summary: one label for single-valued steps, a list for multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataEntry {
    Labels(Vec<String>),
    Label(String),
}

impl MetadataEntry {
    pub fn as_label(&self) -> Option<&str> {
        match self {
            MetadataEntry::Label(label) => Some(label),
            MetadataEntry::Labels(_) => None,
        }
    }

    pub fn as_labels(&self) -> Option<&[String]> {
        match self {
            MetadataEntry::Labels(labels) => Some(labels),
            MetadataEntry::Label(_) => None,
        }
    }
}

/// A single filter constraint: one value or a list of accepted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Values(Vec<OptionValue>),
    Value(OptionValue),
}

impl FilterValue {
    pub fn number(n: f64) -> Self {
        FilterValue::Value(OptionValue::Number(n))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Value(value) => value.as_number(),
            FilterValue::Values(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Value(value) => value.as_text(),
            FilterValue::Values(_) => None,
        }
    }
}

impl TransformedMetadata {
    pub fn label(&self, step_id: &str) -> Option<&str> {
        self.metadata.get(step_id).and_then(MetadataEntry::as_label)
    }

    pub fn labels(&self, step_id: &str) -> Option<&[String]> {
        self.metadata.get(step_id).and_then(MetadataEntry::as_labels)
    }

    pub fn filter_number(&self, key: &str) -> Option<f64> {
        self.filters.get(key).and_then(FilterValue::as_number)
    }

    pub fn filter_text(&self, key: &str) -> Option<&str> {
        self.filters.get(key).and_then(FilterValue::as_text)
    }
}
