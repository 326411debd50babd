use crate::error::FlowLoadError;
use crate::format::format_number;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use tracing::debug;

/// The semantic payload of a `FlowOption`, and of the raw values a wizard collects.
///
/// The variants form a closed set so matching and range expansion stay exhaustive.
/// In JSON the value appears bare: `null`, `"strong"`, `4`, or `{"price_min": 25, "price_max": 50}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// The "no preference" sentinel.
    #[default]
    Null,
    Text(String),
    Number(f64),
    Range(PriceBand),
}

impl OptionValue {
    pub fn text(value: impl Into<String>) -> Self {
        OptionValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<PriceBand> for OptionValue {
    fn from(value: PriceBand) -> Self {
        OptionValue::Range(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Null => write!(f, "null"),
            OptionValue::Text(s) => write!(f, "{}", s),
            OptionValue::Number(n) => write!(f, "{}", format_number(*n)),
            OptionValue::Range(band) => write!(f, "{}", band),
        }
    }
}

/// A price band carried by a legacy price option. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PriceBand {
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
}

impl PriceBand {
    pub fn new(price_min: Option<f64>, price_max: Option<f64>) -> Self {
        Self {
            price_min,
            price_max,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.price_min.is_none() && self.price_max.is_none()
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min = self.price_min.map_or("0".to_string(), format_number);
        match self.price_max {
            Some(max) => write!(f, "${}-{}", min, format_number(max)),
            None => write!(f, "${}+", min),
        }
    }
}

/// The raw object a price-selector step hands over: `{"mode": "no-max"}` or
/// `{"mode": "set-max", "max": 40}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum PriceBudget {
    NoMax,
    SetMax {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
}

/// What the wizard recorded for one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    Many(Vec<OptionValue>),
    Budget(PriceBudget),
    One(OptionValue),
}

impl Selection {
    /// The selected values as an ordered sequence; scalars become a one-element slice.
    /// A budget carries no option values.
    pub fn values(&self) -> &[OptionValue] {
        match self {
            Selection::Many(values) => values,
            Selection::One(value) => std::slice::from_ref(value),
            Selection::Budget(_) => &[],
        }
    }

    pub fn budget(&self) -> Option<&PriceBudget> {
        match self {
            Selection::Budget(budget) => Some(budget),
            _ => None,
        }
    }
}

impl From<OptionValue> for Selection {
    fn from(value: OptionValue) -> Self {
        Selection::One(value)
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::One(value.into())
    }
}

impl From<Vec<OptionValue>> for Selection {
    fn from(values: Vec<OptionValue>) -> Self {
        Selection::Many(values)
    }
}

impl From<PriceBudget> for Selection {
    fn from(budget: PriceBudget) -> Self {
        Selection::Budget(budget)
    }
}

/// A snapshot of the wizard's answers, keyed by step id.
///
/// Deserializing reads each answer on its own: an answer with an unreadable shape is
/// dropped and the rest of the snapshot is kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Selections(BTreeMap<String, Selection>);

impl<'de> Deserialize<'de> for Selections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(step_id, value)| {
                match serde_json::from_value::<Selection>(value) {
                    Ok(selection) => Some((step_id, selection)),
                    Err(e) => {
                        debug!(step = %step_id, error = %e, "unreadable selection; skipped");
                        None
                    }
                }
            })
            .collect())
    }
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a selection snapshot from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, FlowLoadError> {
        serde_json::from_str(json).map_err(|e| FlowLoadError::SelectionsParseError(e.to_string()))
    }

    /// Load a selection snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, FlowLoadError> {
        let content = fs::read_to_string(path).map_err(|e| FlowLoadError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Records an answer, replacing any earlier answer for the same step.
    pub fn insert(&mut self, step_id: impl Into<String>, selection: impl Into<Selection>) {
        self.0.insert(step_id.into(), selection.into());
    }

    /// Builder-style variant of `insert`.
    pub fn with(mut self, step_id: impl Into<String>, selection: impl Into<Selection>) -> Self {
        self.insert(step_id, selection);
        self
    }

    pub fn get(&self, step_id: &str) -> Option<&Selection> {
        self.0.get(step_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Selection)> {
        self.0.iter()
    }
}

impl<K: Into<String>, S: Into<Selection>> FromIterator<(K, S)> for Selections {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, s)| (k.into(), s.into()))
                .collect(),
        )
    }
}
