//! Potency and dosage tier tables, and the second compilation phase that expands
//! qualitative tiers into numeric filter bounds.

use super::CompileOptions;
use crate::flow::{FlowOption, OptionValue};
use crate::output::{FilterValue, Filters, keys};
use tracing::debug;

/// A numeric band. `None` on either side means unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TierRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl TierRange {
    const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// One entry of a tier table, with the text the wizard shows for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub range: TierRange,
}

impl Tier {
    pub fn to_option(&self) -> FlowOption {
        FlowOption::new(self.value, self.label, OptionValue::text(self.value))
            .with_description(self.description)
    }
}

#[rustfmt::skip]
static STANDARD_POTENCY: [Tier; 5] = [
    Tier { value: "mild", label: "Mild", description: "<13%", range: TierRange::new(None, Some(13.0)) },
    Tier { value: "balanced", label: "Balanced", description: "13-18%", range: TierRange::new(Some(13.0), Some(18.0)) },
    Tier { value: "moderate", label: "Moderate", description: "18-22%", range: TierRange::new(Some(18.0), Some(22.0)) },
    Tier { value: "strong", label: "Strong", description: "22-28%", range: TierRange::new(Some(22.0), Some(28.0)) },
    Tier { value: "very-strong", label: "Very Strong", description: ">28%", range: TierRange::new(Some(28.0), None) },
];

#[rustfmt::skip]
static CONCENTRATED_POTENCY: [Tier; 5] = [
    Tier { value: "mild", label: "Mild", description: "<66%", range: TierRange::new(None, Some(66.0)) },
    Tier { value: "balanced", label: "Balanced", description: "66-75%", range: TierRange::new(Some(66.0), Some(75.0)) },
    Tier { value: "moderate", label: "Moderate", description: "75-85%", range: TierRange::new(Some(75.0), Some(85.0)) },
    Tier { value: "strong", label: "Strong", description: "85-90%", range: TierRange::new(Some(85.0), Some(90.0)) },
    Tier { value: "very-strong", label: "Very Strong", description: ">90%", range: TierRange::new(Some(90.0), None) },
];

#[rustfmt::skip]
static DOSAGE: [Tier; 3] = [
    Tier { value: "low", label: "Low", description: "<5mg", range: TierRange::new(Some(1.0), Some(4.99)) },
    Tier { value: "medium", label: "Medium", description: "5-9mg", range: TierRange::new(Some(5.0), Some(9.99)) },
    Tier { value: "high", label: "High", description: "10mg", range: TierRange::new(Some(10.0), None) },
];

/// Categories that use the concentrated potency scale unless configured otherwise.
pub const DEFAULT_CONCENTRATED_CATEGORIES: [&str; 2] = ["vaporizers", "concentrates"];

/// THC percentage scale. Flower-like products and extracts live on very different bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotencyScale {
    /// Flower, prerolls and anything without a category.
    Standard,
    /// Vaporizers and concentrates.
    Concentrated,
}

impl PotencyScale {
    pub fn tiers(self) -> &'static [Tier] {
        match self {
            PotencyScale::Standard => &STANDARD_POTENCY,
            PotencyScale::Concentrated => &CONCENTRATED_POTENCY,
        }
    }

    /// Looks up a tier value. Unknown tiers yield an unbounded range.
    pub fn range(self, tier: &str) -> TierRange {
        lookup(self.tiers(), tier)
    }

    /// Options for a potency step showing this scale's bands.
    pub fn options(self) -> Vec<FlowOption> {
        self.tiers().iter().map(Tier::to_option).collect()
    }
}

/// Milligrams-per-piece band for a dosage tier. Unknown tiers yield an unbounded range.
pub fn dosage_range(tier: &str) -> TierRange {
    lookup(&DOSAGE, tier)
}

/// Options for a dosage step.
pub fn dosage_options() -> Vec<FlowOption> {
    DOSAGE.iter().map(Tier::to_option).collect()
}

fn lookup(table: &[Tier], tier: &str) -> TierRange {
    table
        .iter()
        .find(|t| t.value == tier)
        .map(|t| t.range)
        .unwrap_or_default()
}

/// Qualitative tier answers carried from the first phase to the second.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TierFields {
    pub potency: Option<OptionValue>,
    pub dosage: Option<OptionValue>,
}

/// Second phase: chooses the potency scale from the final category filter and
/// adds numeric bounds for each tier answer.
///
/// An unrecognized tier adds nothing; the qualitative answer never reaches the filters.
pub(crate) fn expand_tiers(
    mut filters: Filters,
    tiers: &TierFields,
    options: &CompileOptions,
) -> Filters {
    if let Some(tier) = &tiers.potency {
        let category = filters.get(keys::CATEGORY).and_then(FilterValue::as_text);
        let scale = options.potency_scale(category);
        let range = tier.as_text().map(|t| scale.range(t)).unwrap_or_default();
        if range.is_unbounded() {
            debug!(tier = %tier, ?scale, "potency tier has no range; no THC percentage bounds added");
        }
        insert_range(
            &mut filters,
            range,
            keys::THC_PERCENTAGE_MIN,
            keys::THC_PERCENTAGE_MAX,
        );
    }

    if let Some(tier) = &tiers.dosage {
        let range = tier.as_text().map(dosage_range).unwrap_or_default();
        if range.is_unbounded() {
            debug!(tier = %tier, "dosage tier has no range; no per-unit bounds added");
        }
        insert_range(
            &mut filters,
            range,
            keys::THC_PER_UNIT_MG_MIN,
            keys::THC_PER_UNIT_MG_MAX,
        );
    }

    filters
}

fn insert_range(filters: &mut Filters, range: TierRange, min_key: &str, max_key: &str) {
    if let Some(min) = range.min {
        filters.insert(min_key.to_string(), FilterValue::number(min));
    }
    if let Some(max) = range.max {
        filters.insert(max_key.to_string(), FilterValue::number(max));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_depends_on_category() {
        let options = CompileOptions::default();
        assert_eq!(
            options.potency_scale(Some("vaporizers")),
            PotencyScale::Concentrated
        );
        assert_eq!(
            options.potency_scale(Some("concentrates")),
            PotencyScale::Concentrated
        );
        assert_eq!(options.potency_scale(Some("flower")), PotencyScale::Standard);
        assert_eq!(options.potency_scale(None), PotencyScale::Standard);
    }

    #[test]
    fn potency_table_bounds() {
        let strong = PotencyScale::Concentrated.range("strong");
        assert_eq!(strong, TierRange::new(Some(85.0), Some(90.0)));

        let mild = PotencyScale::Standard.range("mild");
        assert_eq!(mild, TierRange::new(None, Some(13.0)));

        let very_strong = PotencyScale::Standard.range("very-strong");
        assert_eq!(very_strong, TierRange::new(Some(28.0), None));

        assert!(PotencyScale::Standard.range("extreme").is_unbounded());
    }

    #[test]
    fn dosage_table_bounds() {
        assert_eq!(dosage_range("low"), TierRange::new(Some(1.0), Some(4.99)));
        assert_eq!(dosage_range("medium"), TierRange::new(Some(5.0), Some(9.99)));
        assert_eq!(dosage_range("high"), TierRange::new(Some(10.0), None));
        assert!(dosage_range("huge").is_unbounded());
    }

    #[test]
    fn expansion_uses_final_category() {
        let mut filters = Filters::new();
        filters.insert(
            keys::CATEGORY.to_string(),
            FilterValue::Value(OptionValue::text("concentrates")),
        );
        let tiers = TierFields {
            potency: Some(OptionValue::text("balanced")),
            dosage: None,
        };

        let filters = expand_tiers(filters, &tiers, &CompileOptions::default());
        assert_eq!(
            filters.get(keys::THC_PERCENTAGE_MIN),
            Some(&FilterValue::number(66.0))
        );
        assert_eq!(
            filters.get(keys::THC_PERCENTAGE_MAX),
            Some(&FilterValue::number(75.0))
        );
    }

    #[test]
    fn unknown_tiers_add_nothing() {
        let tiers = TierFields {
            potency: Some(OptionValue::text("nuclear")),
            dosage: Some(OptionValue::Number(3.0)),
        };
        let filters = expand_tiers(Filters::new(), &tiers, &CompileOptions::default());
        assert!(filters.is_empty());
    }

    #[test]
    fn open_ended_tiers_emit_one_bound() {
        let tiers = TierFields {
            potency: Some(OptionValue::text("mild")),
            dosage: Some(OptionValue::text("high")),
        };
        let filters = expand_tiers(Filters::new(), &tiers, &CompileOptions::default());
        assert!(!filters.contains_key(keys::THC_PERCENTAGE_MIN));
        assert_eq!(
            filters.get(keys::THC_PERCENTAGE_MAX),
            Some(&FilterValue::number(13.0))
        );
        assert_eq!(
            filters.get(keys::THC_PER_UNIT_MG_MIN),
            Some(&FilterValue::number(10.0))
        );
        assert!(!filters.contains_key(keys::THC_PER_UNIT_MG_MAX));
    }

    #[test]
    fn scale_options_carry_descriptions() {
        let options = PotencyScale::Concentrated.options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[3].label, "Strong");
        assert_eq!(options[3].description.as_deref(), Some("85-90%"));
        assert_eq!(options[3].value, OptionValue::text("strong"));
        assert_eq!(dosage_options()[0].description.as_deref(), Some("<5mg"));
    }
}
