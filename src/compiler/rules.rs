use super::matching::Matched;
use super::ranges::TierFields;
use crate::flow::{FlowOption, FlowStep, OptionValue, PriceBudget, Selection, StepRole};
use crate::format::format_number;
use crate::narrative::Narrative;
use crate::output::{FilterValue, Filters, Metadata, MetadataEntry, keys};
use tracing::debug;

/// First-phase output: everything except the numeric tier bounds.
#[derive(Debug, Default)]
pub(crate) struct Draft {
    pub metadata: Metadata,
    pub filters: Filters,
    pub tiers: TierFields,
    pub narrative: Narrative,
}

impl Draft {
    /// Applies one matched step according to its role.
    pub(crate) fn apply(&mut self, step: &FlowStep, role: StepRole, matched: Matched<'_>) {
        let options = match matched {
            Matched::Raw(selection) => return self.apply_budget(step, selection),
            Matched::Options(options) => options,
        };
        let Some(first) = options.first().copied() else {
            return;
        };

        match role {
            StepRole::Category => {
                self.set_label(step, first.label.clone());
                self.set_filter(keys::CATEGORY, FilterValue::Value(first.value.clone()));
                self.narrative.category = Some(first.label.clone());
            }
            StepRole::Subcategory => {
                let labels = self.set_labels(step, &options);
                self.set_filter(keys::SUBCATEGORY, values_of(&options));
                self.narrative.subcategories = labels;
            }
            StepRole::Effects => {
                let labels = self.set_labels(step, &options);
                self.set_filter(keys::EFFECTS, values_of(&options));
                self.narrative.effects = labels;
            }
            StepRole::Potency => {
                let label = described(first, "");
                self.set_label(step, label.clone());
                self.tiers.potency = Some(first.value.clone());
                self.narrative.potency = Some(label);
            }
            StepRole::Dosage => {
                let label = described(first, " THC");
                self.set_label(step, label.clone());
                self.tiers.dosage = Some(first.value.clone());
                self.narrative.dosage = Some(label);
            }
            StepRole::Price => self.apply_price_option(step, first),
            StepRole::Generic if step.step_type.is_multi_valued() => {
                self.set_labels(step, &options);
                self.set_filter(&step.id, values_of(&options));
            }
            StepRole::Generic => {
                self.set_label(step, described(first, ""));
                self.set_filter(&step.id, FilterValue::Value(first.value.clone()));
            }
        }
    }

    /// Legacy price steps, whose options carry a price band or the no-preference sentinel.
    fn apply_price_option(&mut self, step: &FlowStep, option: &FlowOption) {
        let phrase = match &option.value {
            OptionValue::Range(band) if !band.is_unbounded() => {
                if let Some(min) = band.price_min {
                    self.set_filter(keys::PRICE_MIN, FilterValue::number(min));
                }
                if let Some(max) = band.price_max {
                    self.set_filter(keys::PRICE_MAX, FilterValue::number(max));
                }
                format!("priced {}", band)
            }
            OptionValue::Null | OptionValue::Range(_) => {
                "with no price range preference".to_string()
            }
            other => {
                self.set_filter(keys::PRICE, FilterValue::Value(other.clone()));
                format!("priced {}", option.label)
            }
        };
        self.set_price_phrase(step, phrase);
    }

    /// Price-selector steps hand over a raw budget object instead of an option value.
    fn apply_budget(&mut self, step: &FlowStep, selection: &Selection) {
        let phrase = match selection.budget() {
            Some(PriceBudget::NoMax) => "with no max budget".to_string(),
            Some(PriceBudget::SetMax { max: Some(max) }) => {
                self.set_filter(keys::PRICE_MAX, FilterValue::number(*max));
                format!("max budget ${}", format_number(*max))
            }
            Some(PriceBudget::SetMax { max: None }) | None => {
                debug!(step = %step.id, "price selector answer carries no usable budget; skipped");
                return;
            }
        };
        self.set_price_phrase(step, phrase);
    }

    fn set_price_phrase(&mut self, step: &FlowStep, phrase: String) {
        self.set_label(step, phrase.clone());
        self.narrative.price = Some(phrase);
    }

    fn set_label(&mut self, step: &FlowStep, label: String) {
        self.metadata
            .insert(step.id.clone(), MetadataEntry::Label(label));
    }

    fn set_labels(&mut self, step: &FlowStep, options: &[&FlowOption]) -> Vec<String> {
        let labels: Vec<String> = options.iter().map(|o| o.label.clone()).collect();
        self.metadata
            .insert(step.id.clone(), MetadataEntry::Labels(labels.clone()));
        labels
    }

    fn set_filter(&mut self, key: &str, value: FilterValue) {
        self.filters.insert(key.to_string(), value);
    }
}

/// `Label (description{suffix})`, or just the label when there is no description.
fn described(option: &FlowOption, suffix: &str) -> String {
    match &option.description {
        Some(description) => format!("{} ({}{})", option.label, description, suffix),
        None => option.label.clone(),
    }
}

fn values_of(options: &[&FlowOption]) -> FilterValue {
    FilterValue::Values(options.iter().map(|o| o.value.clone()).collect())
}
