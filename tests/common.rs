//! Common test utilities for building guided flows and selections.
use annai::prelude::*;

/// The product-type question. Labels differ from values on purpose (`Vape Cart` -> `vaporizers`).
#[allow(dead_code)]
pub fn category_step() -> FlowStep {
    FlowStep::new(
        "category",
        StepType::SingleSelect,
        vec![
            FlowOption::new("flower", "Flower", "flower"),
            FlowOption::new("prerolls", "Prerolls", "prerolls"),
            FlowOption::new("vape-cart", "Vape Cart", "vaporizers"),
            FlowOption::new("edible", "Edible", "edibles"),
            FlowOption::new("concentrates", "Concentrates", "concentrates"),
        ],
    )
}

#[allow(dead_code)]
pub fn effects_step() -> FlowStep {
    let effects = [
        "Calm",
        "Creative",
        "Energized",
        "Euphoric",
        "Focused",
        "Relaxed",
        "Sedated",
        "Sleepy",
        "Stimulated",
        "Uplifted",
    ];
    FlowStep::new(
        "effects",
        StepType::MultiSelect,
        effects
            .iter()
            .map(|label| {
                let value = label.to_lowercase();
                FlowOption::new(value.clone(), *label, value)
            })
            .collect(),
    )
    .with_max_selections(2)
}

/// Potency question showing the concentrated bands, as the wizard does after a vape pick.
#[allow(dead_code)]
pub fn potency_step() -> FlowStep {
    FlowStep::new(
        "thc-percentage",
        StepType::SingleSelect,
        PotencyScale::Concentrated.options(),
    )
}

#[allow(dead_code)]
pub fn legacy_price_step() -> FlowStep {
    FlowStep::new(
        "price",
        StepType::SingleSelect,
        vec![
            FlowOption::new("no-preference", "No Preference", OptionValue::Null),
            FlowOption::new("low", "$0-25", PriceBand::new(Some(0.0), Some(25.0))),
            FlowOption::new("medium", "$25-50", PriceBand::new(Some(25.0), Some(50.0))),
            FlowOption::new("high", "$50-75", PriceBand::new(Some(50.0), Some(75.0))),
            FlowOption::new("premium", "$75+", PriceBand::new(Some(75.0), None)),
        ],
    )
}

#[allow(dead_code)]
pub fn subcategory_step() -> FlowStep {
    FlowStep::new(
        "subcategory",
        StepType::MultiSelect,
        vec![
            FlowOption::new("chews", "Chews", "Chews"),
            FlowOption::new("chocolates", "Chocolates", "Chocolates"),
            FlowOption::new("drinks", "Drinks", "Drinks"),
            FlowOption::new("gummies", "Gummies", "Gummies"),
        ],
    )
    .with_max_selections(2)
}

#[allow(dead_code)]
pub fn dosage_step() -> FlowStep {
    FlowStep::new("dosage-per-piece", StepType::Slider, dosage_options())
}

/// Category, effects, potency and legacy price.
#[allow(dead_code)]
pub fn create_main_flow() -> FlowDefinition {
    FlowDefinition::new(vec![
        category_step(),
        effects_step(),
        potency_step(),
        legacy_price_step(),
    ])
}

/// Category, subcategory, effects, dosage and a price selector.
#[allow(dead_code)]
pub fn create_edible_flow() -> FlowDefinition {
    FlowDefinition::new(vec![
        category_step(),
        subcategory_step(),
        effects_step(),
        dosage_step(),
        FlowStep::new("price", StepType::PriceSelector, vec![]),
    ])
}

#[allow(dead_code)]
pub fn texts(values: &[&str]) -> Selection {
    Selection::Many(values.iter().map(|v| OptionValue::text(*v)).collect())
}

/// The same main flow in its JSON authoring format.
#[allow(dead_code)]
pub const MAIN_FLOW_JSON: &str = r#"{
  "steps": [
    {
      "id": "category",
      "title": "What product type are you interested in?",
      "subtitle": "(Select one)",
      "type": "single-select",
      "required": true,
      "options": [
        { "id": "flower", "label": "Flower", "value": "flower" },
        { "id": "vape-cart", "label": "Vape Cart", "value": "vaporizers" }
      ]
    },
    {
      "id": "effects",
      "title": "How do you want to feel?",
      "type": "multi-select",
      "maxSelections": 2,
      "options": [
        { "id": "focused", "label": "Focused", "value": "focused" },
        { "id": "relaxed", "label": "Relaxed", "value": "relaxed" }
      ]
    },
    {
      "id": "thc-percentage",
      "title": "How strong?",
      "type": "single-select",
      "options": [
        { "id": "strong", "label": "Strong", "value": "strong", "description": "85-90%" }
      ]
    },
    {
      "id": "price",
      "title": "Price range",
      "type": "single-select",
      "options": [
        { "id": "no-preference", "label": "No Preference", "value": null },
        { "id": "medium", "label": "$25-50", "value": { "price_min": 25, "price_max": 50 } }
      ]
    }
  ]
}"#;
