//! Badge text for product cards: THC strength, CBD content and package weight.

mod badge;
mod fraction;

pub use badge::{Badge, ThcLabel, cbd_badge, thc_label, weight_badge};
pub use fraction::oz_fraction;

use serde::{Deserialize, Serialize};

/// The product fields badge formatting reads. Every field is optional in catalog data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thc_percentage: Option<f64>,
    #[serde(default)]
    pub thc_per_unit_mg: Option<f64>,
    #[serde(default)]
    pub thc_total_mg: Option<f64>,
    #[serde(default)]
    pub cbd_percentage: Option<f64>,
    #[serde(default)]
    pub cbd_per_unit_mg: Option<f64>,
    #[serde(default)]
    pub cbd_total_mg: Option<f64>,
    #[serde(default)]
    pub total_weight_ounce: Option<f64>,
    #[serde(default)]
    pub pack_count: Option<f64>,
}

impl Product {
    fn category_key(&self) -> String {
        lowercase(&self.category)
    }

    fn subcategory_key(&self) -> String {
        lowercase(&self.subcategory)
    }

    fn title_key(&self) -> String {
        lowercase(&self.title)
    }
}

fn lowercase(field: &Option<String>) -> String {
    field.as_deref().unwrap_or_default().to_lowercase()
}
