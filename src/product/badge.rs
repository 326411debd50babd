use super::Product;
use super::fraction::oz_fraction;
use crate::format::format_number;
use serde::Serialize;

/// THC strength text, with an optional qualifier such as `per piece` or `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThcLabel {
    pub value: String,
    pub label: Option<String>,
}

/// A stacked badge: a small top label, the value, and an optional sublabel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub top_label: String,
    pub value: String,
    pub sublabel: Option<String>,
}

impl Badge {
    fn new(top_label: &str, value: String, sublabel: Option<&str>) -> Self {
        Self {
            top_label: top_label.to_string(),
            value,
            sublabel: sublabel.map(str::to_string),
        }
    }
}

fn mg(n: f64) -> String {
    format!("{}mg", format_number(n))
}

fn positive(n: Option<f64>) -> Option<f64> {
    n.filter(|v| *v > 0.0)
}

/// THC text for a product card.
///
/// Chocolates are dosed by the piece, other edibles show per-piece milligrams, drinks
/// show their total, and everything else shows a whole-number percentage.
pub fn thc_label(product: &Product) -> Option<ThcLabel> {
    let category = product.category_key();
    let subcategory = product.subcategory_key();
    let title = product.title_key();
    let is_edible = category == "edibles";

    if is_edible && (subcategory.contains("chocolate") || title.contains("chocolate")) {
        return Some(ThcLabel {
            value: "1-10mg".to_string(),
            label: Some("per piece".to_string()),
        });
    }

    if is_edible {
        if let Some(per_unit) = product.thc_per_unit_mg {
            return Some(ThcLabel {
                value: mg(per_unit),
                label: Some("per piece".to_string()),
            });
        }
        if subcategory.contains("drink") || title.contains("drink") {
            if let Some(total) = product.thc_total_mg {
                return Some(ThcLabel {
                    value: mg(total),
                    label: Some("total".to_string()),
                });
            }
        }
    }

    product.thc_percentage.map(|percentage| ThcLabel {
        value: format!("{}%", percentage.round() as i64),
        label: None,
    })
}

/// CBD badge, shown only when the product carries a positive CBD amount.
pub fn cbd_badge(product: &Product) -> Option<Badge> {
    let category = product.category_key();

    if category == "edibles" {
        if let Some(per_unit) = positive(product.cbd_per_unit_mg) {
            return Some(Badge::new("CBD", mg(per_unit), Some("per piece")));
        }
    }

    if category == "cbd" || category == "topicals" {
        if let Some(total) = positive(product.cbd_total_mg) {
            return Some(Badge::new("CBD", mg(total), Some("total")));
        }
    }

    positive(product.cbd_percentage)
        .map(|percentage| Badge::new("CBD", format!("{}%", percentage.round() as i64), None))
}

/// Weight badge: ounces for flower, total THC for edibles.
pub fn weight_badge(product: &Product) -> Option<Badge> {
    match product.category_key().as_str() {
        "flower" => positive(product.total_weight_ounce)
            .map(|oz| Badge::new("WT", oz_fraction(oz), None)),
        "edibles" => {
            if let Some(total) = positive(product.thc_total_mg) {
                return Some(Badge::new("TOTAL", mg(total), Some("THC")));
            }
            let pack = positive(product.pack_count)?;
            let per_unit = positive(product.thc_per_unit_mg)?;
            Some(Badge::new("TOTAL", mg(pack * per_unit), Some("THC")))
        }
        _ => None,
    }
}
