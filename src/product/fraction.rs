/// Eighths of an ounce, largest first. Ties resolve to the earlier entry, except that
/// `1/8` is the starting candidate.
const FRACTIONS: [(f64, &str); 8] = [
    (1.0, "1"),
    (0.875, "7/8"),
    (0.75, "3/4"),
    (0.625, "5/8"),
    (0.5, "1/2"),
    (0.375, "3/8"),
    (0.25, "1/4"),
    (0.125, "1/8"),
];

fn nearest_fraction(decimal: f64) -> &'static str {
    let (mut best, mut best_diff) = (FRACTIONS[7].1, (decimal - FRACTIONS[7].0).abs());
    for (value, text) in FRACTIONS {
        let diff = (decimal - value).abs();
        if diff < best_diff {
            best = text;
            best_diff = diff;
        }
    }
    best
}

/// Formats a weight in ounces using the nearest eighth, e.g. `1/8 oz` or `1 1/2 oz`.
pub fn oz_fraction(oz: f64) -> String {
    if oz >= 1.0 {
        let whole = oz.floor();
        let remainder = oz - whole;
        if remainder < 0.01 {
            format!("{} oz", whole as i64)
        } else {
            format!("{} {} oz", whole as i64, nearest_fraction(remainder))
        }
    } else {
        format!("{} oz", nearest_fraction(oz))
    }
}
