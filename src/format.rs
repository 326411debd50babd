/// Renders a number the way it reads in a sentence: whole values without a
/// fractional part, everything else with its shortest exact representation.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_finite() && n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}
