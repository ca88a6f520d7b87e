//! Display formatting for percentages and net earnings.

use serde_json::Value;

use super::coerce::{display_number, display_value};

/// Formats a utilisation fraction as a percentage string.
///
/// The fraction is multiplied by 100 and rendered raw: no rounding and no
/// fixed decimal places are applied, so floating-point artefacts surface in
/// the output verbatim, and NaN renders as `"NaN %"`.
///
/// # Examples
///
/// ```
/// use utilisation_table::pipeline::format_percent;
///
/// assert_eq!(format_percent(0.5), "50 %");
/// assert_eq!(format_percent(0.29), "28.999999999999996 %");
/// assert_eq!(format_percent(f64::NAN), "NaN %");
/// ```
pub fn format_percent(rate: f64) -> String {
    format!("{} %", display_number(rate * 100.0))
}

/// Formats a monthly salary as the net-earnings cell text.
///
/// A present salary is rendered verbatim (numbers and numeric strings keep
/// their snapshot spelling); an absent or null salary renders as
/// `"N/A EUR"`. A present zero is a real value and renders as `"0 EUR"`.
pub fn format_net_earnings(salary: Option<&Value>) -> String {
    match salary {
        None | Some(Value::Null) => "N/A EUR".to_string(),
        Some(value) => format!("{} EUR", display_value(Some(value))),
    }
}
