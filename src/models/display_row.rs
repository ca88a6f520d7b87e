//! Display row model.

use serde::{Deserialize, Serialize};

/// One fully formatted row handed to the table renderer.
///
/// Every field is a pre-formatted string: percentages carry a ` %` suffix,
/// net earnings an ` EUR` suffix. Serde field names match the renderer's
/// column accessor keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    /// The person's full name.
    pub person: String,
    /// Utilisation over the trailing twelve months, e.g. "83 %".
    #[serde(rename = "past12Months")]
    pub past_twelve_months: String,
    /// Utilisation for the year to date.
    #[serde(rename = "y2d")]
    pub year_to_date: String,
    /// Utilisation for May.
    pub may: String,
    /// Utilisation for June.
    pub june: String,
    /// Utilisation for July.
    pub july: String,
    /// Net earnings for the previous month, e.g. "4100 EUR".
    pub net_earnings_prev_month: String,
}
