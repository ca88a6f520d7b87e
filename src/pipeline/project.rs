//! Row Projector: turns selected records into formatted display rows.

use serde_json::Value;

use crate::models::{DisplayRow, PersonFacet, SourceRecord};

use super::coerce::to_number;
use super::format::{format_net_earnings, format_percent};

/// The month labels projected into their own columns, matched literally
/// against the sparse monthly breakdown.
pub const MONTH_COLUMNS: [&str; 3] = ["May", "June", "July"];

/// Projects records into display rows, one row per record, order preserved.
///
/// Projection is total: it never drops a record and never errors. Each
/// record's employee facet takes precedence over its external facet; a
/// record with neither facet projects as if every field were absent. Field
/// fallbacks:
///
/// - absent name → the literal `"undefined"`
/// - absent trailing/year-to-date rate → NaN → `"NaN %"`
/// - absent monthly-breakdown entry or rate → `"0 %"`
/// - absent salary → `"N/A EUR"`
///
/// # Examples
///
/// ```
/// use utilisation_table::models::SourceRecord;
/// use utilisation_table::pipeline::project_rows;
///
/// let records: Vec<SourceRecord> = serde_json::from_str(
///     r#"[{
///         "employees": {
///             "name": "Lena Kern",
///             "statusAggregation": { "status": "Aktiv" },
///             "workforceUtilisation": { "utilisationRateLastTwelveMonths": 0.5 }
///         }
///     }]"#,
/// ).unwrap();
///
/// let rows = project_rows(&records);
/// assert_eq!(rows[0].person, "Lena Kern");
/// assert_eq!(rows[0].past_twelve_months, "50 %");
/// assert_eq!(rows[0].may, "0 %");
/// assert_eq!(rows[0].net_earnings_prev_month, "N/A EUR");
/// ```
pub fn project_rows(records: &[SourceRecord]) -> Vec<DisplayRow> {
    records.iter().map(project_row).collect()
}

fn project_row(record: &SourceRecord) -> DisplayRow {
    let facet = record.facet();

    let person = facet
        .and_then(|f| f.name.clone())
        .unwrap_or_else(|| "undefined".to_string());

    let utilisation = facet.and_then(|f| f.workforce_utilisation.as_ref());
    let past_twelve_months = to_number(
        utilisation.and_then(|u| u.utilisation_rate_last_twelve_months.as_ref()),
    );
    let year_to_date =
        to_number(utilisation.and_then(|u| u.utilisation_rate_year_to_date.as_ref()));

    let [may, june, july] = MONTH_COLUMNS.map(|month| monthly_rate(facet, month));

    let salary = facet
        .and_then(|f| f.status_aggregation.as_ref())
        .and_then(|agg| agg.monthly_salary.as_ref());

    DisplayRow {
        person,
        past_twelve_months: format_percent(past_twelve_months),
        year_to_date: format_percent(year_to_date),
        may: format_percent(may),
        june: format_percent(june),
        july: format_percent(july),
        net_earnings_prev_month: format_net_earnings(salary),
    }
}

/// Looks up the rate for one month label in the sparse breakdown.
///
/// A missing breakdown, missing entry, or entry without a rate all fall
/// back to 0 (the snapshot's own "0.00" fallback coerced numerically). A
/// present but unparsable rate still coerces to NaN.
fn monthly_rate(facet: Option<&PersonFacet>, month: &str) -> f64 {
    let rate: Option<&Value> = facet
        .and_then(|f| f.workforce_utilisation.as_ref())
        .and_then(|u| u.last_three_months_individually.as_deref())
        .and_then(|months| {
            months
                .iter()
                .find(|entry| entry.month.as_deref() == Some(month))
        })
        .and_then(|entry| entry.utilisation_rate.as_ref());

    match rate {
        Some(value) => to_number(Some(value)),
        None => 0.0,
    }
}
