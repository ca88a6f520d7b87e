//! Record Selector: filters the snapshot to actively engaged personnel.

use crate::models::SourceRecord;

/// Selects the records describing actively engaged personnel.
///
/// The result is the active employees (in snapshot order) followed by the
/// active externals (in snapshot order). When there are no active externals
/// the external group is omitted entirely rather than appended empty. A
/// record whose facets qualify under both predicates appears in both
/// groups, since each group is filtered independently over the full input.
///
/// Malformed records never error: an absent facet or status simply fails
/// the predicate.
///
/// # Examples
///
/// ```
/// use utilisation_table::models::SourceRecord;
/// use utilisation_table::pipeline::select_active;
///
/// let records: Vec<SourceRecord> = serde_json::from_str(
///     r#"[
///         {"employees": {"name": "A", "statusAggregation": {"status": "Aktiv"}}},
///         {"employees": {"name": "B", "statusAggregation": {"status": "Inaktiv"}}}
///     ]"#,
/// ).unwrap();
///
/// let selected = select_active(&records);
/// assert_eq!(selected.len(), 1);
/// ```
pub fn select_active(records: &[SourceRecord]) -> Vec<SourceRecord> {
    let active_employees = records
        .iter()
        .filter(|record| record.is_active_employee())
        .cloned();

    let active_externals: Vec<SourceRecord> = records
        .iter()
        .filter(|record| record.is_active_external())
        .cloned()
        .collect();

    if active_externals.is_empty() {
        active_employees.collect()
    } else {
        active_employees.chain(active_externals).collect()
    }
}
