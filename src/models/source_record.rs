//! Source record model and related types.
//!
//! This module defines the snapshot-shaped input structures. Every field is
//! optional: the snapshot is consumed null-safely, and records that are
//! missing pieces simply fail predicates or fall back to absence sentinels
//! downstream. Rate and salary fields are kept as raw [`serde_json::Value`]s
//! because the snapshot mixes numbers and numeric strings; coercion happens
//! in the projection pipeline, never at parse time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The status literal marking an actively engaged person.
///
/// Matched exactly (case-sensitive); the snapshot carries the localized
/// literal and no normalization is applied.
pub const ACTIVE_STATUS: &str = "Aktiv";

/// One personnel record from the snapshot.
///
/// A record optionally carries an employee facet, an external-worker facet,
/// both, or neither. Both facets share the [`PersonFacet`] shape; they
/// differ only in which status carrier is consulted by the activity
/// predicates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceRecord {
    /// The direct-employee facet, if this record describes an employee.
    #[serde(rename = "employees", skip_serializing_if = "Option::is_none")]
    pub employee: Option<PersonFacet>,
    /// The external-worker facet, if this record describes an external.
    #[serde(rename = "externals", skip_serializing_if = "Option::is_none")]
    pub external: Option<PersonFacet>,
}

impl SourceRecord {
    /// Returns true if this record carries an employee facet whose
    /// aggregated status equals [`ACTIVE_STATUS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use utilisation_table::models::SourceRecord;
    ///
    /// let record: SourceRecord = serde_json::from_str(
    ///     r#"{"employees": {"name": "Lena Kern", "statusAggregation": {"status": "Aktiv"}}}"#,
    /// ).unwrap();
    /// assert!(record.is_active_employee());
    /// assert!(!record.is_active_external());
    /// ```
    pub fn is_active_employee(&self) -> bool {
        self.employee
            .as_ref()
            .and_then(|facet| facet.status_aggregation.as_ref())
            .and_then(|agg| agg.status.as_deref())
            == Some(ACTIVE_STATUS)
    }

    /// Returns true if this record carries an external facet whose nested
    /// employment status equals [`ACTIVE_STATUS`].
    pub fn is_active_external(&self) -> bool {
        self.external
            .as_ref()
            .and_then(|facet| facet.employment_status.as_ref())
            .and_then(|status| status.employment_status.as_deref())
            == Some(ACTIVE_STATUS)
    }

    /// Resolves the facet used for projection: the employee facet when
    /// present, otherwise the external facet.
    pub fn facet(&self) -> Option<&PersonFacet> {
        self.employee.as_ref().or(self.external.as_ref())
    }
}

/// The person-specific sub-record shared by both facets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFacet {
    /// The person's full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Aggregated engagement status and compensation figures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_aggregation: Option<StatusAggregation>,
    /// Nested employment-status carrier (externals use this instead of the
    /// aggregated status).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<EmploymentStatus>,
    /// Workforce utilisation rates for the person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workforce_utilisation: Option<WorkforceUtilisation>,
}

/// Aggregated status block: engagement status plus monthly salary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusAggregation {
    /// Engagement status literal, e.g. "Aktiv".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Monthly net salary; the snapshot carries this as a number or a
    /// numeric string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_salary: Option<Value>,
}

/// Nested employment-status carrier used by external-worker facets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentStatus {
    /// Engagement status literal, e.g. "Aktiv".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
}

/// Workforce utilisation rates, all expressed as fractions (0.42 = 42 %).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceUtilisation {
    /// Utilisation over the trailing twelve months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilisation_rate_last_twelve_months: Option<Value>,
    /// Utilisation for the current year to date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilisation_rate_year_to_date: Option<Value>,
    /// Sparse per-month breakdown of the last three months; a given month
    /// label may be absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_three_months_individually: Option<Vec<MonthlyUtilisation>>,
}

/// One entry in the sparse monthly utilisation breakdown.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyUtilisation {
    /// Month label, e.g. "June".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    /// Utilisation fraction for that month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilisation_rate: Option<Value>,
}
