//! Presentation boundary for the table renderer.
//!
//! The renderer (an external collaborator) owns sorting, pagination, and
//! visual presentation; this crate hands it a plain data contract: the
//! fixed column schema plus the formatted row sequence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DisplayRow, SourceRecord};
use crate::pipeline::{project_rows, select_active};

/// One column of the table: the row field it reads and the header it shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// The `DisplayRow` field name this column reads.
    pub accessor_key: String,
    /// The header text shown for this column.
    pub header: String,
}

impl Column {
    /// Creates a column from an accessor key and header text.
    pub fn new(accessor_key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor_key: accessor_key.into(),
            header: header.into(),
        }
    }
}

/// Returns the fixed seven-column schema of the utilisation table.
pub fn column_schema() -> Vec<Column> {
    vec![
        Column::new("person", "Person"),
        Column::new("past12Months", "Past 12 Months"),
        Column::new("y2d", "Y2D"),
        Column::new("may", "May"),
        Column::new("june", "June"),
        Column::new("july", "July"),
        Column::new("netEarningsPrevMonth", "Net Earnings Prev Month"),
    ]
}

/// The complete handoff to the renderer: column schema plus ordered rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// The fixed column schema.
    pub columns: Vec<Column>,
    /// The formatted display rows, in selection order.
    pub rows: Vec<DisplayRow>,
}

impl TableView {
    /// Pairs a row sequence with the fixed column schema.
    pub fn new(rows: Vec<DisplayRow>) -> Self {
        Self {
            columns: column_schema(),
            rows,
        }
    }
}

/// Runs the full pipeline over a snapshot: select active personnel, project
/// their display rows, and pair them with the column schema.
///
/// Pure and idempotent: the same snapshot always yields the same view.
///
/// # Examples
///
/// ```
/// use utilisation_table::models::SourceRecord;
/// use utilisation_table::table::render_table;
///
/// let records: Vec<SourceRecord> = serde_json::from_str(
///     r#"[{"employees": {"name": "A", "statusAggregation": {"status": "Aktiv"}}}]"#,
/// ).unwrap();
///
/// let view = render_table(&records);
/// assert_eq!(view.columns.len(), 7);
/// assert_eq!(view.rows.len(), 1);
/// ```
pub fn render_table(records: &[SourceRecord]) -> TableView {
    let selected = select_active(records);
    debug!(
        total = records.len(),
        selected = selected.len(),
        "selected active personnel"
    );

    TableView::new(project_rows(&selected))
}
