//! Snapshot loading functionality.
//!
//! This module provides the [`SnapshotLoader`] type for loading the static
//! personnel snapshot from a JSON file. Loading is the only fallible step
//! in the crate: once the records are in memory, the pipeline is total.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{TableError, TableResult};
use crate::models::SourceRecord;
use crate::table::{TableView, render_table};

/// Loads and holds the static personnel snapshot.
///
/// # Example
///
/// ```no_run
/// use utilisation_table::snapshot::SnapshotLoader;
///
/// let snapshot = SnapshotLoader::load("./data/sample-snapshot.json")?;
/// let view = snapshot.render();
/// println!("{} active rows", view.rows.len());
/// # Ok::<(), utilisation_table::error::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotLoader {
    records: Vec<SourceRecord>,
}

impl SnapshotLoader {
    /// Loads a snapshot from a JSON file containing an array of records.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the snapshot file (e.g., "./data/sample-snapshot.json")
    ///
    /// # Returns
    ///
    /// Returns a `SnapshotLoader` on success, or an error if the file is
    /// missing (`SnapshotNotFound`) or is not a valid JSON record array
    /// (`SnapshotParseError`). Unknown fields inside records are ignored;
    /// only a structurally invalid document fails.
    pub fn load<P: AsRef<Path>>(path: P) -> TableResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TableError::SnapshotNotFound {
            path: path_str.clone(),
        })?;

        let records: Vec<SourceRecord> =
            serde_json::from_str(&content).map_err(|e| TableError::SnapshotParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        info!(path = %path_str, records = records.len(), "loaded snapshot");

        Ok(Self { records })
    }

    /// Wraps records already in memory.
    pub fn from_records(records: Vec<SourceRecord>) -> Self {
        Self { records }
    }

    /// Returns the loaded records in snapshot order.
    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    /// Runs the full pipeline over the snapshot and returns the table view.
    pub fn render(&self) -> TableView {
        render_table(&self.records)
    }
}
