//! Error types for the utilisation table core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only snapshot loading can fail: the selection/projection pipeline is
//! total by design and degrades to absence sentinels instead of erroring.

use thiserror::Error;

/// The main error type for the utilisation table core.
///
/// # Example
///
/// ```
/// use utilisation_table::error::TableError;
///
/// let error = TableError::SnapshotNotFound {
///     path: "/missing/snapshot.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Snapshot file not found: /missing/snapshot.json");
/// ```
#[derive(Debug, Error)]
pub enum TableError {
    /// Snapshot file was not found at the specified path.
    #[error("Snapshot file not found: {path}")]
    SnapshotNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Snapshot file could not be parsed as a JSON record array.
    #[error("Failed to parse snapshot file '{path}': {message}")]
    SnapshotParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return TableError.
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_not_found_displays_path() {
        let error = TableError::SnapshotNotFound {
            path: "/missing/snapshot.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Snapshot file not found: /missing/snapshot.json"
        );
    }

    #[test]
    fn test_snapshot_parse_error_displays_path_and_message() {
        let error = TableError::SnapshotParseError {
            path: "/data/bad.json".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse snapshot file '/data/bad.json': expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<TableError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> TableResult<()> {
            Err(TableError::SnapshotNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> TableResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
