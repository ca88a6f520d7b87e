//! Core data models for the utilisation table.
//!
//! This module contains the snapshot-shaped input records and the
//! renderer-shaped output rows.

mod display_row;
mod source_record;

pub use display_row::DisplayRow;
pub use source_record::{
    ACTIVE_STATUS, EmploymentStatus, MonthlyUtilisation, PersonFacet, SourceRecord,
    StatusAggregation, WorkforceUtilisation,
};
