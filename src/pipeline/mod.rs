//! Selection and projection pipeline for the utilisation table.
//!
//! This module contains the two core stages, active-record selection and
//! display-row projection, together with the value-coercion and formatting
//! rules they rely on. Every stage is a pure function over its input:
//! nothing here performs I/O, holds state, or errors. Malformed input
//! degrades to absence sentinels per field, never to a failure.

mod coerce;
mod format;
mod project;
mod select;

pub use coerce::{display_number, display_value, to_number};
pub use format::{format_net_earnings, format_percent};
pub use project::{MONTH_COLUMNS, project_rows};
pub use select::select_active;
