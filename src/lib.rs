//! Workforce Utilisation Table Core
//!
//! This crate turns a static JSON snapshot of personnel records (direct
//! employees and external workers) into the data handed to a table renderer:
//! it selects actively engaged personnel, projects one display row per
//! selected record (name, utilisation percentages, prior-month net
//! earnings), and pairs the rows with a fixed column schema.

#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod pipeline;
pub mod snapshot;
pub mod table;
