//! Export module for bill-splitter
//!
//! Writes computed results in several formats:
//! - CSV: balances or settlements, one row each
//! - JSON: full report for other programs
//! - YAML: full report for people

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_balances_csv, export_settlements_csv};
pub use json::{export_report_json, SplitReport, REPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
