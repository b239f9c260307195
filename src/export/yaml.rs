//! YAML export
//!
//! Same content as the JSON report, in a friendlier format for reading.

use std::io::Write;

use super::json::SplitReport;
use crate::error::{SplitterError, SplitterResult};

/// Write the report as YAML with a short header comment
pub fn export_report_yaml<W: Write>(report: &SplitReport, writer: &mut W) -> SplitterResult<()> {
    let export_err = |e: std::io::Error| SplitterError::Export(e.to_string());

    writeln!(writer, "# bill-splitter settlement report").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", report.generated_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", report.app_version).map_err(export_err)?;

    serde_yaml::to_writer(writer, report).map_err(|e| SplitterError::Export(e.to_string()))?;
    Ok(())
}
