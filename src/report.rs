//! Plain-text and JSON rendering of a pipeline run

use crate::pipeline::PipelineReport;
use carstream_core::Result;
use std::fmt;

/// One line per record, then `category: count` lines, the statistics and the
/// outlier mapping
impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        for (category, count) in self.category_counts() {
            writeln!(f, "{category}: {count}")?;
        }
        writeln!(f, "{}", self.statistics)?;
        writeln!(f, "{}", self.outliers)
    }
}

/// Plain-text report, as printed by the binary
pub fn render_text(report: &PipelineReport) -> String {
    report.to_string()
}

/// Pretty-printed JSON of the full report
pub fn render_json(report: &PipelineReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
