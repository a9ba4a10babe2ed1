// src/report/mod.rs
use crate::extractors::names::NameRecord;
use crate::utils::error::ReportError;
use clap::ValueEnum;

/// Output format for a rendered record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Year, then one "name rank" entry per line
    #[default]
    Text,
    /// Pretty-printed JSON object with `year` and `names`
    Json,
}

/// Joins report lines with newlines. No trailing newline is added.
pub fn render(lines: &[String]) -> String {
    lines.join("\n")
}

/// Pretty-prints a record as `{"year": ..., "names": [...]}`.
pub fn render_json(record: &NameRecord) -> Result<String, ReportError> {
    serde_json::to_string_pretty(record)
        .map_err(|e| ReportError::Serialization(e.to_string()))
}
