// src/storage/mod.rs
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use crate::utils::error::StorageError;

const SUMMARY_SUFFIX: &str = ".summary";

/// Where a rendered report ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSink {
    /// Print to standard output
    Stdout,
    /// Write `<source>.summary` next to the source
    SummaryFile,
}

impl ReportSink {
    pub fn from_flag(summary: bool) -> Self {
        if summary { ReportSink::SummaryFile } else { ReportSink::Stdout }
    }

    /// Emits `report` followed by a single newline.
    /// Returns the written file path in summary mode.
    pub fn save(&self, source: &Path, report: &str) -> Result<Option<PathBuf>, StorageError> {
        match self {
            ReportSink::Stdout => {
                write_report(&mut std::io::stdout().lock(), report)?;
                Ok(None)
            }
            ReportSink::SummaryFile => {
                let path = summary_path(source);
                fs::write(&path, format!("{}\n", report))?;
                tracing::info!("Saved summary to {}", path.display());
                Ok(Some(path))
            }
        }
    }
}

/// Writes `report` plus a trailing newline to `out`.
pub fn write_report<W: Write>(out: &mut W, report: &str) -> Result<(), StorageError> {
    writeln!(out, "{}", report)?;
    out.flush()?;
    Ok(())
}

/// `baby1990.html` -> `baby1990.html.summary`
pub fn summary_path(source: &Path) -> PathBuf {
    with_suffix(source, SUMMARY_SUFFIX)
}

/// Appends `suffix` to the full file name, keeping any existing extension.
pub fn with_suffix(source: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
