// ---------------------------------------------------------------------------
// export – writing a rendered report into the export directory
// ---------------------------------------------------------------------------

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use footprint::config::PRODUCT_SLUG;
use footprint::export_format::ExportFormat;
use save::atomic_write;

use crate::formats::render;
use crate::report_data::ReportData;

#[derive(Debug)]
pub enum ExportError {
    /// Nothing has been calculated yet.
    NoAssessment,
    /// Rendering the report failed.
    Render(String),
    /// The export directory or file could not be written.
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoAssessment => {
                write!(f, "no emissions have been calculated yet")
            }
            ExportError::Render(msg) => write!(f, "could not render report: {msg}"),
            ExportError::Io(e) => write!(f, "could not write report: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Render(e.to_string())
    }
}

/// `ecotrack-report-<YYYY-MM-DD>.<ext>`, dated in UTC.
pub fn file_name(format: ExportFormat, date: DateTime<Utc>) -> String {
    format!(
        "{PRODUCT_SLUG}-report-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Render `data` and write it into `dir`, returning the written path.
/// A second export on the same day replaces the first. A failed write
/// leaves the earlier file untouched.
pub fn export_report(
    dir: &Path,
    format: ExportFormat,
    data: &ReportData,
) -> Result<PathBuf, ExportError> {
    let content = render(data, format)?;
    let path = dir.join(file_name(format, data.date));
    atomic_write(&path, content.as_bytes())?;
    Ok(path)
}
