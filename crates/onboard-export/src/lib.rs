//! Spreadsheet and CSV writers for flattened client rows.
//!
//! The writers take the rows produced by `onboard_core::flatten` and know
//! nothing about client records themselves. Cell order always matches the
//! header constants in `onboard_core`.

mod csv_export;
mod xlsx;

use std::fs;
use std::path::{Path, PathBuf};

use onboard_core::{DetailRow, SummaryRow, DETAIL_COLUMNS, SUMMARY_COLUMNS};
use thiserror::Error;

pub use csv_export::{csv_bytes, write_csv};
pub use xlsx::{detail_workbook, workbook};

/// File name of the overview CSV export.
pub const CLIENTS_CSV_FILE: &str = "clients_data.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A flattened row that can be written as one table line.
pub trait Tabular {
    fn header() -> &'static [&'static str];
    fn cells(&self) -> Vec<&str>;
}

impl Tabular for DetailRow {
    fn header() -> &'static [&'static str] {
        &DETAIL_COLUMNS
    }

    fn cells(&self) -> Vec<&str> {
        DetailRow::cells(self).to_vec()
    }
}

impl Tabular for SummaryRow {
    fn header() -> &'static [&'static str] {
        &SUMMARY_COLUMNS
    }

    fn cells(&self) -> Vec<&str> {
        SummaryRow::cells(self).to_vec()
    }
}

/// Which workflow produced a spreadsheet; decides the file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Onboard,
    Pitch,
    Updated,
    Data,
}

impl ExportKind {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            ExportKind::Onboard => "onboard",
            ExportKind::Pitch => "pitch",
            ExportKind::Updated => "updated",
            ExportKind::Data => "data",
        }
    }
}

impl From<onboard_core::RecordType> for ExportKind {
    fn from(record_type: onboard_core::RecordType) -> Self {
        match record_type {
            onboard_core::RecordType::Onboard => ExportKind::Onboard,
            onboard_core::RecordType::Pitch => ExportKind::Pitch,
        }
    }
}

/// `{organization}_{suffix}.xlsx`, with path separators in the organization
/// replaced by `_`.
#[must_use]
pub fn export_file_name(organization: &str, kind: ExportKind) -> String {
    let safe: String = organization
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}_{}.xlsx", kind.suffix())
}

/// Write `bytes` to `dir/file_name`, creating `dir` if needed.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the directory or file cannot be written.
pub fn write_bytes(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    let io_err = |path: &Path, source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    let path = dir.join(file_name);
    fs::write(&path, bytes).map_err(|e| io_err(&path, e))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote export");
    Ok(path)
}
