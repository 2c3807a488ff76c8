//! CSV report output
//!
//! Rows are written as they are produced; the header is written when the
//! report is created so an empty scan still yields a valid file.

pub mod label;
pub mod viewer;

pub use label::{compose_location, LabelStrategy};
pub use viewer::open_report;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ScanError, ScanResult};
use crate::search::MatchRecord;

/// Column headers of the report
pub const REPORT_HEADER: [&str; 3] = ["Target String", "Parent Name", "Key Path"];

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Target String")]
    pub target: String,
    /// File label joined with the match breadcrumb
    #[serde(rename = "Parent Name")]
    pub location: String,
    #[serde(rename = "Key Path")]
    pub key_path: String,
}

impl ReportRow {
    /// Build a row for `record`, found in the view labelled `label`
    pub fn from_match(record: &MatchRecord, label: &str) -> Self {
        Self {
            target: record.target.clone(),
            location: compose_location(label, &record.parent_name),
            key_path: record.key_path.clone(),
        }
    }
}

/// Destination for report rows
pub trait RowSink {
    fn write_row(&mut self, row: &ReportRow) -> ScanResult<()>;

    fn finish(&mut self) -> ScanResult<()> {
        Ok(())
    }
}

impl RowSink for Vec<ReportRow> {
    fn write_row(&mut self, row: &ReportRow) -> ScanResult<()> {
        self.push(row.clone());
        Ok(())
    }
}

/// CSV writer for report rows
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl CsvReport<File> {
    /// Create (or truncate) the report file at `path`
    pub fn create(path: &Path) -> ScanResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ScanError::io(e, Some(parent.to_path_buf())))?;
        }
        let file = File::create(path).map_err(|e| ScanError::io(e, Some(path.to_path_buf())))?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvReport<W> {
    /// Wrap an arbitrary writer and emit the header
    pub fn from_writer(inner: W) -> ScanResult<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(REPORT_HEADER)?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> ScanResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| ScanError::io(e.into_error(), None))
    }
}

impl<W: Write> RowSink for CsvReport<W> {
    fn write_row(&mut self, row: &ReportRow) -> ScanResult<()> {
        self.writer
            .write_record([row.target.as_str(), row.location.as_str(), row.key_path.as_str()])?;
        self.rows_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> ScanResult<()> {
        self.writer.flush().map_err(|e| ScanError::io(e, None))
    }
}
