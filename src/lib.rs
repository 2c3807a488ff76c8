//! Literal string search across Ignition Perspective view files
//!
//! Walks every `view.json` under a project directory, finds string values
//! containing one of the target substrings, and reports each hit with the
//! component breadcrumb and key path that lead to it.

pub mod cli;
pub mod error;
pub mod parser;
pub mod report;
pub mod scan;
pub mod search;

// Re-export commonly used types
pub use error::{ParseError, ScanError, ScanErrorKind, ScanResult, WalkError};
pub use parser::{find_view_files, parse_view_file};
pub use report::{CsvReport, LabelStrategy, ReportRow, RowSink};
pub use scan::{scan_views, ScanConfig, ScanEngine, ScanStatistics};
pub use search::{search, MatchRecord, WalkState, Walker};

/// Search a JSON document given as text
pub fn search_str(json: &str, target: &str) -> ScanResult<Vec<MatchRecord>> {
    let value = parser::parse_from_string(json)?;
    Ok(search(&value, target)?)
}
