//! Statistics for a scan run

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters collected while scanning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanStatistics {
    /// Number of view files located under the root
    pub files_found: usize,
    /// Number of target strings searched
    pub targets: usize,
    /// Target/file pairs that were searched successfully
    pub pairs_searched: usize,
    /// Target/file pairs skipped because the file could not be searched
    pub pairs_failed: usize,
    /// Rows written to the report
    pub matches: usize,
    /// Wall-clock time of the run in milliseconds
    pub elapsed_ms: u64,
    /// When the run started
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ScanStatistics {
    fn default() -> Self {
        Self {
            files_found: 0,
            targets: 0,
            pairs_searched: 0,
            pairs_failed: 0,
            matches: 0,
            elapsed_ms: 0,
            started_at: chrono::Utc::now(),
        }
    }
}

impl ScanStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total pairs the run attempted
    pub fn pairs_total(&self) -> usize {
        self.pairs_searched + self.pairs_failed
    }

    pub fn record_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_millis() as u64;
    }

    /// Whether any file had to be skipped
    pub fn has_failures(&self) -> bool {
        self.pairs_failed > 0
    }

    /// One-line summary for the end of a run
    pub fn summary(&self) -> String {
        format!(
            "{} matches for {} targets across {} view files ({} searches, {} skipped) in {}ms",
            self.matches,
            self.targets,
            self.files_found,
            self.pairs_total(),
            self.pairs_failed,
            self.elapsed_ms
        )
    }
}
