//! Scan configuration, driver and statistics

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{read_targets_file, ScanConfig};
pub use engine::{scan_views, ScanEngine};
pub use stats::ScanStatistics;
