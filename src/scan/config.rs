//! Configuration for a scan run
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `VIEWSCAN_*` environment variables. Command-line flags are applied on top
//! by the CLI.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ScanError, ScanResult};
use crate::parser::filter::VIEW_FILE_NAME;
use crate::parser::LocatorOptions;
use crate::report::LabelStrategy;
use crate::search::DEFAULT_MAX_DEPTH;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "VIEWSCAN_";

/// Default CSV destination
pub const DEFAULT_OUTPUT: &str = "results.csv";

/// Scan configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory searched recursively for view files
    pub root_directory: PathBuf,
    /// Literal substrings to look for, searched in this order
    pub target_strings: Vec<String>,
    /// CSV report destination
    pub output_path: PathBuf,
    /// Open the report with the system viewer once written
    pub open_after_write: bool,
    /// File name that identifies a view document
    pub view_file_name: String,
    /// Follow symlinked directories while locating views
    pub follow_links: bool,
    /// How the location column is derived from a view's path
    pub label: LabelStrategy,
    /// Recursion limit for a single document
    pub max_depth: usize,
    /// Abort on the first per-file failure instead of skipping the file
    pub strict: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_directory: PathBuf::new(),
            target_strings: Vec::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            open_after_write: false,
            view_file_name: VIEW_FILE_NAME.to_string(),
            follow_links: false,
            label: LabelStrategy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}

impl ScanConfig {
    /// Create a configuration for `root` and `targets` with defaults elsewhere
    pub fn new(root: impl Into<PathBuf>, targets: Vec<String>) -> Self {
        Self {
            root_directory: root.into(),
            target_strings: targets,
            ..Self::default()
        }
    }

    /// Load defaults, an optional TOML file and environment overrides
    pub fn load(config_file: Option<&Path>) -> ScanResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(ScanConfig::default()));

        if let Some(path) = config_file {
            if !path.is_file() {
                return Err(ScanError::configuration(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ScanError::configuration(e.to_string()))
    }

    /// Check that the configuration describes a runnable scan
    pub fn validate(&self) -> ScanResult<()> {
        if self.root_directory.as_os_str().is_empty() {
            return Err(ScanError::configuration("root directory is not set"));
        }

        if self.target_strings.is_empty() {
            return Err(ScanError::configuration(
                "at least one target string is required",
            ));
        }

        if let Some(index) = self.target_strings.iter().position(|t| t.is_empty()) {
            return Err(ScanError::configuration(format!(
                "target string #{} is empty",
                index + 1
            )));
        }

        if self.view_file_name.is_empty() {
            return Err(ScanError::configuration("view file name is empty"));
        }

        if let LabelStrategy::Trailing(0) = self.label {
            return Err(ScanError::configuration(
                "label depth must be at least 1",
            ));
        }

        if self.max_depth == 0 {
            return Err(ScanError::configuration("max depth must be at least 1"));
        }

        Ok(())
    }

    /// Options for the view file locator
    pub fn locator_options(&self) -> LocatorOptions {
        LocatorOptions {
            file_name: self.view_file_name.clone(),
            follow_links: self.follow_links,
        }
    }
}

/// Read target strings from a file, one per line.
///
/// Blank lines and lines starting with `#` are skipped; surrounding
/// whitespace is trimmed.
pub fn read_targets_file(path: &Path) -> ScanResult<Vec<String>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ScanError::io(e, Some(path.to_path_buf())))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
