//! Command-line interface module

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::ScanResult;
use crate::report::LabelStrategy;
use crate::scan::config::{read_targets_file, ScanConfig};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "viewscan")]
#[command(about = "Find literal strings inside Ignition Perspective view.json files")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Strings to search for (e.g. named query or stored procedure names)
    #[arg()]
    pub targets: Vec<String>,

    /// Directory searched recursively for view files
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// CSV report path (default: results.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read additional targets from a file, one per line
    #[arg(long)]
    pub targets_file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Open the report with the system viewer when done
    #[arg(long)]
    pub open: bool,

    /// Number of directory names above each view used as its location (default: 4)
    #[arg(long, conflicts_with = "root_relative")]
    pub label_depth: Option<usize>,

    /// Label views by their path relative to the search root
    #[arg(long)]
    pub root_relative: bool,

    /// File name that identifies a view (default: view.json)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Maximum nesting depth searched per document
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Follow symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Stop at the first view that cannot be searched
    #[arg(long)]
    pub strict: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Build the scan configuration: file and environment first, flags on top
    pub fn to_config(&self) -> ScanResult<ScanConfig> {
        let mut config = ScanConfig::load(self.config.as_deref())?;
        self.apply(&mut config)?;
        Ok(config)
    }

    /// Apply command-line overrides to `config`
    pub fn apply(&self, config: &mut ScanConfig) -> ScanResult<()> {
        let mut targets = self.targets.clone();
        if let Some(path) = &self.targets_file {
            targets.extend(read_targets_file(path)?);
        }
        if !targets.is_empty() {
            config.target_strings = targets;
        }

        if let Some(root) = &self.root {
            config.root_directory = root.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(name) = &self.file_name {
            config.view_file_name = name.clone();
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }

        if self.root_relative {
            config.label = LabelStrategy::RootRelative;
        } else if let Some(depth) = self.label_depth {
            config.label = LabelStrategy::Trailing(depth);
        }

        config.open_after_write |= self.open;
        config.follow_links |= self.follow_links;
        config.strict |= self.strict;

        Ok(())
    }

    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }

    /// Default log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `default_level`
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
