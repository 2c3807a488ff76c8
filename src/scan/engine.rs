//! Scan driver: locate views, search every target in every view, write rows

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::ScanResult;
use crate::parser::{find_view_files, parse_view_file};
use crate::report::{open_report, CsvReport, ReportRow, RowSink};
use crate::scan::config::ScanConfig;
use crate::scan::stats::ScanStatistics;
use crate::search::{MatchRecord, Walker};

/// Main scan engine
pub struct ScanEngine {
    config: ScanConfig,
    show_progress: bool,
}

impl ScanEngine {
    /// Create a new scan engine from a validated configuration
    pub fn new(config: ScanConfig) -> ScanResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            show_progress: false,
        })
    }

    /// Draw a progress bar on stderr while scanning
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// List the view files under the configured root
    pub fn locate(&self) -> ScanResult<Vec<PathBuf>> {
        find_view_files(&self.config.root_directory, &self.config.locator_options())
    }

    /// Parse `file` and search it for `target`.
    ///
    /// Any failure discards the matches found so far for this pair.
    pub fn search_file(&self, target: &str, file: &Path) -> ScanResult<Vec<MatchRecord>> {
        let document = parse_view_file(file)?;
        let matches = Walker::new(target)
            .with_max_depth(self.config.max_depth)
            .search(&document)?;
        Ok(matches)
    }

    /// Run the full scan, writing rows to `sink` in target, file, match order
    pub fn run<S: RowSink>(&self, sink: &mut S) -> ScanResult<ScanStatistics> {
        let start = Instant::now();
        let mut stats = ScanStatistics::new();

        let files = self.locate()?;
        stats.files_found = files.len();
        stats.targets = self.config.target_strings.len();
        info!(
            "Found {} view files under {}",
            files.len(),
            self.config.root_directory.display()
        );

        let progress = self.progress_bar((stats.targets * files.len()) as u64);

        for target in &self.config.target_strings {
            for file in &files {
                progress.set_message(target.clone());

                match self.search_file(target, file) {
                    Ok(matches) => {
                        stats.pairs_searched += 1;
                        debug!("{} matches for '{}' in {}", matches.len(), target, file.display());
                        self.write_matches(file, &matches, sink, &progress)?;
                        stats.matches += matches.len();
                    }
                    Err(e) if e.is_per_file() && !self.config.strict => {
                        stats.pairs_failed += 1;
                        progress.suspend(|| {
                            warn!(
                                "Skipping {} for '{}': {}",
                                file.display(),
                                target,
                                e.user_message()
                            )
                        });
                    }
                    Err(e) => {
                        progress.abandon();
                        return Err(e);
                    }
                }

                progress.inc(1);
            }
        }

        progress.finish_and_clear();
        sink.finish()?;

        stats.record_elapsed(start.elapsed());
        info!("{}", stats.summary());
        Ok(stats)
    }

    /// Run the scan into the configured CSV file, then optionally open it
    pub fn run_to_csv(&self) -> ScanResult<ScanStatistics> {
        // Locate first so a bad root does not leave an empty report behind
        if !self.config.root_directory.is_dir() {
            self.locate()?;
        }

        let output = &self.config.output_path;
        let stats = {
            let mut report = CsvReport::create(output)?;
            self.run(&mut report)?
        };
        info!("Report written to {}", output.display());

        if self.config.open_after_write {
            open_report(output);
        }

        Ok(stats)
    }

    fn write_matches<S: RowSink>(
        &self,
        file: &Path,
        matches: &[MatchRecord],
        sink: &mut S,
        progress: &ProgressBar,
    ) -> ScanResult<()> {
        if matches.is_empty() {
            return Ok(());
        }

        let label = self.config.label.label(file, &self.config.root_directory);
        for record in matches {
            let row = ReportRow::from_match(record, &label);
            progress.suspend(|| {
                info!(
                    "Named Query: {}, Location: {}, Key Path: {}",
                    row.target, row.location, row.key_path
                )
            });
            sink.write_row(&row)?;
        }
        Ok(())
    }

    fn progress_bar(&self, total: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }
}

/// Scan with `config`, writing the CSV report it names
pub fn scan_views(config: ScanConfig) -> ScanResult<ScanStatistics> {
    ScanEngine::new(config)?.run_to_csv()
}
