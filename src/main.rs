use clap::Parser;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, warn};

use viewscan::cli::{init_logging, Args};
use viewscan::{ScanEngine, ScanStatistics};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level());

    match run(&args) {
        Ok(stats) => {
            if stats.has_failures() {
                warn!(
                    "{} of {} searches were skipped; see warnings above",
                    stats.pairs_failed,
                    stats.pairs_total()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ScanStatistics> {
    let config = args
        .to_config()
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Failed to load configuration")?;

    let engine = ScanEngine::new(config)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?
        .with_progress(args.show_progress());

    engine
        .run_to_csv()
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .context("Scan failed")
}
