//! Run-once entry point.
//!
//! Reads the listing feed written by the scraping collaborator, runs one
//! pass, persists the history store, and writes the two renderer input
//! documents. Exit status: 0 = completed, 2 = degraded to stored history
//! (reports still written), 1 = aborted (nothing produced).

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use pricewatch::{config, JsonFeedExtractor, Pricewatch, Result, RunStatus};

fn data_dir() -> PathBuf {
    env::var_os("PRICEWATCH_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(config::default_data_dir)
}

fn run() -> Result<RunStatus> {
    let data_dir = data_dir();
    let feed_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir.join(config::FEED_FILE));

    let mut tracker = Pricewatch::builder().data_dir(&data_dir).build()?;
    let mut extractor = JsonFeedExtractor::new(&feed_path);

    let report = tracker.run(&mut extractor)?;
    let (snapshot_path, trends_path) = tracker.write_reports(&report)?;

    eprintln!(
        "{} products -> {}; {} trend rows -> {}",
        report.items.len(),
        snapshot_path.display(),
        tracker.trend_view().len(),
        trends_path.display()
    );
    Ok(report.status)
}

fn main() -> ExitCode {
    match run() {
        Ok(RunStatus::Completed) => ExitCode::SUCCESS,
        Ok(RunStatus::Degraded) => {
            eprintln!("Run degraded to stored history");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Run aborted: {e}");
            ExitCode::from(1)
        }
    }
}
