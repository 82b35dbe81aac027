//! Price-history tracking for storefront listings.
//!
//! Consumes a source extractor (the browser-driving collaborator that scrapes
//! a price-comparison listing), merges each pass's prices into a durable
//! day-keyed history store, and projects two renderer-ready views: a snapshot
//! of every tracked product and a first-to-latest trend per product.
//!
//! # Quick start
//!
//! ```no_run
//! use pricewatch::{JsonFeedExtractor, Pricewatch};
//!
//! let mut tracker = Pricewatch::builder().build().unwrap();
//! let mut extractor = JsonFeedExtractor::new("listing_feed.json");
//!
//! let report = tracker.run(&mut extractor).unwrap();
//! let trends = tracker.trend_view();
//! println!("{} products, {} with history", report.items.len(), trends.len());
//! ```

pub mod config;
pub mod digits;
pub mod error;
pub mod extract;
pub mod models;
pub mod run;
pub mod store;
pub mod views;

pub use error::{PricewatchError, Result};
pub use extract::{Extractor, JsonFeedExtractor, ListingEntry, ProductError, ProductYield};
pub use models::{Observation, ProductRecord, SnapshotItem, TrendItem};
pub use run::{run_pass, PassReport, RunStatus};
pub use store::HistoryStore;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// PricewatchBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Pricewatch`] instance.
///
/// Use [`Pricewatch::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PricewatchBuilder::build) to load the store.
pub struct PricewatchBuilder {
    data_dir: Option<PathBuf>,
    today: Option<NaiveDate>,
    max_products: Option<usize>,
}

impl Default for PricewatchBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            today: None,
            max_products: config::max_products_from_env(),
        }
    }
}

impl PricewatchBuilder {
    /// Set a custom data directory (history store and report documents).
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/pricewatch` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the observation date for the next pass.
    ///
    /// Defaults to the current local date. Observations are day-granular;
    /// two passes on the same date merge into one observation per product.
    pub fn today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    /// Cap the number of products processed per pass.
    ///
    /// Defaults to the `CI` environment cap (see [`config`]); `None` means
    /// unlimited.
    pub fn max_products(mut self, cap: Option<usize>) -> Self {
        self.max_products = cap;
        self
    }

    /// Build the tracker, loading the history store from disk.
    ///
    /// Fails with [`PricewatchError::CorruptStore`] if the store file exists
    /// but cannot be parsed; that aborts here, before any extraction work,
    /// because proceeding with an empty store would overwrite real history
    /// on the next save.
    pub fn build(self) -> Result<Pricewatch> {
        let data_dir = self.data_dir.unwrap_or_else(config::default_data_dir);
        let store = HistoryStore::load(data_dir.join(config::HISTORY_FILE))?;
        let today = self
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        Ok(Pricewatch {
            data_dir,
            store,
            today,
            max_products: self.max_products,
        })
    }
}

// ---------------------------------------------------------------------------
// Pricewatch
// ---------------------------------------------------------------------------

/// The main entry point: owns the loaded [`HistoryStore`] and runs passes
/// against a source extractor.
///
/// Created via [`Pricewatch::builder()`].
#[derive(Debug)]
pub struct Pricewatch {
    data_dir: PathBuf,
    store: HistoryStore,
    today: NaiveDate,
    max_products: Option<usize>,
}

impl Pricewatch {
    /// Create a new builder for configuring the tracker.
    pub fn builder() -> PricewatchBuilder {
        PricewatchBuilder::default()
    }

    /// Run one pass and persist the store.
    ///
    /// The store is saved even when the pass degrades or aborts, so upserts
    /// applied before a failure are never lost. A save failure on the success
    /// path is fatal ([`PricewatchError::StoreWrite`]); on the failure path
    /// the pass error takes precedence and the save failure is logged.
    pub fn run<E: Extractor>(&mut self, extractor: &mut E) -> Result<PassReport> {
        match run_pass(extractor, &mut self.store, self.today, self.max_products) {
            Ok(report) => {
                self.store.save()?;
                Ok(report)
            }
            Err(e) => {
                if let Err(save_err) = self.store.save() {
                    eprintln!("Also failed to persist history after abort: {save_err}");
                }
                Err(e)
            }
        }
    }

    /// The trend view over the current store (products with ≥2 observations).
    pub fn trend_view(&self) -> Vec<TrendItem> {
        views::trend_view(&self.store)
    }

    /// Write the two renderer input documents into the data directory.
    ///
    /// `snapshot.json` holds the pass's snapshot items; `price_trends.json`
    /// holds the trend view. Returns the two paths.
    pub fn write_reports(&self, report: &PassReport) -> Result<(PathBuf, PathBuf)> {
        let snapshot_path = self.data_dir.join(config::SNAPSHOT_FILE);
        let trends_path = self.data_dir.join(config::TRENDS_FILE);
        fs::write(&snapshot_path, serde_json::to_string_pretty(&report.items)?)?;
        fs::write(&trends_path, serde_json::to_string_pretty(&self.trend_view())?)?;
        Ok((snapshot_path, trends_path))
    }

    /// Return a reference to the underlying store for advanced usage.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// The observation date used for passes.
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Pricewatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pricewatch(data_dir={}, products={}, today={})",
            self.data_dir.display(),
            self.store.len(),
            self.today
        )
    }
}
