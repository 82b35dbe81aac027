//! The source-extractor seam.
//!
//! Scraping a storefront (browser driving, retries, scroll heuristics, DOM
//! selectors) lives outside this crate, behind the [`Extractor`] trait. An
//! extractor produces one finite listing per run: for each product, its
//! identity, display name, raw listing price text, the parsed listing price
//! (absent when the page gave nothing parseable), and the per-seller price
//! texts from the detail page.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PricewatchError, Result};

// ---------------------------------------------------------------------------
// ProductYield / ProductError
// ---------------------------------------------------------------------------

/// One product as yielded by a source extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductYield {
    /// Canonical detail-page URL; stable across runs, the store's key.
    pub product_id: String,
    pub name: String,
    /// Raw listing price text, e.g. `"۴۸,۰۰۰ تومان"` or `"N/A"`.
    pub current_price_text: String,
    /// Parsed listing price, absent when the text held no digits.
    pub current_price: Option<u64>,
    /// Raw per-seller price texts from the product's detail page.
    #[serde(default)]
    pub seller_price_texts: Vec<String>,
}

/// A recoverable single-product failure (detail page failed to load or
/// parse). The run logs it and skips the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductError {
    pub product_id: String,
    pub reason: String,
}

/// A listing entry: either a usable yield or a recoverable failure.
pub type ListingEntry = std::result::Result<ProductYield, ProductError>;

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// A source of listing data for one run.
///
/// `extract_listing` returns the whole pass's entries in listing order, or
/// [`PricewatchError::FatalExtraction`] when the listing itself could not be
/// obtained (network exhausted after retries). Per-product failures are
/// entries, not errors; the run continues past them.
pub trait Extractor {
    fn extract_listing(&mut self) -> Result<Vec<ListingEntry>>;
}

// ---------------------------------------------------------------------------
// JsonFeedExtractor
// ---------------------------------------------------------------------------

/// File-backed extractor: reads a JSON array of [`ProductYield`] values
/// produced by an external scraping collaborator.
///
/// This is what the `pricewatch` binary runs against; it also makes the run
/// pipeline testable without any scraping machinery.
pub struct JsonFeedExtractor {
    path: PathBuf,
}

impl JsonFeedExtractor {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Extractor for JsonFeedExtractor {
    fn extract_listing(&mut self) -> Result<Vec<ListingEntry>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            PricewatchError::FatalExtraction(format!(
                "listing feed {} unreadable: {}",
                self.path.display(),
                e
            ))
        })?;
        let yields: Vec<ProductYield> = serde_json::from_str(&contents).map_err(|e| {
            PricewatchError::FatalExtraction(format!(
                "listing feed {} malformed: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(yields.into_iter().map(Ok).collect())
    }
}
