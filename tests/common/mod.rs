//! Shared test fixtures for the pricewatch integration tests.
//!
//! Provides a scripted in-memory extractor, listing-entry constructors, and a
//! pre-populated sample store, all backed by `tempfile` directories.

#![allow(dead_code)]

use chrono::NaiveDate;
use pricewatch::{
    Extractor, HistoryStore, ListingEntry, PricewatchError, ProductError, ProductYield, Result,
};
use std::path::Path;

/// Parse a `YYYY-MM-DD` literal. Panics on bad input (test fixture only).
pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// An extractor that replays a scripted listing.
///
/// `entries: None` simulates a fatal run-level failure (listing page could
/// not be loaded after retries).
pub struct ScriptedExtractor {
    pub entries: Option<Vec<ListingEntry>>,
}

impl ScriptedExtractor {
    pub fn yielding(entries: Vec<ListingEntry>) -> Self {
        Self {
            entries: Some(entries),
        }
    }

    pub fn fatal() -> Self {
        Self { entries: None }
    }
}

impl Extractor for ScriptedExtractor {
    fn extract_listing(&mut self) -> Result<Vec<ListingEntry>> {
        match &self.entries {
            Some(entries) => Ok(entries.clone()),
            None => Err(PricewatchError::FatalExtraction(
                "listing page unreachable".to_string(),
            )),
        }
    }
}

/// A successful listing entry with pre-parsed current price and raw seller
/// price texts.
pub fn yield_ok(
    product_id: &str,
    name: &str,
    current_price: Option<u64>,
    seller_price_texts: &[&str],
) -> ListingEntry {
    Ok(ProductYield {
        product_id: product_id.to_string(),
        name: name.to_string(),
        current_price_text: match current_price {
            Some(n) => format!("{n} تومان"),
            None => "N/A".to_string(),
        },
        current_price,
        seller_price_texts: seller_price_texts.iter().map(|s| s.to_string()).collect(),
    })
}

/// A recoverable per-product failure entry.
pub fn yield_err(product_id: &str, reason: &str) -> ListingEntry {
    Err(ProductError {
        product_id: product_id.to_string(),
        reason: reason.to_string(),
    })
}

/// A store at `path` holding one product ("Widget") with two observations:
/// 2024-01-01 lowest 1000 / current 1100, then 2024-01-02 lowest 1200 /
/// current 1250. Not yet saved to disk.
pub fn sample_store<P: AsRef<Path>>(path: P) -> HistoryStore {
    let mut store = HistoryStore::new(path);
    store.upsert(
        "https://shop.example/p/widget",
        "Widget",
        1000,
        1100,
        date("2024-01-01"),
    );
    store.upsert(
        "https://shop.example/p/widget",
        "Widget",
        1200,
        1250,
        date("2024-01-02"),
    );
    store
}
