//! One scraping pass: extract, aggregate, merge into the history store.
//!
//! The pass is strictly sequential: the upstream extractor is serial and
//! rate-sensitive, and the store needs no locking. Control flow per run:
//! extract the listing, aggregate each yielded product into the store, then
//! finalize. Two degraded edges: a fatal extraction with prior history falls
//! back to history-only reporting, and a fatal extraction with an empty
//! store aborts the run (there is nothing to report from).

use chrono::NaiveDate;

use crate::digits::extract_integer;
use crate::error::{PricewatchError, Result};
use crate::extract::Extractor;
use crate::models::{format_price, SnapshotItem};
use crate::store::HistoryStore;
use crate::views::snapshot_view_from_history;

// ---------------------------------------------------------------------------
// RunStatus / PassReport
// ---------------------------------------------------------------------------

/// How a pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Fresh extraction succeeded; items reflect the live listing.
    Completed,
    /// Extraction failed but prior history existed; items are synthesized
    /// from the most recent stored observations.
    Degraded,
}

/// Outcome of one pass: status plus the snapshot items for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PassReport {
    pub status: RunStatus,
    pub items: Vec<SnapshotItem>,
}

// ---------------------------------------------------------------------------
// run_pass
// ---------------------------------------------------------------------------

/// Drive one pass of the extractor and merge its yields into `store`.
///
/// For each yielded product the lowest seller price is `min` over the parsed
/// non-zero seller texts, falling back to the listing price when no seller
/// price parsed. The store is upserted only when both the lowest and the listing
/// price are known; the snapshot item is built either way, carrying the
/// product's (possibly just-updated) observation history.
///
/// Recoverable per-product failures are logged and skipped. Item order
/// follows extractor yield order; sorting is the renderer's concern.
///
/// On [`PricewatchError::FatalExtraction`]: with prior history the pass
/// degrades to [`RunStatus::Degraded`] and reports from the store; with an
/// empty store the error propagates. Upserts applied before an abort are
/// retained in `store`; partial-pass data is preserved, never rolled back.
pub fn run_pass<E: Extractor>(
    extractor: &mut E,
    store: &mut HistoryStore,
    today: NaiveDate,
    max_products: Option<usize>,
) -> Result<PassReport> {
    let mut entries = match extractor.extract_listing() {
        Ok(entries) => entries,
        Err(PricewatchError::FatalExtraction(reason)) => {
            if store.is_empty() {
                return Err(PricewatchError::FatalExtraction(reason));
            }
            eprintln!("Extraction failed ({reason}); reporting from stored history");
            return Ok(PassReport {
                status: RunStatus::Degraded,
                items: snapshot_view_from_history(store),
            });
        }
        Err(e) => return Err(e),
    };

    if let Some(cap) = max_products {
        if entries.len() > cap {
            eprintln!("Capping pass at {cap} of {} products", entries.len());
            entries.truncate(cap);
        }
    }

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let product = match entry {
            Ok(product) => product,
            Err(e) => {
                eprintln!("Skipping product {}: {}", e.product_id, e.reason);
                continue;
            }
        };

        // A parsed zero is a placeholder ("call for price"), not a real
        // seller price; it must not win the minimum.
        let lowest_price = product
            .seller_price_texts
            .iter()
            .filter_map(|text| extract_integer(text))
            .filter(|&price| price > 0)
            .min()
            .or(product.current_price);

        if let (Some(lowest), Some(current)) = (lowest_price, product.current_price) {
            store.upsert(&product.product_id, &product.name, lowest, current, today);
        }

        let price_history = store
            .get(&product.product_id)
            .map(|record| record.prices.clone())
            .unwrap_or_default();

        items.push(SnapshotItem {
            name: product.name,
            link: product.product_id,
            price_text: product.current_price_text,
            lowest_price_text: format_price(lowest_price),
            current_price: product.current_price,
            lowest_price,
            price_history,
        });
    }

    Ok(PassReport {
        status: RunStatus::Completed,
        items,
    })
}
