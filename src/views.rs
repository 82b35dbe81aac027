//! Report projections over the history store.
//!
//! The renderer consumes two read-only views: a snapshot of each tracked
//! product's latest state (the live listing page) and a trend row for each
//! product with enough history to chart movement (the history dashboard).
//! Both are plain serde structs; no markup is produced here.

use crate::models::{format_price, SnapshotItem, TrendItem};
use crate::store::HistoryStore;

/// Pass through a fresh pass's snapshot items.
///
/// Exists as the named counterpart of [`snapshot_view_from_history`]; the
/// aggregator's output is already renderer-shaped.
pub fn snapshot_view(items: Vec<SnapshotItem>) -> Vec<SnapshotItem> {
    items
}

/// Synthesize snapshot items from stored history alone.
///
/// The degraded path: no live pass data exists, so each tracked product is
/// represented by its most recent observation. Products with no observations
/// yet are omitted. Order is store iteration order.
pub fn snapshot_view_from_history(store: &HistoryStore) -> Vec<SnapshotItem> {
    store
        .iter()
        .filter_map(|(link, record)| {
            let latest = record.latest()?;
            Some(SnapshotItem {
                name: record.name.clone(),
                link: link.clone(),
                price_text: format_price(Some(latest.current_price)),
                lowest_price_text: format_price(Some(latest.lowest_price)),
                current_price: Some(latest.current_price),
                lowest_price: Some(latest.lowest_price),
                price_history: record.prices.clone(),
            })
        })
        .collect()
}

/// Trend rows for every product with at least two observations.
///
/// `price_change` is the percentage movement of the lowest price from the
/// first recorded observation to the latest, `0.0` when the first lowest
/// price was zero. Order is store iteration order; the renderer may re-sort.
pub fn trend_view(store: &HistoryStore) -> Vec<TrendItem> {
    store
        .iter()
        .filter(|(_, record)| record.prices.len() > 1)
        .map(|(link, record)| {
            let first = &record.prices[0];
            let latest = &record.prices[record.prices.len() - 1];
            let price_change = if first.lowest_price > 0 {
                (latest.lowest_price as f64 - first.lowest_price as f64)
                    / first.lowest_price as f64
                    * 100.0
            } else {
                0.0
            };
            TrendItem {
                name: record.name.clone(),
                link: link.clone(),
                price_history: record.prices.clone(),
                latest_lowest: latest.lowest_price,
                latest_current: latest.current_price,
                price_change,
            }
        })
        .collect()
}
