use serde::{Deserialize, Serialize};

use super::history::Observation;

/// Format a price for display: thousands-grouped digits plus the currency
/// suffix, e.g. `format_price(Some(48_000))` is `"48,000 تومان"`. Absent
/// prices render as `"N/A"`.
pub fn format_price(value: Option<u64>) -> String {
    match value {
        Some(n) => format!("{} تومان", group_thousands(n)),
        None => "N/A".to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// SnapshotItem — per-product row for the live listing page
// ---------------------------------------------------------------------------

/// A tracked product's latest state, as handed to the report renderer.
///
/// Derived per pass, never stored. `price_history` carries the full
/// observation sequence for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub name: String,
    pub link: String,
    /// Display string for the listing price (`"N/A"` when parsing failed).
    pub price_text: String,
    /// Display string for the lowest seller price.
    pub lowest_price_text: String,
    pub current_price: Option<u64>,
    pub lowest_price: Option<u64>,
    pub price_history: Vec<Observation>,
}

// ---------------------------------------------------------------------------
// TrendItem — per-product row for the history dashboard
// ---------------------------------------------------------------------------

/// First-to-latest price movement for a product with at least two
/// observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendItem {
    pub name: String,
    pub link: String,
    pub price_history: Vec<Observation>,
    pub latest_lowest: u64,
    pub latest_current: u64,
    /// Percentage change of the lowest price from the first recorded
    /// observation to the latest. Defined as `0.0` when the first lowest
    /// price was zero.
    pub price_change: f64,
}
