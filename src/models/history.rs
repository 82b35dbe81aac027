use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Observation — one day's recorded prices for a product
// ---------------------------------------------------------------------------

/// One day's recorded lowest/current price pair for a product.
///
/// At most one observation exists per `(product, date)` pair; a second write
/// on the same date replaces the prior values in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Day the prices were observed, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Lowest seller price seen during the pass.
    pub lowest_price: u64,
    /// Listing card price at the time of the pass.
    pub current_price: u64,
}

// ---------------------------------------------------------------------------
// ProductRecord — a product's name plus its full observation sequence
// ---------------------------------------------------------------------------

/// A tracked product's display name and observation history.
///
/// `prices` is ordered by insertion (date ascending across runs). The name is
/// refreshed on every upsert; last writer wins, name drift is not historized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub prices: Vec<Observation>,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prices: Vec::new(),
        }
    }

    /// The most recent observation, if any were recorded.
    pub fn latest(&self) -> Option<&Observation> {
        self.prices.last()
    }
}
