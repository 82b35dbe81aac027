//! Durable day-keyed price history, persisted as a single JSON document.
//!
//! The store maps a product id (its canonical listing URL) to a
//! [`ProductRecord`]. It is loaded once at startup, mutated in memory during
//! a pass, and rewritten whole on save. There is no transaction log; the
//! save path writes to a temp file and atomically renames it over the prior
//! document so a crash mid-write never corrupts existing history.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{PricewatchError, Result};
use crate::models::{Observation, ProductRecord};

/// On-disk shape: `{ productId: { "name": ..., "prices": [...] } }`.
type ProductMap = BTreeMap<String, ProductRecord>;

/// The price-history store for all tracked products.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStore {
    path: PathBuf,
    products: ProductMap,
}

impl HistoryStore {
    /// Create an empty store that will persist to `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            products: ProductMap::new(),
        }
    }

    /// Load the store from `path`.
    ///
    /// An absent file is an empty store, not an error (first run). A file
    /// that exists but does not parse as the expected shape is
    /// [`PricewatchError::CorruptStore`]: the caller must abort rather than
    /// proceed with an empty store, which would silently discard history on
    /// the next save.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new(path));
        }
        let contents = fs::read_to_string(path)?;
        let products: ProductMap =
            serde_json::from_str(&contents).map_err(|source| PricewatchError::CorruptStore {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            products,
        })
    }

    /// Persist the full mapping, replacing the prior file atomically.
    ///
    /// Serializes pretty-printed UTF-8 to a temp file in the same directory,
    /// then renames it over the target. The prior file stays intact if
    /// anything fails before the rename.
    pub fn save(&self) -> Result<()> {
        let write_err = |source: std::io::Error| PricewatchError::StoreWrite {
            path: self.path.clone(),
            source,
        };

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(write_err)?;

        // Every save-path failure surfaces as StoreWrite, serialization included.
        let json = serde_json::to_string_pretty(&self.products)
            .map_err(|e| write_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(json.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Record a pass's prices for one product.
    ///
    /// Creates the record if the product is new, refreshes its display name
    /// (last writer wins), and then either overwrites today's observation in
    /// place (preserving its position in the sequence) or appends a new one.
    /// Never removes or reorders observations.
    pub fn upsert(
        &mut self,
        product_id: &str,
        name: &str,
        lowest_price: u64,
        current_price: u64,
        today: NaiveDate,
    ) {
        let record = self
            .products
            .entry(product_id.to_string())
            .or_insert_with(|| ProductRecord::new(name));
        record.name = name.to_string();

        match record.prices.iter_mut().find(|obs| obs.date == today) {
            Some(obs) => {
                obs.lowest_price = lowest_price;
                obs.current_price = current_price;
            }
            None => record.prices.push(Observation {
                date: today,
                lowest_price,
                current_price,
            }),
        }
    }

    /// The record for `product_id`, if tracked.
    pub fn get(&self, product_id: &str) -> Option<&ProductRecord> {
        self.products.get(product_id)
    }

    /// Iterate records in deterministic (product id) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ProductRecord)> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
