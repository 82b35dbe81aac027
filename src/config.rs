use std::path::PathBuf;

/// File name of the persisted history store inside the data directory.
pub const HISTORY_FILE: &str = "price_history.json";

/// File name of the listing feed the binary reads by default.
pub const FEED_FILE: &str = "listing_feed.json";

/// File names of the two report-view documents written for the renderer.
pub const SNAPSHOT_FILE: &str = "snapshot.json";
pub const TRENDS_FILE: &str = "price_trends.json";

/// Product cap applied when running under CI (the listing can hold hundreds
/// of products and each one costs a page load in a real extractor).
pub const CI_MAX_PRODUCTS: usize = 20;

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("pricewatch")
    } else {
        PathBuf::from(".pricewatch")
    }
}

/// Product cap from the environment: `CI=true` caps a run at
/// [`CI_MAX_PRODUCTS`], anything else means unlimited.
pub fn max_products_from_env() -> Option<usize> {
    match std::env::var("CI") {
        Ok(v) if v.eq_ignore_ascii_case("true") => Some(CI_MAX_PRODUCTS),
        _ => None,
    }
}
