//! Persian numeral normalization and integer extraction.
//!
//! Storefront pages render prices with Extended Arabic-Indic digits
//! (`۰`..`۹`, U+06F0..U+06F9). These helpers fold them to ASCII and pull an
//! unsigned integer out of free-form price text.
//!
//! # Example
//!
//! ```rust
//! use pricewatch::digits::extract_integer;
//! assert_eq!(extract_integer("قیمت: ۱۲۳ تومان"), Some(123));
//! assert_eq!(extract_integer("no digits here"), None);
//! ```

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Map Persian digit glyphs to ASCII digits; all other characters pass
/// through unchanged. Idempotent.
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match PERSIAN_DIGITS.iter().position(|&p| p == c) {
            Some(i) => char::from(b'0' + i as u8),
            None => c,
        })
        .collect()
}

/// Extract an unsigned integer from free-form text.
///
/// Normalizes digits, then concatenates ALL digit runs in order of
/// appearance before parsing: `"۱,۲۳۴ تومان"` yields `1234`, and
/// `"2 pieces 500"` yields `2500`. The concatenation semantics is load-bearing
/// for price parsing (separators split the price into runs) and must not be
/// changed to first-run-only.
///
/// Returns `None` when the text contains no digit, or when the concatenated
/// run overflows `u64`.
pub fn extract_integer(text: &str) -> Option<u64> {
    let normalized = normalize_digits(text);
    let digits: String = normalized.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
