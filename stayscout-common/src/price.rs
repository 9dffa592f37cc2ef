//! Display-price parsing.

use thiserror::Error;

/// Failure to read a number out of a display price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("price has no numeric part: {0:?}")]
    Empty(String),
    #[error("price is not a number: {0:?}")]
    Invalid(String),
}

/// Strip currency decoration from a display price and parse the remainder
/// as a decimal number.
///
/// Handles symbol prefixes (`$`, `€`, `£`, `¥`), alphabetic currency codes
/// (`US$1,200`), comma grouping, and stray whitespace. Pure, and total for
/// well-formed upstream prices.
///
/// ```
/// use stayscout_common::price::normalize;
///
/// assert_eq!(normalize("$1,234.50").unwrap(), 1234.50);
/// assert_eq!(normalize("$0").unwrap(), 0.0);
/// assert!(normalize("free").is_err());
/// ```
pub fn normalize(price: &str) -> Result<f64, PriceError> {
    let bare: String = price
        .chars()
        .filter(|c| {
            !matches!(c, '$' | '€' | '£' | '¥' | ',') && !c.is_whitespace() && !c.is_alphabetic()
        })
        .collect();
    if bare.is_empty() {
        return Err(PriceError::Empty(price.to_string()));
    }
    bare.parse()
        .map_err(|_| PriceError::Invalid(price.to_string()))
}
