//! Scraped hotel listings and the budget filter.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::price::{normalize, PriceError};

/// One hotel search-result record as scraped from a results page.
///
/// The price stays in its display form (`"$1,234"`); callers that need a
/// number go through [`normalize`]. Name is the uniqueness key, but a scrape
/// may legitimately yield the same name twice — dedup happens later, in
/// [`ListingIndex::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    pub address: String,
    pub price: String,
    pub url: String,
    pub image: String,
}

/// Name → listing lookup built once after a scrape and read-only for the
/// rest of the session.
///
/// Duplicate names collapse to the first occurrence in scrape order. Every
/// entry is its own freshly cloned record, so no two entries can alias the
/// same underlying values.
#[derive(Debug, Default)]
pub struct ListingIndex {
    entries: HashMap<String, Listing>,
}

impl ListingIndex {
    pub fn build(listings: &[Listing]) -> Self {
        let mut entries = HashMap::with_capacity(listings.len());
        for listing in listings {
            entries
                .entry(listing.name.clone())
                .or_insert_with(|| listing.clone());
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Listing> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Names of the listings whose normalized price is at or below `budget`,
/// preserving scrape order. The boundary is inclusive.
///
/// An empty result is a valid outcome, distinct from failure. A price that
/// fails normalization fails the whole call: display prices come straight
/// from the scraper, so a malformed one is an upstream defect worth
/// surfacing rather than skipping.
///
/// ```
/// use stayscout_common::listing::{within_budget, Listing};
///
/// let listings = vec![
///     Listing {
///         name: "A".into(),
///         address: String::new(),
///         price: "$100".into(),
///         url: String::new(),
///         image: String::new(),
///     },
///     Listing {
///         name: "B".into(),
///         address: String::new(),
///         price: "$250".into(),
///         url: String::new(),
///         image: String::new(),
///     },
/// ];
/// assert_eq!(within_budget(&listings, 150.0).unwrap(), vec!["A"]);
/// ```
pub fn within_budget(listings: &[Listing], budget: f64) -> Result<Vec<String>, PriceError> {
    let mut fit = Vec::new();
    for listing in listings {
        if normalize(&listing.price)? <= budget {
            fit.push(listing.name.clone());
        }
    }
    Ok(fit)
}
