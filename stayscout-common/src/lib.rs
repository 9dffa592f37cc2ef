//! Common types and utilities shared across Stayscout crates.
//!
//! This crate defines the scraped-listing data model, the aggregated review
//! record, the numeric helpers the session loop relies on, and the shared
//! tracing initialisation. It is intentionally lightweight so every crate in
//! the workspace can depend on it without heavy transitive costs.
//!
//! # Overview
//!
//! - [`Listing`] and [`ListingIndex`]: one scraped search result, and the
//!   name → listing lookup built once per session
//! - [`ReviewRecord`] and [`Rating`]: enriched review data for one listing
//! - [`normalize`] and [`within_budget`]: the only numeric logic in the
//!   system — display-price parsing and the budget filter
//! - [`rating_distribution`]: folds review scores into histogram buckets
//! - [`observability`]: centralised tracing/logging initialisation
//!
//! # Examples
//!
//! ```rust
//! use stayscout_common::{normalize, Listing, ListingIndex};
//!
//! let listing = Listing {
//!     name: "Hotel Andromeda".into(),
//!     address: "Shinjuku, Tokyo".into(),
//!     price: "$1,180".into(),
//!     url: "https://example.com/hotel-andromeda".into(),
//!     image: "https://example.com/andromeda.jpg".into(),
//! };
//! let index = ListingIndex::build(std::slice::from_ref(&listing));
//! assert_eq!(index.get("Hotel Andromeda"), Some(&listing));
//! assert_eq!(normalize(&listing.price).unwrap(), 1180.0);
//! ```

pub mod listing;
pub mod observability;
pub mod price;
pub mod review;

pub use listing::{within_budget, Listing, ListingIndex};
pub use price::{normalize, PriceError};
pub use review::{rating_distribution, NearbyPlace, Rating, ReviewEntry, ReviewRecord};
