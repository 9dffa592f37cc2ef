//! Places API client and the review enricher.
//!
//! [`PlacesApi`] wraps the three endpoints the enrichment needs — text
//! search, place details, nearby search — over the shared HTTP client.
//! [`ReviewEnricher`] drives them in sequence and assembles the persisted
//! [`stayscout_common::ReviewRecord`].

pub mod client;
pub mod enrich;
pub mod types;

pub use client::PlacesApi;
pub use enrich::{Enrichment, ReviewEnricher};
