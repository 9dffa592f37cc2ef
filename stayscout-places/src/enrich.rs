//! Assembles and persists the review record for one listing.

use anyhow::{Context, Result};
use stayscout_common::{NearbyPlace, Rating, ReviewEntry, ReviewRecord};
use stayscout_store::JsonStore;

use crate::client::PlacesApi;
use crate::types::{NearbyResult, PlaceDetails};

/// Outcome of one enrichment call.
///
/// A lookup that resolves nothing is a normal outcome, not an error; the
/// session reports it and carries on.
#[derive(Debug)]
pub enum Enrichment {
    Found(ReviewRecord),
    NotFound,
}

pub struct ReviewEnricher {
    api: PlacesApi,
    nearby_radius_m: u32,
    nearby_category: String,
}

impl ReviewEnricher {
    pub fn new(api: PlacesApi, nearby_radius_m: u32, nearby_category: impl Into<String>) -> Self {
        Self {
            api,
            nearby_radius_m,
            nearby_category: nearby_category.into(),
        }
    }

    /// Resolve `listing_name`, fetch details and nearby places, assemble
    /// the record, and persist it through `store`.
    ///
    /// When resolution comes back empty a placeholder record is persisted
    /// instead, so the on-disk view stays consistent with what the session
    /// shows.
    pub async fn enrich(&self, listing_name: &str, store: &JsonStore) -> Result<Enrichment> {
        let found = self
            .api
            .find_place(listing_name)
            .await
            .context("place lookup failed")?;

        let Some(candidate) = found.first_candidate() else {
            tracing::info!(
                target: "places",
                listing = listing_name,
                status = %found.status,
                "place resolution came back empty"
            );
            let placeholder = ReviewRecord::placeholder(listing_name);
            store.save_review(&placeholder)?;
            return Ok(Enrichment::NotFound);
        };

        let details = self
            .api
            .place_details(&candidate.place_id)
            .await
            .context("place details fetch failed")?;
        let nearby = self
            .api
            .nearby_search(
                candidate.geometry.location,
                self.nearby_radius_m,
                &self.nearby_category,
            )
            .await
            .context("nearby search failed")?;

        let record = assemble_record(listing_name, details.result, nearby.results);
        store.save_review(&record)?;
        Ok(Enrichment::Found(record))
    }
}

/// Fold the two API payloads into one record. Missing upstream fields
/// become the `unavailable` sentinel or an empty sequence.
fn assemble_record(
    listing_name: &str,
    details: Option<PlaceDetails>,
    nearby: Vec<NearbyResult>,
) -> ReviewRecord {
    let (name, rating, reviews) = match details {
        Some(place) => {
            let reviews: Vec<ReviewEntry> = place
                .reviews
                .unwrap_or_default()
                .into_iter()
                .map(|r| ReviewEntry {
                    author: r.author_name,
                    text: r.text,
                    rating: r.rating,
                })
                .collect();
            (place.name, Rating::from(place.rating), reviews)
        }
        None => (listing_name.to_string(), Rating::Unavailable, Vec::new()),
    };

    let nearby_places: Vec<NearbyPlace> = nearby
        .into_iter()
        .map(|p| NearbyPlace {
            name: p.name,
            rating: Rating::from(p.rating),
        })
        .collect();

    let review_count = reviews.len();
    ReviewRecord {
        name,
        rating,
        reviews,
        review_count,
        nearby_places,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WireReview;

    #[test]
    fn assembles_full_record() {
        let details = PlaceDetails {
            name: "Hotel Vega".into(),
            rating: Some(4.4),
            reviews: Some(vec![
                WireReview {
                    author_name: "Mika".into(),
                    text: "Great stay.".into(),
                    rating: 5.0,
                },
                WireReview {
                    author_name: "Jonas".into(),
                    text: "Thin walls.".into(),
                    rating: 3.0,
                },
            ]),
        };
        let nearby = vec![
            NearbyResult {
                name: "Ramen Taro".into(),
                rating: Some(4.1),
            },
            NearbyResult {
                name: "Unrated Cafe".into(),
                rating: None,
            },
        ];

        let record = assemble_record("Hotel Vega", Some(details), nearby);
        assert_eq!(record.name, "Hotel Vega");
        assert_eq!(record.rating, Rating::Score(4.4));
        assert_eq!(record.review_count, 2);
        assert_eq!(record.reviews[0].author, "Mika");
        assert_eq!(record.nearby_places[1].rating, Rating::Unavailable);
    }

    #[test]
    fn missing_details_default_to_unavailable() {
        let record = assemble_record("Ghost Hotel", None, Vec::new());
        assert_eq!(record.name, "Ghost Hotel");
        assert_eq!(record.rating, Rating::Unavailable);
        assert!(record.reviews.is_empty());
        assert_eq!(record.review_count, 0);
        assert!(record.nearby_places.is_empty());
    }

    #[test]
    fn review_order_is_preserved() {
        let details = PlaceDetails {
            name: "Hotel Vega".into(),
            rating: Some(4.0),
            reviews: Some(
                ["first", "second", "third"]
                    .into_iter()
                    .map(|text| WireReview {
                        author_name: text.to_uppercase(),
                        text: text.into(),
                        rating: 4.0,
                    })
                    .collect(),
            ),
        };
        let record = assemble_record("Hotel Vega", Some(details), Vec::new());
        let texts: Vec<&str> = record.reviews.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}
