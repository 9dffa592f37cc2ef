//! Wire types for the places API responses.
//!
//! Fields the aggregation never touches are simply left out; serde ignores
//! the rest of the payload. Optional upstream fields (`rating`, `reviews`)
//! stay `Option` here and turn into the `unavailable` sentinel or an empty
//! sequence during assembly.

use serde::Deserialize;

/// Response status signalling a usable result.
pub const STATUS_OK: &str = "OK";

#[derive(Debug, Clone, Deserialize)]
pub struct FindPlaceResponse {
    pub status: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl FindPlaceResponse {
    /// The best candidate, when the lookup found one.
    pub fn first_candidate(&self) -> Option<&Candidate> {
        if self.status == STATUS_OK {
            self.candidates.first()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub place_id: String,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub result: Option<PlaceDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetails {
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<Vec<WireReview>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireReview {
    pub author_name: String,
    pub text: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyResponse {
    #[serde(default)]
    pub results: Vec<NearbyResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyResult {
    pub name: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_candidate_requires_ok_status() {
        let zero: FindPlaceResponse = serde_json::from_str(
            r#"{"status":"ZERO_RESULTS","candidates":[]}"#,
        )
        .unwrap();
        assert!(zero.first_candidate().is_none());

        let found: FindPlaceResponse = serde_json::from_str(
            r#"{"status":"OK","candidates":[{"place_id":"p1","geometry":{"location":{"lat":35.6,"lng":139.7}}}]}"#,
        )
        .unwrap();
        assert_eq!(found.first_candidate().unwrap().place_id, "p1");
    }

    #[test]
    fn details_tolerate_missing_rating_and_reviews() {
        let details: DetailsResponse =
            serde_json::from_str(r#"{"result":{"name":"Hotel Vega"}}"#).unwrap();
        let place = details.result.unwrap();
        assert_eq!(place.name, "Hotel Vega");
        assert!(place.rating.is_none());
        assert!(place.reviews.is_none());
    }
}
