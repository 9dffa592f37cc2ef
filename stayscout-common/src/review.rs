//! Aggregated review data for one listing.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

const UNAVAILABLE: &str = "unavailable";

/// A place rating: a numeric score, or the sentinel `"unavailable"` when
/// the upstream record carries none.
///
/// On the wire this is a JSON number or the literal string `"unavailable"`,
/// matching the persisted review-record format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    Unavailable,
}

impl Rating {
    pub fn score(self) -> Option<f64> {
        match self {
            Self::Score(s) => Some(s),
            Self::Unavailable => None,
        }
    }
}

impl From<Option<f64>> for Rating {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unavailable, Self::Score)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Score(s) => write!(f, "{s}"),
            Self::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Score(s) => serializer.serialize_f64(*s),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Score(f64),
            Text(String),
        }
        match Wire::deserialize(deserializer)? {
            Wire::Score(s) => Ok(Self::Score(s)),
            Wire::Text(s) if s == UNAVAILABLE => Ok(Self::Unavailable),
            Wire::Text(other) => Err(de::Error::custom(format!(
                "rating must be a number or {UNAVAILABLE:?}, got {other:?}"
            ))),
        }
    }
}

/// One customer review, in the order the places API returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub author: String,
    pub text: String,
    pub rating: f64,
}

/// A point of interest near a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub name: String,
    pub rating: Rating,
}

/// Aggregated rating/review/nearby-place data for one listing.
///
/// One record is active at a time; each enrichment overwrites the previous
/// one in memory and on disk. `review_count` always equals `reviews.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub name: String,
    pub rating: Rating,
    pub reviews: Vec<ReviewEntry>,
    pub review_count: usize,
    pub nearby_places: Vec<NearbyPlace>,
}

impl ReviewRecord {
    /// The record persisted when the place lookup finds no candidate.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating: Rating::Unavailable,
            reviews: Vec::new(),
            review_count: 0,
            nearby_places: Vec::new(),
        }
    }
}

/// Fold review scores into five unit-wide buckets (scores 1–5).
///
/// Out-of-range scores clamp into the nearest bucket, so every review stays
/// visible in the rendered distribution.
///
/// ```
/// use stayscout_common::review::rating_distribution;
///
/// let buckets = rating_distribution([5.0, 4.0, 5.0, 3.0, 5.0]);
/// assert_eq!(buckets, [0, 0, 1, 1, 3]);
/// assert_eq!(buckets.iter().sum::<usize>(), 5);
/// ```
pub fn rating_distribution(scores: impl IntoIterator<Item = f64>) -> [usize; 5] {
    let mut buckets = [0usize; 5];
    for score in scores {
        let slot = (score.round().clamp(1.0, 5.0) as usize).saturating_sub(1);
        buckets[slot] += 1;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_serializes_as_number_or_sentinel() {
        assert_eq!(serde_json::to_value(Rating::Score(4.6)).unwrap(), json!(4.6));
        assert_eq!(
            serde_json::to_value(Rating::Unavailable).unwrap(),
            json!("unavailable")
        );
    }

    #[test]
    fn rating_round_trips_both_forms() {
        let score: Rating = serde_json::from_value(json!(3.9)).unwrap();
        assert_eq!(score, Rating::Score(3.9));
        let missing: Rating = serde_json::from_value(json!("unavailable")).unwrap();
        assert_eq!(missing, Rating::Unavailable);
        assert!(serde_json::from_value::<Rating>(json!("great")).is_err());
    }

    #[test]
    fn placeholder_is_empty_and_unavailable() {
        let record = ReviewRecord::placeholder("Hotel Vega");
        assert_eq!(record.name, "Hotel Vega");
        assert_eq!(record.rating, Rating::Unavailable);
        assert!(record.reviews.is_empty());
        assert_eq!(record.review_count, 0);
        assert!(record.nearby_places.is_empty());
    }

    #[test]
    fn distribution_counts_every_score() {
        let buckets = rating_distribution([5.0, 4.0, 5.0, 3.0, 5.0]);
        assert_eq!(buckets, [0, 0, 1, 1, 3]);
    }

    #[test]
    fn distribution_clamps_out_of_range_scores() {
        let buckets = rating_distribution([0.0, 6.0, 9.5]);
        assert_eq!(buckets, [1, 0, 0, 0, 2]);
    }
}
