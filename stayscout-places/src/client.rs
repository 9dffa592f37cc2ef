//! Minimal wrapper around the places API with Stayscout defaults.
//!
//! Handles auth and request parameter shaping before delegating to the
//! shared HTTP client. The API key travels as a `key` query parameter and
//! is redacted by the HTTP layer's request logging.

use std::borrow::Cow;

use stayscout_http::{Auth, HttpClient, HttpError, RequestOpts};

use crate::types::{DetailsResponse, FindPlaceResponse, LatLng, NearbyResponse};

#[derive(Clone)]
pub struct PlacesApi {
    http: HttpClient,
    key: String,
}

impl PlacesApi {
    /// Build a client against `endpoint` (the API root, e.g.
    /// `https://maps.googleapis.com/maps/api/place`) with an explicit key.
    pub fn new(endpoint: &str, api_key: String) -> Result<Self, HttpError> {
        // Url::join treats a base without a trailing slash as a file and
        // would drop its last path segment.
        let base = if endpoint.ends_with('/') {
            Cow::Borrowed(endpoint)
        } else {
            Cow::Owned(format!("{endpoint}/"))
        };
        let http = HttpClient::new(&base)?;
        Ok(Self { http, key: api_key })
    }

    /// Resolve free-form text (a hotel name) to a place id and coordinates.
    pub async fn find_place(&self, input: &str) -> Result<FindPlaceResponse, HttpError> {
        let params: Vec<(&str, Cow<'_, str>)> = vec![
            ("input", input.into()),
            ("inputtype", "textquery".into()),
            ("fields", "place_id,geometry".into()),
        ];

        tracing::info!(target: "places", input, "places.find_place");
        self.http
            .get_json("findplacefromtext/json", self.opts(params))
            .await
    }

    /// Fetch name, rating, and reviews for a resolved place.
    pub async fn place_details(&self, place_id: &str) -> Result<DetailsResponse, HttpError> {
        let params: Vec<(&str, Cow<'_, str>)> = vec![
            ("place_id", place_id.into()),
            ("fields", "name,rating,review".into()),
        ];

        tracing::info!(target: "places", place_id, "places.details");
        self.http.get_json("details/json", self.opts(params)).await
    }

    /// Fetch places of `category` within `radius_m` meters of `location`.
    pub async fn nearby_search(
        &self,
        location: LatLng,
        radius_m: u32,
        category: &str,
    ) -> Result<NearbyResponse, HttpError> {
        let params: Vec<(&str, Cow<'_, str>)> = vec![
            ("location", format!("{},{}", location.lat, location.lng).into()),
            ("radius", radius_m.to_string().into()),
            ("type", category.into()),
        ];

        tracing::info!(target: "places", radius_m, category, "places.nearby");
        self.http
            .get_json("nearbysearch/json", self.opts(params))
            .await
    }

    fn opts<'a>(&'a self, query: Vec<(&'a str, Cow<'a, str>)>) -> RequestOpts<'a> {
        RequestOpts {
            auth: Some(Auth::Query {
                name: "key",
                value: Cow::Borrowed(&self.key),
            }),
            query: Some(query),
            ..Default::default()
        }
    }
}
