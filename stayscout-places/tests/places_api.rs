//! Integration tests for `PlacesApi` and `ReviewEnricher` using wiremock
//! HTTP mocks.

use serde_json::json;
use stayscout_common::Rating;
use stayscout_places::{Enrichment, PlacesApi, ReviewEnricher};
use stayscout_store::JsonStore;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_in(tmp: &TempDir) -> JsonStore {
    JsonStore::new(
        tmp.path().join("hotels_data.json"),
        tmp.path().join("google_review_data.json"),
    )
}

fn enricher(server: &MockServer) -> ReviewEnricher {
    let api = PlacesApi::new(&server.uri(), "test-key".into()).expect("client builds");
    ReviewEnricher::new(api, 500, "restaurant")
}

async fn mount_find_place(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/findplacefromtext/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("inputtype", "textquery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn find_place_carries_key_and_parses_candidate() {
    let server = MockServer::start().await;
    mount_find_place(
        &server,
        json!({
            "status": "OK",
            "candidates": [{
                "place_id": "pid-1",
                "geometry": { "location": { "lat": 35.68, "lng": 139.76 } }
            }]
        }),
    )
    .await;

    let api = PlacesApi::new(&server.uri(), "test-key".into()).unwrap();
    let resp = api.find_place("Hotel Vega Tokyo").await.expect("parses");

    let candidate = resp.first_candidate().expect("one candidate");
    assert_eq!(candidate.place_id, "pid-1");
    assert_eq!(candidate.geometry.location.lat, 35.68);
}

#[tokio::test]
async fn enrich_assembles_and_persists_full_record() {
    let server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);

    mount_find_place(
        &server,
        json!({
            "status": "OK",
            "candidates": [{
                "place_id": "pid-1",
                "geometry": { "location": { "lat": 35.68, "lng": 139.76 } }
            }]
        }),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("place_id", "pid-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "name": "Hotel Vega",
                "rating": 4.4,
                "reviews": [
                    { "author_name": "Mika", "text": "Great stay.", "rating": 5 },
                    { "author_name": "Jonas", "text": "Thin walls.", "rating": 3 }
                ]
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("location", "35.68,139.76"))
        .and(query_param("radius", "500"))
        .and(query_param("type", "restaurant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "name": "Ramen Taro", "rating": 4.1 },
                { "name": "Unrated Cafe" }
            ]
        })))
        .mount(&server)
        .await;

    let outcome = enricher(&server)
        .enrich("Hotel Vega", &store)
        .await
        .expect("enrichment succeeds");

    let Enrichment::Found(record) = outcome else {
        panic!("expected a found record");
    };
    assert_eq!(record.name, "Hotel Vega");
    assert_eq!(record.rating, Rating::Score(4.4));
    assert_eq!(record.review_count, 2);
    assert_eq!(record.nearby_places.len(), 2);
    assert_eq!(record.nearby_places[1].rating, Rating::Unavailable);

    // The record is persisted before enrich returns.
    assert_eq!(store.load_review().unwrap(), record);
}

#[tokio::test]
async fn zero_results_persists_placeholder_without_error() {
    let server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);

    mount_find_place(&server, json!({ "status": "ZERO_RESULTS", "candidates": [] })).await;

    let outcome = enricher(&server)
        .enrich("Ghost Hotel", &store)
        .await
        .expect("not-found is not an error");

    assert!(matches!(outcome, Enrichment::NotFound));

    let persisted = store.load_review().unwrap();
    assert_eq!(persisted.name, "Ghost Hotel");
    assert_eq!(persisted.rating, Rating::Unavailable);
    assert!(persisted.reviews.is_empty());
    assert_eq!(persisted.review_count, 0);
}

#[tokio::test]
async fn details_without_rating_or_reviews_default_cleanly() {
    let server = MockServer::start().await;
    let tmp = TempDir::new().unwrap();
    let store = store_in(&tmp);

    mount_find_place(
        &server,
        json!({
            "status": "OK",
            "candidates": [{
                "place_id": "pid-2",
                "geometry": { "location": { "lat": 35.0, "lng": 135.0 } }
            }]
        }),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "name": "Hotel Lyra" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let outcome = enricher(&server)
        .enrich("Hotel Lyra", &store)
        .await
        .expect("enrichment succeeds");

    let Enrichment::Found(record) = outcome else {
        panic!("expected a found record");
    };
    assert_eq!(record.rating, Rating::Unavailable);
    assert!(record.reviews.is_empty());
    assert_eq!(record.review_count, 0);
}
