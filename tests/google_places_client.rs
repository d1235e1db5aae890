//! Integration tests for `GooglePlacesClient` and the search adapter on top of it.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use places_search::{
    ClientSettings, GooglePlacesClient, PlaceSearchClient, PlacesApi, SearchError, StatusCategory,
};

/// Client pointed at the mock server: fast backoff, generous QPS.
fn test_client(server: &MockServer, max_retries: u32) -> GooglePlacesClient {
    let settings = ClientSettings {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        queries_per_second: 100,
        max_retries,
        retry_delay: Duration::from_millis(10),
    };
    GooglePlacesClient::with_settings("test-key".to_string(), settings)
        .expect("failed to build test GooglePlacesClient")
}

fn search_client(server: &MockServer, query: &str) -> PlaceSearchClient {
    PlaceSearchClient::with_api(query, "test-key", |_| Ok(test_client(server, 0)))
        .expect("failed to build PlaceSearchClient")
}

fn cafe_result(name: &str, place_id: &str) -> serde_json::Value {
    json!({
        "name": name,
        "formatted_address": "Praça do Comércio, Lisboa",
        "rating": 4.5,
        "user_ratings_total": 120,
        "place_id": place_id,
        "types": ["cafe", "food", "point_of_interest"],
        "business_status": "OPERATIONAL",
        "geometry": { "location": { "lat": 38.7075, "lng": -9.1364 } }
    })
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

#[tokio::test]
async fn text_search_sends_query_and_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "coffee in lisbon"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [cafe_result("Cafe Lux", "p1")],
            "next_page_token": "token-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let response = client.text_search("coffee in lisbon").await.unwrap();

    assert_eq!(response.status, "OK");
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.next_page_token.as_deref(), Some("token-2"));
}

#[tokio::test]
async fn place_details_sends_place_id_and_field_mask() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "p1"))
        .and(query_param("fields", "website,formatted_phone_number,url"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": { "website": "https://x" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let response = client.place_details("p1").await.unwrap();

    assert_eq!(response.status, "OK");
    assert_eq!(response.result.unwrap()["website"], "https://x");
}

#[tokio::test]
async fn service_unavailable_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "ZERO_RESULTS", "results": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 3);
    let response = client.text_search("anything").await.unwrap();

    assert_eq!(response.status, "ZERO_RESULTS");
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn retries_exhausted_surface_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server, 1);
    let err = client.place_details("p1").await.unwrap_err();

    match err {
        SearchError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_surfaces_transport_error() {
    // Nothing listens on port 1; the connect failure is retried once, then reported
    let settings = ClientSettings {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_secs(5),
        queries_per_second: 100,
        max_retries: 1,
        retry_delay: Duration::from_millis(10),
    };
    let client = GooglePlacesClient::with_settings("secret-test-key".to_string(), settings)
        .expect("failed to build test GooglePlacesClient");

    let err = client.text_search("anything").await.unwrap_err();

    assert!(matches!(err, SearchError::Transport(_)), "got {err:?}");
    assert!(!err.to_string().contains("secret-test-key"));
    assert!(!format!("{err:?}").contains("secret-test-key"));
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, 3);
    let err = client.text_search("anything").await.unwrap_err();

    assert!(matches!(err, SearchError::Http { status: 404, .. }));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server, 0);
    let err = client.text_search("anything").await.unwrap_err();

    assert!(matches!(err, SearchError::Parse(_)), "got {err:?}");
    assert!(!err.to_string().contains("test-key"));
}

// ---------------------------------------------------------------------------
// Search adapter over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_with_details_enriches_every_place() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [cafe_result("Cafe Lux", "p1"), cafe_result("Pastelaria", "p2")]
        })))
        .mount(&server)
        .await;

    for (place_id, n) in [("p1", 1), ("p2", 2)] {
        Mock::given(method("GET"))
            .and(path("/details/json"))
            .and(query_param("place_id", place_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "result": {
                    "website": format!("https://site{n}.example"),
                    "formatted_phone_number": format!("555-000{n}"),
                    "url": format!("https://maps.google.com/?cid={n}")
                }
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = search_client(&server, "pastry");
    let places = client.search(true).await.unwrap();

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Cafe Lux");
    assert_eq!(places[0].website.as_deref(), Some("https://site1.example"));
    assert_eq!(places[1].phone.as_deref(), Some("555-0002"));
    assert_eq!(
        places[1].google_url.as_deref(),
        Some("https://maps.google.com/?cid=2")
    );
    assert_eq!(places[1].ratings_count, 120);
}

#[tokio::test]
async fn request_denied_on_second_detail_stops_enrichment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                cafe_result("A", "a"),
                cafe_result("B", "b"),
                cafe_result("C", "c")
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": { "website": "https://a.example" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "OK", "result": {}})))
        .expect(0)
        .mount(&server)
        .await;

    let client = search_client(&server, "anything");
    let err = client.search(true).await.unwrap_err();

    assert_eq!(err.category(), Some(StatusCategory::RequestDenied));
    assert_eq!(
        err.to_string(),
        "REQUEST_DENIED error from service. Your API key or client information might be invalid"
    );
}

#[tokio::test]
async fn invalid_request_status_on_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "INVALID_REQUEST",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = search_client(&server, "");
    let err = client.search(false).await.unwrap_err();

    assert_eq!(err.category(), Some(StatusCategory::InvalidRequest));
    assert!(err.to_string().contains("malformed"));
}
