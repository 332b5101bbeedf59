// Integration tests for `WeatherClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_api::{Error, WeatherClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, WeatherClient) {
    let server = MockServer::start().await;
    let client = WeatherClient::from_reqwest(
        &server.uri(),
        SecretString::from("test-key"),
        reqwest::Client::new(),
    )
    .unwrap();
    (server, client)
}

fn paris_body() -> serde_json::Value {
    json!({
        "location": {
            "name": "Paris",
            "country": "France",
            "lat": 48.85,
            "lon": 2.35
        },
        "current": {
            "temp_c": 18.4,
            "feelslike_c": 17.9,
            "humidity": 63,
            "wind_kph": 14.8,
            "pressure_mb": 1016.0,
            "is_day": 1,
            "condition": { "text": "Partly cloudy", "code": 1003 }
        }
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_current_parses_full_response() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "Paris"))
        .and(query_param("aqi", "no"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .mount(&server)
        .await;

    let resp = client.fetch_current("Paris").await.unwrap();

    assert_eq!(resp.location.name, "Paris");
    assert_eq!(resp.location.country, "France");
    assert_eq!(resp.location.lat, 48.85);
    assert_eq!(resp.location.lon, 2.35);
    assert_eq!(resp.current.temp_c, 18.4);
    assert_eq!(resp.current.humidity, 63);
    assert_eq!(resp.current.is_day, 1);
    assert_eq!(resp.current.condition.code, 1003);
    assert_eq!(resp.current.condition.text, "Partly cloudy");
}

#[tokio::test]
async fn test_place_name_is_url_escaped() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .mount(&server)
        .await;

    // reqwest percent-encodes the space; wiremock decodes it back.
    client.fetch_current("New York").await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_400_unknown_place() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .mount(&server)
        .await;

    let result = client.fetch_current("Zzzznotacity").await;

    match result {
        Err(Error::Provider {
            status,
            ref message,
        }) => {
            assert_eq!(status, Some(400));
            assert_eq!(message, "No matching location found.");
        }
        other => panic!("expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_401_bad_credential() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": 2006, "message": "API key is invalid." }
        })))
        .mount(&server)
        .await;

    let err = client.fetch_current("Paris").await.unwrap_err();
    assert!(err.is_provider_rejection());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_error_500_without_envelope_uses_status_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.fetch_current("Paris").await;

    match result {
        Err(Error::Provider {
            status,
            ref message,
        }) => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_field_is_malformed_response() {
    let (server, client) = setup().await;

    // `current` lacks the mandatory `condition` object.
    let body = json!({
        "location": {
            "name": "Paris",
            "country": "France",
            "lat": 48.85,
            "lon": 2.35
        },
        "current": {
            "temp_c": 18.4,
            "feelslike_c": 17.9,
            "humidity": 63,
            "wind_kph": 14.8,
            "pressure_mb": 1016.0,
            "is_day": 1
        }
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let result = client.fetch_current("Paris").await;

    match result {
        Err(Error::MalformedResponse { ref message, .. }) => {
            assert!(message.contains("condition"), "message was: {message}");
        }
        other => panic!("expected MalformedResponse, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_malformed_response() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.fetch_current("Paris").await;
    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}
