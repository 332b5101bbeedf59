// ── Lookup service ──
//
// Thin orchestration over the API client: fetch, convert, translate
// errors. Owns no state beyond the client itself, so it is cheap to
// share behind an Arc.

use tracing::{debug, warn};

use skycast_api::WeatherClient;

use crate::error::CoreError;
use crate::model::Reading;

/// Performs place lookups against the weather provider.
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Look up current conditions for a place name.
    ///
    /// The caller is responsible for rejecting empty input before it
    /// gets here; a blank `place` would just round-trip a provider
    /// error.
    pub async fn lookup(&self, place: &str) -> Result<Reading, CoreError> {
        debug!(%place, "looking up current conditions");
        let response = self.client.fetch_current(place).await.map_err(|e| {
            warn!(error = %e, %place, "lookup failed");
            CoreError::from(e)
        })?;
        Ok(Reading::from(response))
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn service_for(server: &MockServer) -> WeatherService {
        let client = WeatherClient::from_reqwest(
            &server.uri(),
            SecretString::from("test-key"),
            reqwest::Client::new(),
        )
        .unwrap();
        WeatherService::new(client)
    }

    #[tokio::test]
    async fn test_lookup_returns_converted_reading() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "location": {
                    "name": "Tokyo", "country": "Japan", "lat": 35.69, "lon": 139.69
                },
                "current": {
                    "temp_c": 27.3, "feelslike_c": 30.1, "humidity": 74,
                    "wind_kph": 9.0, "pressure_mb": 1008.0, "is_day": 0,
                    "condition": { "text": "Clear", "code": 1000 }
                }
            })))
            .mount(&server)
            .await;

        let service = service_for(&server).await;
        let reading = service.lookup("Tokyo").await.unwrap();

        assert_eq!(reading.place_label(), "Tokyo, Japan");
        assert_eq!(reading.condition_code, 1000);
        assert!(!reading.is_day);
    }

    #[tokio::test]
    async fn test_lookup_translates_provider_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "code": 1006, "message": "No matching location found." }
            })))
            .mount(&server)
            .await;

        let service = service_for(&server).await;
        let err = service.lookup("nowhere").await.unwrap_err();

        match err {
            CoreError::Provider { status, message } => {
                assert_eq!(status, Some(400));
                assert_eq!(message, "No matching location found.");
            }
            other => panic!("expected Provider, got: {other:?}"),
        }
    }
}
