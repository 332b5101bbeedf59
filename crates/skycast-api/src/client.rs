// Hand-crafted async HTTP client for weatherapi.com (v1).
//
// Base path: /v1/
// Auth: `key` query parameter

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::CurrentResponse;

// ── Error response shape from the provider ───────────────────────────

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the weatherapi.com current-conditions endpoint.
///
/// One outbound request per lookup, no retries: a failed attempt is
/// surfaced to the caller immediately.
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

impl WeatherClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    pub fn new(
        base_url: &str,
        api_key: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, api_key, http)
    }

    /// Wrap an existing `reqwest::Client` (used by the wiremock tests).
    pub fn from_reqwest(
        base_url: &str,
        api_key: SecretString,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Ensure the base URL ends with `/v1/` so relative joins work.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/v1") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/v1/"));
        }
        Ok(url)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Fetch current conditions for a place name.
    ///
    /// The place name is URL-escaped by reqwest's query serializer. A
    /// non-2xx answer becomes [`Error::Provider`]; a 2xx body that does
    /// not deserialize becomes [`Error::MalformedResponse`].
    pub async fn fetch_current(&self, place: &str) -> Result<CurrentResponse, Error> {
        let url = self.base_url.join("current.json")?;
        debug!(%place, "GET current.json");

        let resp = self
            .http
            .get(url)
            .query(&[
                ("key", self.api_key.expose_secret()),
                ("q", place),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(Error::Provider {
                status: Some(status.as_u16()),
                message: provider_message(&body, status),
            });
        }

        serde_json::from_str::<CurrentResponse>(&body).map_err(|e| Error::MalformedResponse {
            message: e.to_string(),
            body,
        })
    }
}

/// Pull the provider's message out of its `{"error":{...}}` envelope,
/// falling back to the HTTP status text when the body is not parseable.
fn provider_message(body: &str, status: reqwest::StatusCode) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|env| env.error.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("provider request failed")
                .to_owned()
        })
}
