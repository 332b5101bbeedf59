// Shared transport configuration for building reqwest::Client instances.
//
// Kept separate from the client so tests and future endpoints reuse the
// same timeout and user-agent settings.

use std::time::Duration;

/// Transport configuration for the provider HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Whole-request timeout. The provider contract enforces nothing
    /// stricter than this transport default.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| crate::error::Error::Provider {
                status: None,
                message: format!("failed to build HTTP client: {e}"),
            })
    }
}
