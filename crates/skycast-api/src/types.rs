//! Wire types for the weatherapi.com `current.json` response.
//!
//! Every field is mandatory: no `Option`, no `serde(default)`. An
//! incomplete provider response must fail deserialization rather than
//! produce a partially-populated value.

use serde::Deserialize;

/// Success body of `GET /v1/current.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub location: LocationData,
    pub current: CurrentData,
}

/// The `location` object: resolved place and coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationData {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// The `current` object: the observation itself.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub humidity: u8,
    pub wind_kph: f64,
    pub pressure_mb: f64,
    /// 1 for daytime, 0 for night.
    pub is_day: u8,
    pub condition: ConditionData,
}

/// The `current.condition` object.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionData {
    pub text: String,
    pub code: u16,
}
