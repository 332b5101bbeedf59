//! skycast-api: async HTTP client for the weatherapi.com `current.json`
//! endpoint.
//!
//! This crate knows nothing about the UI or the domain model; it speaks
//! the provider's wire format and nothing else. `skycast-core` converts
//! the raw [`CurrentResponse`] into its `Reading` domain type.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::WeatherClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{ConditionData, CurrentData, CurrentResponse, LocationData};
