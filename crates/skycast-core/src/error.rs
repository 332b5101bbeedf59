// ── Core error types ──
//
// User-facing errors from skycast-core. Consumers never see reqwest
// errors or serde parse failures directly; the `From<skycast_api::Error>`
// impl translates transport-layer errors into these variants.

use thiserror::Error;

/// Unified error type for the core crate.
///
/// Only two failure shapes exist for a lookup. The provider either
/// refused or never answered ([`CoreError::Provider`]), or it answered
/// with a body that does not match its own contract
/// ([`CoreError::MalformedResponse`]).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("provider error: {message}")]
    Provider {
        message: String,
        status: Option<u16>,
    },

    #[error("malformed provider response: {message}")]
    MalformedResponse { message: String },
}

impl CoreError {
    /// Detail line for the log file. The UI shows a fixed banner instead.
    pub fn log_detail(&self) -> &str {
        match self {
            Self::Provider { message, .. } | Self::MalformedResponse { message } => message,
        }
    }
}

impl From<skycast_api::Error> for CoreError {
    fn from(err: skycast_api::Error) -> Self {
        match err {
            skycast_api::Error::Provider { status, message } => {
                CoreError::Provider { message, status }
            }
            skycast_api::Error::MalformedResponse { message, .. } => {
                CoreError::MalformedResponse { message }
            }
            skycast_api::Error::InvalidUrl(e) => CoreError::Provider {
                message: format!("invalid provider URL: {e}"),
                status: None,
            },
        }
    }
}
