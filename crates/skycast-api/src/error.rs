use thiserror::Error;

/// Top-level error type for the `skycast-api` crate.
///
/// Deliberately coarse: the provider collapses unknown place, bad
/// credential, and rate limiting into an opaque error body, and nothing
/// downstream differentiates them. Transport failures (DNS, connect,
/// timeout) fold into [`Error::Provider`] with no status code.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider refused the request or could not be reached.
    #[error("weather provider error: {message}")]
    Provider {
        /// HTTP status, when the provider answered at all.
        status: Option<u16>,
        /// Provider-defined message, opaque, for diagnostics only.
        message: String,
    },

    /// A 2xx body that does not match the documented response shape.
    /// A missing required field lands here, never in a partial reading.
    #[error("malformed provider response: {message}")]
    MalformedResponse { message: String, body: String },

    /// The configured base URL could not be parsed or joined.
    #[error("invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// HTTP status code, if the provider produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => *status,
            _ => None,
        }
    }

    /// `true` when the provider actively rejected the request
    /// (as opposed to an unreachable host or a garbled body).
    pub fn is_provider_rejection(&self) -> bool {
        matches!(self, Self::Provider { status: Some(_), .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Provider {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
