/*
[INPUT]:  Error sources (encoding, URL, transport, body read, decoding, config)
[OUTPUT]: Structured error types identifying the failed pipeline phase
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the ICObench adapter
#[derive(Error, Debug)]
pub enum IcobenchError {
    /// Request payload could not be serialized
    #[error("icobench: failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// Base URL or endpoint path could not be parsed
    #[error("icobench: invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Endpoint path would resolve outside the API base URL
    #[error("icobench: invalid endpoint path: {0:?}")]
    InvalidEndpoint(String),

    /// Public key cannot be carried in an HTTP header
    #[error("icobench: invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// HTTP request object could not be built
    #[error("icobench: failed to build request: {0}")]
    Build(#[source] reqwest::Error),

    /// Network, DNS, TLS or timeout failure while sending
    #[error("icobench: transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// Connection failed while draining the response body
    #[error("icobench: failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    /// Response body is not valid JSON or does not fit the expected shape
    #[error("icobench: failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// Non-2xx status, only produced when status checking is enabled
    #[error("icobench: API returned HTTP {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Call aborted through its cancellation token
    #[error("icobench: request cancelled")]
    Cancelled,

    /// Configuration error
    #[error("icobench: configuration error: {0}")]
    Config(String),
}

/// Pipeline phase an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Encode,
    Construct,
    Transport,
    Read,
    Decode,
    Status,
    Cancelled,
    Config,
}

impl IcobenchError {
    /// Phase of the request pipeline that failed
    pub fn phase(&self) -> ErrorPhase {
        match self {
            IcobenchError::Encode(_) => ErrorPhase::Encode,
            IcobenchError::InvalidUrl(_)
            | IcobenchError::InvalidEndpoint(_)
            | IcobenchError::InvalidHeader(_)
            | IcobenchError::Build(_) => ErrorPhase::Construct,
            IcobenchError::Transport(_) => ErrorPhase::Transport,
            IcobenchError::Read(_) => ErrorPhase::Read,
            IcobenchError::Decode { .. } => ErrorPhase::Decode,
            IcobenchError::Api { .. } => ErrorPhase::Status,
            IcobenchError::Cancelled => ErrorPhase::Cancelled,
            IcobenchError::Config(_) => ErrorPhase::Config,
        }
    }

    /// Check if a configured timeout lapsed
    pub fn is_timeout(&self) -> bool {
        match self {
            IcobenchError::Transport(e) | IcobenchError::Read(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if the error is worth retrying. The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            IcobenchError::Transport(_) | IcobenchError::Read(_) => true,
            IcobenchError::Api { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    pub(crate) fn decode(status: StatusCode, source: serde_json::Error) -> Self {
        IcobenchError::Decode { status, source }
    }

    /// Create an API error from status code and body text
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        IcobenchError::Api {
            status,
            body: body.into(),
        }
    }
}

/// Result type alias for ICObench operations
pub type Result<T> = std::result::Result<T, IcobenchError>;
