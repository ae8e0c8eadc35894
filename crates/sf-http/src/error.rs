//! Transport construction errors and reqwest error mapping

use sf_core::TransportError;

/// Characters of an error body kept in `TransportError::Status`
const MAX_BODY_CHARS: usize = 512;

/// Failure building the HTTP transport
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Base URL does not parse
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Base URL cannot carry endpoint paths (e.g. `mailto:`)
    #[error("base url cannot carry a path: {0}")]
    UnsupportedBaseUrl(String),

    /// reqwest client could not be built
    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Map a reqwest failure onto the transport taxonomy
pub(crate) fn transport_error(err: &reqwest::Error, timeout_secs: u64) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            duration_secs: timeout_secs,
        }
    } else if err.is_decode() {
        TransportError::MalformedResponse(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}

/// Keep error bodies short enough for logs and user messages
pub(crate) fn truncate_body(body: String) -> String {
    if body.chars().count() <= MAX_BODY_CHARS {
        body
    } else {
        body.chars().take(MAX_BODY_CHARS).collect()
    }
}
