//! Error types shared across the workspace
//!
//! - Catalog lookups of unknown labels
//! - Transport failures on `analyze` / `fetch_result`
//! - History store access

/// Unknown catalog label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Label is not part of the fixed catalog
    #[error("unknown {catalog} value: {value:?}")]
    Unknown {
        /// Catalog the lookup ran against
        catalog: &'static str,
        /// Offending input
        value: String,
    },
}

/// Transport-level failure talking to the analysis engine
///
/// Always recoverable from the core's point of view: local state is kept and
/// the user may retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Connection, DNS or I/O level failure
    #[error("network error: {0}")]
    Network(String),

    /// Engine answered with a non-2xx status
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Engine answered 2xx but the body could not be used
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Timeout configured on the transport elapsed
    #[error("request timed out after {duration_secs}s")]
    Timeout {
        /// Configured timeout
        duration_secs: u64,
    },

    /// Caller lost interest before the call returned
    #[error("request cancelled")]
    Cancelled,
}

impl TransportError {
    /// Check if retrying the same request can succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::MalformedResponse(_))
    }

    /// Status code, if the engine answered at all
    #[inline]
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// History store errors
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// Operation needs a signed-in user
    #[error("not signed in")]
    NotSignedIn,

    /// Export could not be written as CSV
    #[error("export failed: {0}")]
    Export(#[from] csv::Error),

    /// Backing store failed
    #[error("record store error: {0}")]
    Store(String),
}
