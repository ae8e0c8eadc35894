//! Transport boundary to the analysis engine
//!
//! Both calls are fire-and-await. Timeouts belong to implementations.

use crate::error::TransportError;
use crate::payload::{IntakePayload, SessionId};
use crate::wire::AnalysisPayload;
use async_trait::async_trait;
use std::sync::Arc;

/// Outcome of a successful fetch round-trip
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Engine returned a payload for the session
    Found(AnalysisPayload),
    /// No analysis exists for the identifier (not computed yet, or expired)
    NotFound,
}

/// Remote analysis engine
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    /// Submit a finalized intake and receive the session identifier
    async fn analyze(&self, payload: &IntakePayload) -> Result<SessionId, TransportError>;

    /// Fetch the analysis for a previously issued session identifier
    async fn fetch_result(&self, session: &SessionId) -> Result<FetchOutcome, TransportError>;
}

#[async_trait]
impl<T: AnalysisTransport + ?Sized> AnalysisTransport for Arc<T> {
    async fn analyze(&self, payload: &IntakePayload) -> Result<SessionId, TransportError> {
        (**self).analyze(payload).await
    }

    async fn fetch_result(&self, session: &SessionId) -> Result<FetchOutcome, TransportError> {
        (**self).fetch_result(session).await
    }
}
