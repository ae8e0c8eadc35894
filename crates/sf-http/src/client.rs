//! reqwest-backed [`AnalysisTransport`]

use crate::config::ApiConfig;
use crate::error::{transport_error, truncate_body, HttpError};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use sf_core::{AnalysisPayload, AnalysisTransport, FetchOutcome, IntakePayload, SessionId, TransportError};
use url::Url;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    session_id: Option<String>,
}

/// Transport speaking JSON over HTTP to the analysis API
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
}

impl HttpTransport {
    /// Build a transport from configuration
    ///
    /// # Errors
    /// - `HttpError::InvalidBaseUrl` if `base_url` does not parse
    /// - `HttpError::UnsupportedBaseUrl` if it cannot carry paths
    /// - `HttpError::Client` if the reqwest client cannot be built
    pub fn new(config: &ApiConfig) -> Result<Self, HttpError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(HttpError::UnsupportedBaseUrl(config.base_url.clone()));
        }
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// API root requests are resolved against
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn error_status(response: Response) -> TransportError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        TransportError::Status {
            status,
            body: truncate_body(body),
        }
    }
}

#[async_trait]
impl AnalysisTransport for HttpTransport {
    async fn analyze(&self, payload: &IntakePayload) -> Result<SessionId, TransportError> {
        let url = self.endpoint(&["generate"]);
        tracing::debug!(%url, "posting intake");

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| transport_error(&e, self.timeout_secs))?;

        if !response.status().is_success() {
            let err = Self::error_status(response).await;
            tracing::warn!(%err, "analysis request rejected");
            return Err(err);
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| transport_error(&e, self.timeout_secs))?;

        let session = body
            .session_id
            .map(SessionId::new)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| TransportError::MalformedResponse("missing session_id".to_string()))?;

        tracing::info!(%session, "analysis session created");
        Ok(session)
    }

    async fn fetch_result(&self, session: &SessionId) -> Result<FetchOutcome, TransportError> {
        let url = self.endpoint(&["session", session.as_str()]);
        tracing::debug!(%url, "fetching analysis");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&e, self.timeout_secs))?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(FetchOutcome::NotFound),
            status if !status.is_success() => {
                let err = Self::error_status(response).await;
                tracing::warn!(%err, "fetching analysis rejected");
                return Err(err);
            }
            _ => {}
        }

        let payload: AnalysisPayload = response
            .json()
            .await
            .map_err(|e| transport_error(&e, self.timeout_secs))?;
        Ok(FetchOutcome::Found(payload))
    }
}
