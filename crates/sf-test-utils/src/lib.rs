//! Testing utilities for the Solution Finder workspace
//!
//! Shared fixtures and a scripted in-memory transport.

#![allow(missing_docs)]

use async_trait::async_trait;
use sf_core::{
    AnalysisPayload, AnalysisTransport, Application, FetchOutcome, Frequency, IntakePayload,
    SessionId, Stakeholder, TimeRequired, TransportError,
};
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;

/// Description with exactly 25 characters
pub const SAMPLE_DESCRIPTION: &str = "Belege in Excel eintragen";

/// Transport answering from a script and recording every call
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    analyze_replies: Mutex<VecDeque<Result<SessionId, TransportError>>>,
    results: Mutex<HashMap<SessionId, Result<FetchOutcome, TransportError>>>,
    submitted: Mutex<Vec<IntakePayload>>,
    fetched: Mutex<Vec<SessionId>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next `analyze` call
    pub async fn push_analyze(&self, reply: Result<SessionId, TransportError>) {
        self.analyze_replies.lock().await.push_back(reply);
    }

    /// Answer `fetch_result` for `session`
    pub async fn set_result(&self, session: SessionId, reply: Result<FetchOutcome, TransportError>) {
        self.results.lock().await.insert(session, reply);
    }

    pub async fn submitted(&self) -> Vec<IntakePayload> {
        self.submitted.lock().await.clone()
    }

    pub async fn fetched(&self) -> Vec<SessionId> {
        self.fetched.lock().await.clone()
    }
}

#[async_trait]
impl AnalysisTransport for ScriptedTransport {
    async fn analyze(&self, payload: &IntakePayload) -> Result<SessionId, TransportError> {
        self.submitted.lock().await.push(payload.clone());
        self.analyze_replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
    }

    async fn fetch_result(&self, session: &SessionId) -> Result<FetchOutcome, TransportError> {
        self.fetched.lock().await.push(session.clone());
        self.results
            .lock()
            .await
            .get(session)
            .cloned()
            .unwrap_or(Ok(FetchOutcome::NotFound))
    }
}

/// Payload matching the end-to-end scenario
pub fn sample_payload() -> IntakePayload {
    IntakePayload {
        description: SAMPLE_DESCRIPTION.to_string(),
        applications: vec![Application::Notion],
        time_required: TimeRequired::FifteenToThirtyMinutes,
        frequency: Frequency::Weekly,
        stakeholders: vec![Stakeholder::Myself],
        uses_personal_data: true,
    }
}

/// Raw engine answer as JSON
pub fn analysis_json(gdpr: &str, ai_act: &str, score: f64) -> serde_json::Value {
    serde_json::json!({
        "compliance": {
            "gdpr_status": gdpr,
            "gdpr_section": "Art. 6 DSGVO",
            "ai_act_status": ai_act,
            "ai_act_section": "Art. 52 AI Act",
            "explanations": {
                "gdpr": "Einwilligung erforderlich",
                "ai_act": "Geringes Risiko"
            }
        },
        "business": { "score": score, "narrative": "Spart zwei Stunden pro Woche" },
        "tools": {
            "recommendations": [
                { "tool": "Zapier", "reason": "Verbindet die Anwendungen" },
                { "tool": "Make", "reason": "Visuelle Automatisierung" }
            ]
        }
    })
}

/// Raw engine answer, decoded
pub fn analysis_payload(gdpr: &str, ai_act: &str, score: f64) -> AnalysisPayload {
    serde_json::from_value(analysis_json(gdpr, ai_act, score)).expect("fixture decodes")
}
