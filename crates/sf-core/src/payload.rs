//! Finalized submission payload and session identifier

use crate::catalog::{Application, Frequency, Stakeholder, TimeRequired};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token correlating a submission with its later-fetched result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an engine-issued identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the engine handed back an empty token
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Verbatim copy of a complete intake draft, as sent to `analyze`
///
/// Selections keep the order in which the user picked them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakePayload {
    /// Free-text process description
    pub description: String,
    /// Selected applications
    pub applications: Vec<Application>,
    /// Time per execution
    pub time_required: TimeRequired,
    /// Execution frequency
    pub frequency: Frequency,
    /// Affected people
    pub stakeholders: Vec<Stakeholder>,
    /// Whether personal data is processed
    pub uses_personal_data: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_wire_shape() {
        let payload = IntakePayload {
            description: "Rechnungen monatlich abgleichen".to_string(),
            applications: vec![Application::Slack, Application::Notion],
            time_required: TimeRequired::FifteenToThirtyMinutes,
            frequency: Frequency::Weekly,
            stakeholders: vec![Stakeholder::Myself],
            uses_personal_data: true,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": "Rechnungen monatlich abgleichen",
                "applications": ["Slack", "Notion"],
                "time_required": "15-30 min",
                "frequency": "wöchentlich",
                "stakeholders": ["mich"],
                "uses_personal_data": true,
            })
        );
    }

    #[test]
    fn session_id_is_empty() {
        assert!(SessionId::new("  ").is_empty());
        assert!(!SessionId::new("abc").is_empty());
        assert_eq!(SessionId::from("abc").to_string(), "abc");
    }
}
