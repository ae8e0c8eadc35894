//! Raw analysis payload as returned by `GET /session/{id}`
//!
//! Status values stay plain strings here. Classifying them (and flagging
//! values outside the fixed enumerations) is the interpreter's job, so an
//! unexpected status never turns into a decode failure. That includes
//! statuses delivered as `null` or as numbers: they arrive as their JSON
//! text and are rejected later. A score that is not a number decodes as
//! absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Status as delivered; any non-string value becomes its JSON text
fn lenient_status<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Display text; `null` is empty, other non-strings become their JSON text
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// Top-level analysis result
///
/// Any missing facet means no usable result exists for the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    /// Legal-compliance facet
    #[serde(default)]
    pub compliance: Option<RawCompliance>,
    /// Business-value facet
    #[serde(default)]
    pub business: Option<RawBusiness>,
    /// Tool recommendation facet
    #[serde(default)]
    pub tools: Option<RawTools>,
}

/// Compliance facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCompliance {
    /// `green` | `yellow` | `red`
    #[serde(deserialize_with = "lenient_status")]
    pub gdpr_status: String,
    /// Cited GDPR article(s)
    #[serde(deserialize_with = "lenient_text")]
    pub gdpr_section: String,
    /// `ok` | `warning` | `violation`
    #[serde(deserialize_with = "lenient_status")]
    pub ai_act_status: String,
    /// Cited AI Act article(s)
    #[serde(deserialize_with = "lenient_text")]
    pub ai_act_section: String,
    /// Narrative per axis
    #[serde(deserialize_with = "null_as_default")]
    pub explanations: RawExplanations,
}

/// Per-axis explanation text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawExplanations {
    /// GDPR reasoning
    #[serde(deserialize_with = "lenient_text")]
    pub gdpr: String,
    /// AI Act reasoning
    #[serde(deserialize_with = "lenient_text")]
    pub ai_act: String,
}

/// Business-value facet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBusiness {
    /// Score in `[0, 10]`; absent scores are a contract violation
    #[serde(deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    /// How the score was reached
    #[serde(deserialize_with = "lenient_text")]
    pub narrative: String,
}

/// Tool recommendation facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTools {
    /// Engine-ordered recommendations
    #[serde(deserialize_with = "null_as_default")]
    pub recommendations: Vec<Recommendation>,
}

/// Single tool recommendation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    /// Tool name
    #[serde(deserialize_with = "lenient_text")]
    pub tool: String,
    /// Why it fits
    #[serde(deserialize_with = "lenient_text")]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_full_payload() {
        let raw = serde_json::json!({
            "compliance": {
                "gdpr_status": "yellow",
                "gdpr_section": "Art. 6",
                "ai_act_status": "ok",
                "ai_act_section": "Art. 52",
                "explanations": { "gdpr": "needs consent", "ai_act": "minimal risk" }
            },
            "business": { "score": 5.5, "narrative": "saves an hour a week" },
            "tools": { "recommendations": [ { "tool": "Zapier", "reason": "glue" } ] }
        });

        let payload: AnalysisPayload = serde_json::from_value(raw).unwrap();

        let compliance = payload.compliance.unwrap();
        assert_eq!(compliance.gdpr_status, "yellow");
        assert_eq!(compliance.explanations.ai_act, "minimal risk");
        assert_eq!(payload.business.unwrap().score, Some(5.5));
    }

    #[test]
    fn unknown_status_still_decodes() {
        let raw = serde_json::json!({
            "compliance": { "gdpr_status": "purple", "ai_act_status": "maybe" },
        });

        let payload: AnalysisPayload = serde_json::from_value(raw).unwrap();
        assert!(payload.business.is_none());
        assert_eq!(payload.compliance.unwrap().gdpr_status, "purple");
    }

    #[test]
    fn null_facets_are_missing() {
        let raw = serde_json::json!({ "compliance": null, "business": null, "tools": null });
        let payload: AnalysisPayload = serde_json::from_value(raw).unwrap();
        assert_eq!(payload, AnalysisPayload::default());
    }

    #[test]
    fn non_string_status_decodes_as_text() {
        let raw = serde_json::json!({
            "compliance": {
                "gdpr_status": null,
                "gdpr_section": null,
                "ai_act_status": 2,
                "explanations": { "gdpr": null, "ai_act": "minimal risk" }
            },
            "business": { "score": "hoch", "narrative": null },
            "tools": { "recommendations": null }
        });

        let payload: AnalysisPayload = serde_json::from_value(raw).unwrap();
        let compliance = payload.compliance.unwrap();
        assert_eq!(compliance.gdpr_status, "null");
        assert_eq!(compliance.ai_act_status, "2");
        assert_eq!(compliance.gdpr_section, "");
        assert_eq!(compliance.explanations.gdpr, "");

        let business = payload.business.unwrap();
        assert_eq!(business.score, None);
        assert_eq!(business.narrative, "");
        assert!(payload.tools.unwrap().recommendations.is_empty());
    }

    #[test]
    fn integer_score_is_a_number() {
        let raw = serde_json::json!({ "business": { "score": 7 } });
        let payload: AnalysisPayload = serde_json::from_value(raw).unwrap();
        assert_eq!(payload.business.unwrap().score, Some(7.0));
    }
}
