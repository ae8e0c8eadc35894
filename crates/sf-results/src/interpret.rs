//! Payload to render facets

use crate::band::{classify_business_band, BusinessBand};
use crate::error::ContractViolation;
use crate::indicator::{ordered_indicator, Indicator};
use crate::status::{AiActStatus, Axis, AxisStatus, GdprStatus, UNKNOWN_LABEL};
use sf_core::{AnalysisPayload, RawBusiness, Recommendation};

/// One compliance axis, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFacet<S> {
    /// Classified status, `None` when the engine broke the vocabulary
    pub status: Option<S>,
    /// Status exactly as delivered
    pub raw_status: String,
    /// Cited legal section
    pub section: String,
    /// Reasoning, verbatim
    pub explanation: String,
}

impl<S: AxisStatus> AxisFacet<S> {
    fn classify(
        raw_status: String,
        section: String,
        explanation: String,
        violations: &mut Vec<ContractViolation>,
    ) -> Self {
        let status = match S::classify(&raw_status) {
            Ok(status) => Some(status),
            Err(violation) => {
                tracing::warn!(%violation, "engine returned unclassifiable status");
                violations.push(violation);
                None
            }
        };
        Self {
            status,
            raw_status,
            section,
            explanation,
        }
    }

    /// Axis of the facet
    #[inline]
    #[must_use]
    pub fn axis(&self) -> Axis {
        S::AXIS
    }

    /// Indicator position, `None` for the unknown state
    #[inline]
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.status.map(AxisStatus::index)
    }

    /// Traffic light for the axis, derived on every call
    #[must_use]
    pub fn indicator(&self) -> Indicator {
        self.index()
            .map_or_else(|| Indicator::unknown(S::AXIS), |i| ordered_indicator(S::AXIS, i))
    }

    /// Status badge text
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.status.map_or(UNKNOWN_LABEL, AxisStatus::label)
    }
}

/// Business value, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessFacet {
    /// Score as delivered
    pub score: Option<f64>,
    /// Band, `None` when the score is missing or out of range
    pub band: Option<BusinessBand>,
    /// How the score was reached, verbatim
    pub narrative: String,
}

impl BusinessFacet {
    fn classify(raw: RawBusiness, violations: &mut Vec<ContractViolation>) -> Self {
        let band = match raw.score.ok_or(ContractViolation::MissingScore) {
            Ok(score) => classify_business_band(score),
            Err(missing) => Err(missing),
        };
        let band = match band {
            Ok(band) => Some(band),
            Err(violation) => {
                tracing::warn!(%violation, "engine returned unusable business score");
                violations.push(violation);
                None
            }
        };
        Self {
            score: raw.score,
            band,
            narrative: raw.narrative,
        }
    }

    /// Score with one decimal, e.g. `5.5/10`
    #[must_use]
    pub fn display_score(&self) -> String {
        match self.score {
            Some(score) if score.is_finite() => format!("{score:.1}/10"),
            _ => "–/10".to_string(),
        }
    }

    /// Band badge text
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.band.map_or(UNKNOWN_LABEL, BusinessBand::label)
    }
}

/// Fully classified analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// EU AI Act axis
    pub ai_act: AxisFacet<AiActStatus>,
    /// GDPR axis
    pub gdpr: AxisFacet<GdprStatus>,
    /// Business value
    pub business: BusinessFacet,
    /// Engine-ordered recommendations, passed through untouched
    pub recommendations: Vec<Recommendation>,
    /// Everything the engine delivered outside the contract
    pub violations: Vec<ContractViolation>,
}

impl AnalysisReport {
    /// Whether every value was classifiable
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// What a fetched payload amounts to
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    /// All facets present
    Available(AnalysisReport),
    /// A top-level facet is missing; show the empty state
    Absent,
}

/// Classify a fetched payload
#[must_use]
pub fn interpret(payload: AnalysisPayload) -> Interpretation {
    let AnalysisPayload {
        compliance: Some(compliance),
        business: Some(business),
        tools: Some(tools),
    } = payload
    else {
        tracing::debug!("analysis payload incomplete, no result available");
        return Interpretation::Absent;
    };

    let mut violations = Vec::new();
    let ai_act = AxisFacet::classify(
        compliance.ai_act_status,
        compliance.ai_act_section,
        compliance.explanations.ai_act,
        &mut violations,
    );
    let gdpr = AxisFacet::classify(
        compliance.gdpr_status,
        compliance.gdpr_section,
        compliance.explanations.gdpr,
        &mut violations,
    );
    let business = BusinessFacet::classify(business, &mut violations);

    Interpretation::Available(AnalysisReport {
        ai_act,
        gdpr,
        business,
        recommendations: tools.recommendations,
        violations,
    })
}
