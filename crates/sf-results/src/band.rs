//! Business-value banding

use crate::error::ContractViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score of the high band
pub const HIGH_FROM: f64 = 7.0;

/// Lowest score of the medium band
pub const MEDIUM_FROM: f64 = 4.0;

/// Upper bound of the score scale
pub const MAX_SCORE: f64 = 10.0;

/// Human-facing classification of the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessBand {
    /// `score < 4`
    Low,
    /// `4 <= score < 7`
    Medium,
    /// `score >= 7`
    High,
}

impl BusinessBand {
    /// Display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BusinessBand::High => "Hoch",
            BusinessBand::Medium => "Mittel",
            BusinessBand::Low => "Niedrig",
        }
    }

    /// Stable key (`high`, `medium`, `low`)
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            BusinessBand::High => "high",
            BusinessBand::Medium => "medium",
            BusinessBand::Low => "low",
        }
    }
}

impl fmt::Display for BusinessBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band of a score; lower bounds are inclusive
///
/// # Errors
/// `ContractViolation::ScoreOutOfRange` for scores outside `[0, 10]` and NaN.
pub fn classify_business_band(score: f64) -> Result<BusinessBand, ContractViolation> {
    if !(0.0..=MAX_SCORE).contains(&score) {
        return Err(ContractViolation::ScoreOutOfRange(score));
    }
    Ok(if score >= HIGH_FROM {
        BusinessBand::High
    } else if score >= MEDIUM_FROM {
        BusinessBand::Medium
    } else {
        BusinessBand::Low
    })
}
