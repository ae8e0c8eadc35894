//! The two independent compliance axes
//!
//! GDPR and the EU AI Act each carry their own status vocabulary. They are
//! never derived from one another and never merged into a combined status.
//! Both map onto the same three ordered indicator positions: 0 compliant,
//! 1 warning, 2 violation.

use crate::error::ContractViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compliance dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// General Data Protection Regulation
    Gdpr,
    /// EU Artificial Intelligence Act
    AiAct,
}

impl Axis {
    /// Heading shown above the axis
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Axis::Gdpr => "DSGVO",
            Axis::AiAct => "EU AI Act",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Labels shared by both axes, by indicator position
const LEVEL_LABELS: [&str; 3] = ["Compliant", "Warnung", "Verstoß"];

/// Label for a status that could not be classified
pub const UNKNOWN_LABEL: &str = "Unbekannt";

/// Status vocabulary of one axis
pub trait AxisStatus: Copy + fmt::Debug + Sized {
    /// Axis this vocabulary belongs to
    const AXIS: Axis;

    /// Every status in indicator order
    const ALL: [Self; 3];

    /// Raw engine value
    fn wire(self) -> &'static str;

    /// Indicator position: 0 compliant, 1 warning, 2 violation
    fn index(self) -> usize;

    /// Classify a raw engine value
    ///
    /// # Errors
    /// `ContractViolation::UnknownStatus` for anything outside the vocabulary.
    fn classify(raw: &str) -> Result<Self, ContractViolation> {
        Self::ALL
            .into_iter()
            .find(|s| s.wire() == raw)
            .ok_or_else(|| ContractViolation::UnknownStatus {
                axis: Self::AXIS,
                value: raw.to_string(),
            })
    }

    /// Unified display label
    fn label(self) -> &'static str {
        LEVEL_LABELS[self.index()]
    }
}

/// EU AI Act status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiActStatus {
    /// No obligations triggered
    Ok,
    /// Obligations apply
    Warning,
    /// Prohibited or non-compliant use
    Violation,
}

impl AxisStatus for AiActStatus {
    const AXIS: Axis = Axis::AiAct;
    const ALL: [Self; 3] = [Self::Ok, Self::Warning, Self::Violation];

    fn wire(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Violation => "violation",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Violation => 2,
        }
    }
}

/// GDPR status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GdprStatus {
    /// Compliant
    Green,
    /// Needs attention
    Yellow,
    /// Violation
    Red,
}

impl AxisStatus for GdprStatus {
    const AXIS: Axis = Axis::Gdpr;
    const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Red];

    fn wire(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Green => 0,
            Self::Yellow => 1,
            Self::Red => 2,
        }
    }
}

/// Indicator position of a raw AI Act status
///
/// # Errors
/// `ContractViolation::UnknownStatus` for anything but `ok`, `warning`, `violation`.
pub fn classify_ai_act(raw: &str) -> Result<usize, ContractViolation> {
    AiActStatus::classify(raw).map(AiActStatus::index)
}

/// Indicator position of a raw GDPR status
///
/// # Errors
/// `ContractViolation::UnknownStatus` for anything but `green`, `yellow`, `red`.
pub fn classify_gdpr(raw: &str) -> Result<usize, ContractViolation> {
    GdprStatus::classify(raw).map(GdprStatus::index)
}
