//! Wizard steps

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four ordered intake steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Free-text process description
    Describe,
    /// Applications used
    Applications,
    /// Time, frequency and stakeholders
    Details,
    /// Personal data question, then submit
    Privacy,
}

impl Step {
    /// All steps in order
    pub const ALL: [Step; 4] = [Step::Describe, Step::Applications, Step::Details, Step::Privacy];

    /// Number of steps
    pub const COUNT: u8 = 4;

    /// 1-based step number
    #[inline]
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Step::Describe => 1,
            Step::Applications => 2,
            Step::Details => 3,
            Step::Privacy => 4,
        }
    }

    /// Step for a 1-based number
    #[inline]
    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Following step, `None` on the last one
    #[inline]
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Preceding step, `None` on the first one
    #[inline]
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Heading shown for the step
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Step::Describe => "Beschreiben Sie Ihren Prozess",
            Step::Applications => "Welche Anwendungen nutzen Sie?",
            Step::Details => "Prozessdetails",
            Step::Privacy => "Datenschutz & Compliance",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schritt {} von {}", self.number(), Self::COUNT)
    }
}
