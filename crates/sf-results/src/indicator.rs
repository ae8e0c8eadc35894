//! Traffic-light indicator
//!
//! Pure derived data: built fresh from an index on every call, never
//! mutated slot by slot.

use crate::status::Axis;
use serde::{Deserialize, Serialize};

/// Number of slots in an indicator
pub const SLOT_COUNT: usize = 3;

/// Colour of a slot position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Position 0
    Green,
    /// Position 1
    Yellow,
    /// Position 2
    Red,
}

const TONES: [Tone; SLOT_COUNT] = [Tone::Green, Tone::Yellow, Tone::Red];

/// One indicator slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Greyed out
    Inactive,
    /// Lit in its position's tone
    Active(Tone),
}

impl Slot {
    /// Whether the slot is lit
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Slot::Active(_))
    }
}

/// Three ordered slots for one compliance axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    axis: Axis,
    slots: [Slot; SLOT_COUNT],
}

impl Indicator {
    /// Indicator with no lit slot, for statuses that could not be classified
    #[must_use]
    pub fn unknown(axis: Axis) -> Self {
        Self {
            axis,
            slots: [Slot::Inactive; SLOT_COUNT],
        }
    }

    /// Axis shown
    #[inline]
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Slots in order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    /// Position of the lit slot, `None` for the unknown state
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_active())
    }

    /// Whether no slot is lit
    #[inline]
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.active_index().is_none()
    }
}

/// Indicator with exactly the slot at `index` lit
///
/// An index past the last slot yields the unknown state.
#[must_use]
pub fn ordered_indicator(axis: Axis, index: usize) -> Indicator {
    if index >= SLOT_COUNT {
        tracing::warn!(%axis, index, "indicator index out of range");
        return Indicator::unknown(axis);
    }
    let slots = std::array::from_fn(|i| {
        if i == index {
            Slot::Active(TONES[i])
        } else {
            Slot::Inactive
        }
    });
    Indicator { axis, slots }
}
