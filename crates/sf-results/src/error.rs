//! Contract violations of the analysis engine

use crate::status::Axis;

/// Engine output outside the fixed enumerations
///
/// A defect upstream, not recoverable by the user. Rendering continues with
/// an unknown facet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContractViolation {
    /// Status string not in the axis vocabulary
    #[error("unknown {axis} status: {value:?}")]
    UnknownStatus {
        /// Axis the value was delivered for
        axis: Axis,
        /// Raw value
        value: String,
    },

    /// Business score outside `[0, 10]` (or not a number)
    #[error("business score {0} outside [0, 10]")]
    ScoreOutOfRange(f64),

    /// Business facet without a score
    #[error("business score missing")]
    MissingScore,
}
