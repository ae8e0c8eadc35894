//! Result Interpreter
//!
//! Turns an opaque analysis payload into render facets:
//! - EU AI Act status and its traffic light
//! - GDPR status and its traffic light
//! - Business-value band
//! - Verbatim narratives and the engine-ordered recommendation list
//!
//! Classification is pure. Values outside the fixed enumerations degrade to
//! an unknown facet and are reported as [`ContractViolation`]s, never panics.

#![warn(unreachable_pub)]

pub mod band;
pub mod error;
pub mod indicator;
pub mod interpret;
pub mod status;
pub mod view;

pub use band::{classify_business_band, BusinessBand};
pub use error::ContractViolation;
pub use indicator::{ordered_indicator, Indicator, Slot, Tone, SLOT_COUNT};
pub use interpret::{interpret, AnalysisReport, AxisFacet, BusinessFacet, Interpretation};
pub use status::{classify_ai_act, classify_gdpr, AiActStatus, Axis, AxisStatus, GdprStatus};
pub use view::{FetchTicket, ResultView, ViewState};
