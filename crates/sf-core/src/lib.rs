//! Solution Finder Core
//!
//! Shared vocabulary between the intake wizard and the result interpreter:
//! - Fixed answer catalogs (applications, time, frequency, stakeholders)
//! - The finalized submission payload and the opaque session identifier
//! - Raw analysis payload as delivered by the engine
//! - The transport boundary (`analyze` / `fetch_result`)
//! - Identity and submission history (outer boundary)
//!
//! The wizard and the interpreter never talk to each other directly. They
//! only share a [`SessionId`].

#![warn(unreachable_pub)]

pub mod catalog;
pub mod error;
pub mod history;
pub mod payload;
pub mod transport;
pub mod wire;

pub use catalog::{Application, Frequency, Stakeholder, TimeRequired};
pub use error::{CatalogError, HistoryError, TransportError};
pub use history::{
    CurrentUser, ExportRow, HistoryRecord, InMemoryRecordStore, RecordStore, EXPORT_HEADER,
};
pub use payload::{IntakePayload, SessionId};
pub use transport::{AnalysisTransport, FetchOutcome};
pub use wire::{
    AnalysisPayload, RawBusiness, RawCompliance, RawExplanations, RawTools, Recommendation,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
