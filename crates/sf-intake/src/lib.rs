//! Intake Wizard
//!
//! Guides collection of a complete [`IntakeDraft`] across four ordered steps
//! and emits exactly one submission through an
//! [`AnalysisTransport`](sf_core::AnalysisTransport).
//!
//! # Example
//!
//! ```rust,ignore
//! use sf_core::{Application, Frequency, Stakeholder, TimeRequired};
//! use sf_intake::{SubmitOutcome, Wizard};
//!
//! # async fn example(transport: &dyn sf_core::AnalysisTransport) {
//! let mut wizard = Wizard::new();
//! wizard.set_description("Eingangsrechnungen manuell in Excel übertragen");
//! wizard.go_next();
//! wizard.toggle_application(Application::GoogleWorkspace);
//! wizard.go_next();
//! wizard.set_time_required(TimeRequired::FifteenToThirtyMinutes);
//! wizard.set_frequency(Frequency::Weekly);
//! wizard.toggle_stakeholder(Stakeholder::Myself);
//! wizard.go_next();
//! wizard.set_uses_personal_data(true);
//!
//! if let SubmitOutcome::Submitted(session) = wizard.submit(transport).await {
//!     println!("session {session}");
//! }
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod draft;
pub mod step;
pub mod wizard;

pub use draft::{IntakeDraft, MissingField, MIN_DESCRIPTION_CHARS};
pub use step::Step;
pub use wizard::{Blocked, Navigation, Phase, SubmissionTicket, SubmitOutcome, Wizard};

