//! Intake wizard state machine
//!
//! ```text
//! Editing(Describe) <-> Editing(Applications) <-> Editing(Details) <-> Editing(Privacy)
//!                                                                         |  submit
//!                                                                         v
//!                                        SubmitFailed  <--- error --- Submitting --- ok ---> Submitted
//!                                             |                           ^
//!                                             +-------- submit -----------+
//! ```
//!
//! Forward moves are gated by the draft, backward moves never are. At most
//! one submission is in flight. A submission is split into
//! [`Wizard::begin_submit`] and [`Wizard::complete`] so that a view can
//! abandon the wizard while the call is outstanding; completions carrying a
//! ticket from before [`Wizard::abandon`] are ignored.

use crate::draft::IntakeDraft;
use crate::step::Step;
use sf_core::{
    AnalysisTransport, Application, Frequency, IntakePayload, SessionId, Stakeholder,
    TimeRequired, TransportError,
};

/// Where the wizard currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Collecting answers on a step
    Editing(Step),
    /// Submission handed to the transport, awaiting its answer
    Submitting,
    /// Terminal: the engine accepted the submission
    Submitted(SessionId),
    /// Last submission failed; behaves like the final step
    SubmitFailed(TransportError),
}

/// Why an action was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Blocked {
    /// Gate of the step is unmet
    GateUnmet(Step),
    /// No step in that direction
    AtBoundary,
    /// A submission is in flight
    InFlight,
    /// Wizard already submitted
    Finished,
}

/// Result of a navigation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Step changed
    Moved {
        /// Step before
        from: Step,
        /// Step after
        to: Step,
    },
    /// Silently refused
    Blocked(Blocked),
}

impl Navigation {
    /// Whether the step changed
    #[inline]
    #[must_use]
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not started: draft incomplete, already in flight or finished
    Blocked(Blocked),
    /// Engine accepted the submission
    Submitted(SessionId),
    /// Transport failed; the draft is untouched and `submit` may be retried
    Failed(TransportError),
    /// Completion arrived after the wizard was abandoned and was ignored
    Stale,
}

/// Proof of a started submission
///
/// Carries the payload to send. Hand it back to [`Wizard::complete`] together
/// with the transport's answer.
#[derive(Debug)]
pub struct SubmissionTicket {
    generation: u64,
    payload: IntakePayload,
}

impl SubmissionTicket {
    /// Payload to send to the engine
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &IntakePayload {
        &self.payload
    }
}

/// Step-gated intake wizard
#[derive(Debug, Clone)]
pub struct Wizard {
    phase: Phase,
    draft: IntakeDraft,
    generation: u64,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Fresh wizard on the first step
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Editing(Step::Describe),
            draft: IntakeDraft::new(),
            generation: 0,
        }
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Current answers
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &IntakeDraft {
        &self.draft
    }

    /// Step shown to the user; submission phases count as the final step
    #[must_use]
    pub fn current_step(&self) -> Step {
        match self.phase {
            Phase::Editing(step) => step,
            Phase::Submitting | Phase::Submitted(_) | Phase::SubmitFailed(_) => Step::Privacy,
        }
    }

    /// Fraction of the wizard reached, for the progress bar
    #[must_use]
    pub fn progress(&self) -> f32 {
        f32::from(self.current_step().number()) / f32::from(Step::COUNT)
    }

    /// Whether a submission is awaiting the transport
    #[inline]
    #[must_use]
    pub fn submission_in_flight(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// Session identifier once submitted
    #[must_use]
    pub fn session_id(&self) -> Option<&SessionId> {
        match &self.phase {
            Phase::Submitted(session) => Some(session),
            _ => None,
        }
    }

    /// Error of the last failed submission
    #[must_use]
    pub fn last_error(&self) -> Option<&TransportError> {
        match &self.phase {
            Phase::SubmitFailed(error) => Some(error),
            _ => None,
        }
    }

    /// Whether `go_next` would move
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        match self.phase {
            Phase::Editing(step) => step.next().is_some() && self.draft.gate(step),
            _ => false,
        }
    }

    /// Whether `submit` would start a submission
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    fn edit(&mut self, f: impl FnOnce(&mut IntakeDraft)) -> bool {
        match self.phase {
            Phase::Editing(_) | Phase::SubmitFailed(_) => {
                f(&mut self.draft);
                true
            }
            Phase::Submitting | Phase::Submitted(_) => {
                tracing::debug!(phase = ?self.phase, "draft edit refused");
                false
            }
        }
    }

    /// Replace the description; `false` if edits are refused in this phase
    pub fn set_description(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        self.edit(|d| d.set_description(text))
    }

    /// Toggle an application; `false` if edits are refused in this phase
    pub fn toggle_application(&mut self, app: Application) -> bool {
        self.edit(|d| {
            d.toggle_application(app);
        })
    }

    /// Toggle a stakeholder; `false` if edits are refused in this phase
    pub fn toggle_stakeholder(&mut self, stakeholder: Stakeholder) -> bool {
        self.edit(|d| {
            d.toggle_stakeholder(stakeholder);
        })
    }

    /// Set the time per execution; `false` if edits are refused in this phase
    pub fn set_time_required(&mut self, value: TimeRequired) -> bool {
        self.edit(|d| d.set_time_required(value))
    }

    /// Set the frequency; `false` if edits are refused in this phase
    pub fn set_frequency(&mut self, value: Frequency) -> bool {
        self.edit(|d| d.set_frequency(value))
    }

    /// Answer the personal data question; `false` if edits are refused in this phase
    pub fn set_uses_personal_data(&mut self, value: bool) -> bool {
        self.edit(|d| d.set_uses_personal_data(value))
    }

    /// Advance one step if the current step's gate holds
    pub fn go_next(&mut self) -> Navigation {
        let step = match &self.phase {
            Phase::Editing(step) => *step,
            Phase::SubmitFailed(_) => return Navigation::Blocked(Blocked::AtBoundary),
            Phase::Submitting => return Navigation::Blocked(Blocked::InFlight),
            Phase::Submitted(_) => return Navigation::Blocked(Blocked::Finished),
        };
        let Some(to) = step.next() else {
            return Navigation::Blocked(Blocked::AtBoundary);
        };
        if !self.draft.gate(step) {
            tracing::debug!(?step, missing = ?self.draft.missing(step), "forward navigation blocked");
            return Navigation::Blocked(Blocked::GateUnmet(step));
        }
        self.move_to(step, to)
    }

    /// Go back one step; never blocked by gates
    pub fn go_prev(&mut self) -> Navigation {
        let step = match &self.phase {
            Phase::Editing(step) => *step,
            Phase::SubmitFailed(_) => Step::Privacy,
            Phase::Submitting => return Navigation::Blocked(Blocked::InFlight),
            Phase::Submitted(_) => return Navigation::Blocked(Blocked::Finished),
        };
        match step.prev() {
            Some(to) => self.move_to(step, to),
            None => Navigation::Blocked(Blocked::AtBoundary),
        }
    }

    fn move_to(&mut self, from: Step, to: Step) -> Navigation {
        tracing::debug!(?from, ?to, "wizard step changed");
        self.phase = Phase::Editing(to);
        Navigation::Moved { from, to }
    }

    fn check_submit(&self) -> Result<(), Blocked> {
        match self.phase {
            Phase::Submitting => return Err(Blocked::InFlight),
            Phase::Submitted(_) => return Err(Blocked::Finished),
            Phase::Editing(_) | Phase::SubmitFailed(_) => {}
        }
        match self.draft.first_unmet() {
            Some(step) => Err(Blocked::GateUnmet(step)),
            None => Ok(()),
        }
    }

    /// Start a submission
    ///
    /// Enters `Submitting` and returns the ticket holding the verbatim
    /// payload, or the reason the submission cannot start.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, Blocked> {
        self.check_submit()?;
        let payload = self
            .draft
            .to_payload()
            .ok_or(Blocked::GateUnmet(Step::Privacy))?;
        self.phase = Phase::Submitting;
        tracing::info!(
            applications = payload.applications.len(),
            stakeholders = payload.stakeholders.len(),
            uses_personal_data = payload.uses_personal_data,
            "submitting intake for analysis"
        );
        Ok(SubmissionTicket {
            generation: self.generation,
            payload,
        })
    }

    /// Apply the transport's answer to a started submission
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<SessionId, TransportError>,
    ) -> SubmitOutcome {
        if ticket.generation != self.generation || !self.submission_in_flight() {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "ignoring stale submission result"
            );
            return SubmitOutcome::Stale;
        }
        match outcome {
            Ok(session) => {
                tracing::info!(%session, "intake submitted");
                self.phase = Phase::Submitted(session.clone());
                SubmitOutcome::Submitted(session)
            }
            Err(error) => {
                tracing::warn!(%error, retryable = error.is_retryable(), "submission failed");
                self.phase = Phase::SubmitFailed(error.clone());
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Validate, send the payload and apply the answer
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: AnalysisTransport + ?Sized,
    {
        let ticket = match self.begin_submit() {
            Ok(ticket) => ticket,
            Err(blocked) => {
                tracing::debug!(?blocked, "submission refused");
                return SubmitOutcome::Blocked(blocked);
            }
        };
        let outcome = transport.analyze(ticket.payload()).await;
        self.complete(ticket, outcome)
    }

    /// Navigate away: discard the draft and ignore any outstanding submission
    pub fn abandon(&mut self) {
        if self.submission_in_flight() {
            tracing::debug!("abandoning wizard with submission in flight");
        }
        self.generation += 1;
        self.draft = IntakeDraft::new();
        self.phase = Phase::Editing(Step::Describe);
    }
}
