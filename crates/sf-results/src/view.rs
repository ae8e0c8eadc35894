//! Result view with last-requested-wins fetching
//!
//! A new request supersedes any fetch still outstanding for the same view.
//! Results arriving for a superseded request are dropped, not queued.

use crate::interpret::{interpret, AnalysisReport, Interpretation};
use sf_core::{AnalysisTransport, FetchOutcome, SessionId, TransportError};

/// What the view shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing requested yet
    Idle,
    /// Fetch outstanding
    Loading {
        /// Session being fetched
        session: SessionId,
    },
    /// Result classified and ready to render
    Ready {
        /// Session shown
        session: SessionId,
        /// Classified result
        report: AnalysisReport,
    },
    /// No analysis exists for the session
    Empty {
        /// Session asked for
        session: SessionId,
    },
    /// Fetch failed; offer a retry
    Failed {
        /// Session asked for
        session: SessionId,
        /// Transport failure
        error: TransportError,
    },
}

/// Handle of one fetch request
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    session: SessionId,
}

impl FetchTicket {
    /// Session to fetch
    #[inline]
    #[must_use]
    pub fn session(&self) -> &SessionId {
        &self.session
    }
}

/// State of a single result view
#[derive(Debug, Clone)]
pub struct ResultView {
    generation: u64,
    state: ViewState,
}

impl Default for ResultView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultView {
    /// Idle view
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ViewState::Idle,
        }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Classified result, when ready
    #[must_use]
    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.state {
            ViewState::Ready { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Whether a fetch is outstanding
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    /// Start fetching `session`, superseding any outstanding request
    pub fn request(&mut self, session: SessionId) -> FetchTicket {
        self.generation += 1;
        tracing::debug!(%session, generation = self.generation, "fetching analysis result");
        self.state = ViewState::Loading {
            session: session.clone(),
        };
        FetchTicket {
            generation: self.generation,
            session,
        }
    }

    /// Apply a fetch outcome; returns `false` if the ticket was superseded
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<FetchOutcome, TransportError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                session = %ticket.session,
                ticket = ticket.generation,
                current = self.generation,
                "dropping superseded fetch result"
            );
            return false;
        }
        let session = ticket.session;
        self.state = match outcome {
            Ok(FetchOutcome::Found(payload)) => match interpret(payload) {
                Interpretation::Available(report) => ViewState::Ready { session, report },
                Interpretation::Absent => ViewState::Empty { session },
            },
            Ok(FetchOutcome::NotFound) => {
                tracing::debug!(%session, "no analysis for session");
                ViewState::Empty { session }
            }
            Err(error) => {
                tracing::warn!(%session, %error, "fetching analysis failed");
                ViewState::Failed { session, error }
            }
        };
        true
    }

    /// Fetch `session` through `transport` and show the outcome
    pub async fn load<T>(&mut self, transport: &T, session: SessionId) -> &ViewState
    where
        T: AnalysisTransport + ?Sized,
    {
        let ticket = self.request(session);
        let outcome = transport.fetch_result(ticket.session()).await;
        self.resolve(ticket, outcome);
        &self.state
    }

    /// Re-fetch the session of a failed or empty view
    pub async fn retry<T>(&mut self, transport: &T) -> Option<&ViewState>
    where
        T: AnalysisTransport + ?Sized,
    {
        let session = match &self.state {
            ViewState::Failed { session, .. } | ViewState::Empty { session } => session.clone(),
            _ => return None,
        };
        Some(self.load(transport, session).await)
    }
}
