//! Command implementations, independent of argument parsing

use sf_core::{
    AnalysisTransport, Application, CurrentUser, Frequency, HistoryRecord, RecordStore,
    SessionId, Stakeholder, TimeRequired, TransportError,
};
use sf_intake::{Blocked, MissingField, Navigation, Step, SubmitOutcome, Wizard};
use sf_results::{ResultView, ViewState};

/// Answers given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeArgs {
    /// Free-text process description
    pub description: String,
    /// Applications in the order given
    pub applications: Vec<Application>,
    /// Time per execution
    pub time_required: Option<TimeRequired>,
    /// Execution frequency
    pub frequency: Option<Frequency>,
    /// Beneficiaries in the order given
    pub stakeholders: Vec<Stakeholder>,
    /// Personal data answer
    pub uses_personal_data: Option<bool>,
}

/// How an `analyze` run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    /// A step's gate stopped the wizard; nothing was sent
    Blocked {
        /// Step that could not be completed
        step: Step,
        /// What that step still needs
        missing: Vec<MissingField>,
    },
    /// Engine accepted the intake
    Submitted(SessionId),
    /// Transport failed
    Failed(TransportError),
}

fn gate_unmet(wizard: &Wizard, step: Step) -> AnalyzeOutcome {
    AnalyzeOutcome::Blocked {
        step,
        missing: wizard.draft().missing(step),
    }
}

fn advance(wizard: &mut Wizard) -> Result<(), AnalyzeOutcome> {
    match wizard.go_next() {
        Navigation::Moved { .. } => Ok(()),
        Navigation::Blocked(Blocked::GateUnmet(step)) => Err(gate_unmet(wizard, step)),
        Navigation::Blocked(other) => {
            tracing::debug!(?other, "unexpected navigation refusal");
            Err(gate_unmet(wizard, wizard.current_step()))
        }
    }
}

fn fill_in(wizard: &mut Wizard, args: &AnalyzeArgs) -> Result<(), AnalyzeOutcome> {
    wizard.set_description(args.description.as_str());
    advance(wizard)?;

    for &app in &args.applications {
        if !wizard.draft().has_application(app) {
            wizard.toggle_application(app);
        }
    }
    advance(wizard)?;

    if let Some(time) = args.time_required {
        wizard.set_time_required(time);
    }
    if let Some(frequency) = args.frequency {
        wizard.set_frequency(frequency);
    }
    for &stakeholder in &args.stakeholders {
        if !wizard.draft().has_stakeholder(stakeholder) {
            wizard.toggle_stakeholder(stakeholder);
        }
    }
    advance(wizard)?;

    if let Some(answer) = args.uses_personal_data {
        wizard.set_uses_personal_data(answer);
    }
    Ok(())
}

/// Walk the wizard step by step and submit once every gate passes
pub async fn analyze<T>(transport: &T, args: &AnalyzeArgs) -> AnalyzeOutcome
where
    T: AnalysisTransport + ?Sized,
{
    let mut wizard = Wizard::new();
    if let Err(outcome) = fill_in(&mut wizard, args) {
        return outcome;
    }

    match wizard.submit(transport).await {
        SubmitOutcome::Submitted(session) => AnalyzeOutcome::Submitted(session),
        SubmitOutcome::Failed(error) => AnalyzeOutcome::Failed(error),
        SubmitOutcome::Blocked(Blocked::GateUnmet(step)) => gate_unmet(&wizard, step),
        SubmitOutcome::Blocked(_) | SubmitOutcome::Stale => {
            AnalyzeOutcome::Failed(TransportError::Cancelled)
        }
    }
}

/// [`analyze`], then remember a successful submission for a signed-in user
///
/// A failing store does not undo the submission; it is logged and the
/// session is still reported.
pub async fn analyze_and_record<T, S>(
    transport: &T,
    store: &S,
    user: Option<&CurrentUser>,
    args: &AnalyzeArgs,
) -> AnalyzeOutcome
where
    T: AnalysisTransport + ?Sized,
    S: RecordStore + ?Sized,
{
    let outcome = analyze(transport, args).await;
    let (AnalyzeOutcome::Submitted(session), Some(user)) = (&outcome, user) else {
        return outcome;
    };

    let record = HistoryRecord::new(user, args.description.trim(), session.clone());
    if let Err(error) = store.insert(record).await {
        tracing::warn!(%error, %session, "could not record submission in history");
    }
    outcome
}

/// Fetch and classify the result of `session`
pub async fn result<T>(transport: &T, session: SessionId) -> ViewState
where
    T: AnalysisTransport + ?Sized,
{
    let mut view = ResultView::new();
    view.load(transport, session).await.clone()
}
