//! In-progress intake answers and the per-step gates
//!
//! Gates are evaluated directly from the current field values, so every
//! mutation is reflected the next time a gate is asked for.

use crate::step::Step;
use indexmap::IndexSet;
use sf_core::{Application, Frequency, IntakePayload, Stakeholder, TimeRequired};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum trimmed description length (in characters) to leave step 1
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Answer still missing for a step's gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingField {
    /// Trimmed description shorter than [`MIN_DESCRIPTION_CHARS`]
    DescriptionTooShort {
        /// Current trimmed length
        chars: usize,
    },
    /// No application selected
    NoApplications,
    /// Time per execution unset
    NoTimeRequired,
    /// Frequency unset
    NoFrequency,
    /// No stakeholder selected
    NoStakeholders,
    /// Personal data question unanswered
    PersonalDataUnanswered,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::DescriptionTooShort { chars } => write!(
                f,
                "description has {chars} characters (at least {MIN_DESCRIPTION_CHARS} required)"
            ),
            MissingField::NoApplications => f.write_str("no application selected"),
            MissingField::NoTimeRequired => f.write_str("time required not chosen"),
            MissingField::NoFrequency => f.write_str("frequency not chosen"),
            MissingField::NoStakeholders => f.write_str("no stakeholder selected"),
            MissingField::PersonalDataUnanswered => {
                f.write_str("personal data question not answered")
            }
        }
    }
}

/// Draft of structured answers, owned by the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeDraft {
    description: String,
    applications: IndexSet<Application>,
    time_required: Option<TimeRequired>,
    frequency: Option<Frequency>,
    stakeholders: IndexSet<Stakeholder>,
    uses_personal_data: Option<bool>,
}

impl IntakeDraft {
    /// Create empty draft
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the description
    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// Add the application if absent, remove it if present
    ///
    /// Returns whether the application is selected afterwards.
    pub fn toggle_application(&mut self, app: Application) -> bool {
        toggle(&mut self.applications, app)
    }

    /// Add the stakeholder if absent, remove it if present
    ///
    /// Returns whether the stakeholder is selected afterwards.
    pub fn toggle_stakeholder(&mut self, stakeholder: Stakeholder) -> bool {
        toggle(&mut self.stakeholders, stakeholder)
    }

    /// Replace the time per execution
    pub fn set_time_required(&mut self, value: TimeRequired) {
        self.time_required = Some(value);
    }

    /// Replace the frequency
    pub fn set_frequency(&mut self, value: Frequency) {
        self.frequency = Some(value);
    }

    /// Answer the personal data question; there is no way back to unanswered
    pub fn set_uses_personal_data(&mut self, value: bool) {
        self.uses_personal_data = Some(value);
    }

    /// Description as typed
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Untrimmed description length in characters, for the counter below the input
    #[inline]
    #[must_use]
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    /// Selected applications in selection order
    #[inline]
    pub fn applications(&self) -> impl Iterator<Item = Application> + '_ {
        self.applications.iter().copied()
    }

    /// Whether the application is selected
    #[inline]
    #[must_use]
    pub fn has_application(&self, app: Application) -> bool {
        self.applications.contains(&app)
    }

    /// Selected stakeholders in selection order
    #[inline]
    pub fn stakeholders(&self) -> impl Iterator<Item = Stakeholder> + '_ {
        self.stakeholders.iter().copied()
    }

    /// Whether the stakeholder is selected
    #[inline]
    #[must_use]
    pub fn has_stakeholder(&self, stakeholder: Stakeholder) -> bool {
        self.stakeholders.contains(&stakeholder)
    }

    /// Time per execution, if chosen
    #[inline]
    #[must_use]
    pub fn time_required(&self) -> Option<TimeRequired> {
        self.time_required
    }

    /// Frequency, if chosen
    #[inline]
    #[must_use]
    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }

    /// Personal data answer, if given
    #[inline]
    #[must_use]
    pub fn uses_personal_data(&self) -> Option<bool> {
        self.uses_personal_data
    }

    /// Answers still missing for the step's gate
    #[must_use]
    pub fn missing(&self, step: Step) -> Vec<MissingField> {
        let mut missing = Vec::new();
        match step {
            Step::Describe => {
                let chars = self.description.trim().chars().count();
                if chars < MIN_DESCRIPTION_CHARS {
                    missing.push(MissingField::DescriptionTooShort { chars });
                }
            }
            Step::Applications => {
                if self.applications.is_empty() {
                    missing.push(MissingField::NoApplications);
                }
            }
            Step::Details => {
                if self.time_required.is_none() {
                    missing.push(MissingField::NoTimeRequired);
                }
                if self.frequency.is_none() {
                    missing.push(MissingField::NoFrequency);
                }
                if self.stakeholders.is_empty() {
                    missing.push(MissingField::NoStakeholders);
                }
            }
            Step::Privacy => {
                if self.uses_personal_data.is_none() {
                    missing.push(MissingField::PersonalDataUnanswered);
                }
            }
        }
        missing
    }

    /// Whether the gate of `step` holds
    #[inline]
    #[must_use]
    pub fn gate(&self, step: Step) -> bool {
        self.missing(step).is_empty()
    }

    /// First step whose gate fails
    #[must_use]
    pub fn first_unmet(&self) -> Option<Step> {
        Step::ALL.into_iter().find(|step| !self.gate(*step))
    }

    /// All gates hold simultaneously
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_unmet().is_none()
    }

    /// Finalized payload, `None` while any gate fails
    #[must_use]
    pub fn to_payload(&self) -> Option<IntakePayload> {
        if !self.is_complete() {
            return None;
        }
        Some(IntakePayload {
            description: self.description.clone(),
            applications: self.applications.iter().copied().collect(),
            time_required: self.time_required?,
            frequency: self.frequency?,
            stakeholders: self.stakeholders.iter().copied().collect(),
            uses_personal_data: self.uses_personal_data?,
        })
    }
}

fn toggle<T: std::hash::Hash + Eq>(set: &mut IndexSet<T>, value: T) -> bool {
    if set.shift_remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> IntakeDraft {
        let mut draft = IntakeDraft::new();
        draft.set_description("Wöchentlicher Export der Kundendaten");
        draft.toggle_application(Application::HubSpot);
        draft.set_time_required(TimeRequired::OneToTwoHours);
        draft.set_frequency(Frequency::Weekly);
        draft.toggle_stakeholder(Stakeholder::Team);
        draft.set_uses_personal_data(false);
        draft
    }

    #[test]
    fn empty_draft_fails_first_gate() {
        let draft = IntakeDraft::new();
        assert_eq!(draft.first_unmet(), Some(Step::Describe));
        assert!(!draft.is_complete());
        assert_eq!(draft.to_payload(), None);
    }

    #[test]
    fn description_gate_trims() {
        let mut draft = IntakeDraft::new();
        draft.set_description(format!("   {}   ", "x".repeat(19)));
        assert_eq!(
            draft.missing(Step::Describe),
            vec![MissingField::DescriptionTooShort { chars: 19 }]
        );
        assert_eq!(draft.description_len(), 25);

        draft.set_description("x".repeat(20));
        assert!(draft.gate(Step::Describe));
    }

    #[test]
    fn description_gate_counts_characters() {
        let mut draft = IntakeDraft::new();
        draft.set_description("ä".repeat(20));
        assert!(draft.gate(Step::Describe));
    }

    #[test]
    fn toggle_twice_cancels() {
        let mut draft = IntakeDraft::new();
        assert!(draft.toggle_application(Application::Miro));
        assert!(!draft.toggle_application(Application::Miro));
        assert!(!draft.has_application(Application::Miro));
        assert!(!draft.gate(Step::Applications));
    }

    #[test]
    fn toggle_off_keeps_selection_order() {
        let mut draft = IntakeDraft::new();
        draft.toggle_application(Application::Slack);
        draft.toggle_application(Application::Figma);
        draft.toggle_application(Application::Coda);
        draft.toggle_application(Application::Figma);

        let apps: Vec<_> = draft.applications().collect();
        assert_eq!(apps, vec![Application::Slack, Application::Coda]);
    }

    #[test]
    fn details_gate_lists_every_gap() {
        let mut draft = IntakeDraft::new();
        assert_eq!(
            draft.missing(Step::Details),
            vec![
                MissingField::NoTimeRequired,
                MissingField::NoFrequency,
                MissingField::NoStakeholders
            ]
        );

        draft.set_frequency(Frequency::Daily);
        draft.toggle_stakeholder(Stakeholder::Customers);
        assert_eq!(draft.missing(Step::Details), vec![MissingField::NoTimeRequired]);
    }

    #[test]
    fn gate_reflects_latest_mutation() {
        let mut draft = filled();
        assert!(draft.is_complete());

        draft.toggle_stakeholder(Stakeholder::Team);
        assert_eq!(draft.first_unmet(), Some(Step::Details));

        draft.toggle_stakeholder(Stakeholder::Other);
        assert!(draft.is_complete());
    }

    #[test]
    fn payload_is_verbatim() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.description, "Wöchentlicher Export der Kundendaten");
        assert_eq!(payload.applications, vec![Application::HubSpot]);
        assert_eq!(payload.time_required, TimeRequired::OneToTwoHours);
        assert_eq!(payload.frequency, Frequency::Weekly);
        assert_eq!(payload.stakeholders, vec![Stakeholder::Team]);
        assert!(!payload.uses_personal_data);
    }
}
