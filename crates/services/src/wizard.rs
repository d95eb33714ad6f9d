use chrono::{DateTime, Utc};

use onboard_core::model::{
    FieldErrors, GoalId, OnboardingData, OverallProgress, PersonalField, PersonalInfo,
    ResponseError, ScaleValue, SectionId, SectionResponse, SECTION_COUNT,
};
use onboard_core::{Clock, SectionCompletion};

use crate::progress::WizardProgress;

/// Number of top-level wizard steps (personal info, assessment, goals, complete).
pub const TOTAL_STEPS: usize = 4;

/// Invitation data supplied by the external invitation collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invitation {
    pub email: String,
    pub organization: String,
}

/// The four top-level wizard stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStage {
    PersonalInfo,
    Assessment,
    Goals,
    Complete,
}

/// Where the wizard currently is: a stage plus, inside the assessment stage,
/// the index of the current section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPosition {
    PersonalInfo,
    Assessment { section: usize },
    Goals,
    Complete,
}

impl WizardPosition {
    #[must_use]
    pub fn stage(self) -> WizardStage {
        match self {
            WizardPosition::PersonalInfo => WizardStage::PersonalInfo,
            WizardPosition::Assessment { .. } => WizardStage::Assessment,
            WizardPosition::Goals => WizardStage::Goals,
            WizardPosition::Complete => WizardStage::Complete,
        }
    }

    /// 1-based step number for the progress presenter.
    #[must_use]
    pub fn step_number(self) -> usize {
        match self.stage() {
            WizardStage::PersonalInfo => 1,
            WizardStage::Assessment => 2,
            WizardStage::Goals => 3,
            WizardStage::Complete => 4,
        }
    }

    /// The assessment section index, when inside the assessment stage.
    #[must_use]
    pub fn section_index(self) -> Option<usize> {
        match self {
            WizardPosition::Assessment { section } => Some(section),
            _ => None,
        }
    }
}

/// The four-stage onboarding driver.
///
/// Owns the [`OnboardingData`] aggregate for the session lifetime and is the
/// only component with transition rules. Position is explicit state and the
/// single source of truth; anything URL-like must be derived from it, never
/// the reverse.
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    data: OnboardingData,
    position: WizardPosition,
    completed_at: Option<DateTime<Utc>>,
    clock: Clock,
}

impl OnboardingWizard {
    /// Start a fresh wizard session at the personal-info stage.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            data: OnboardingData::new(clock.now()),
            position: WizardPosition::PersonalInfo,
            completed_at: None,
            clock,
        }
    }

    /// Start a session with invitation fields pre-filled.
    #[must_use]
    pub fn with_invitation(clock: Clock, invitation: &Invitation) -> Self {
        Self {
            data: OnboardingData::with_invitation(
                clock.now(),
                invitation.email.clone(),
                invitation.organization.clone(),
            ),
            ..Self::new(clock)
        }
    }

    //
    // ─── READS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn position(&self) -> WizardPosition {
        self.position
    }

    /// Snapshot of the aggregate, for summary views and submission.
    #[must_use]
    pub fn data(&self) -> &OnboardingData {
        &self.data
    }

    #[must_use]
    pub fn personal_info(&self) -> &PersonalInfo {
        self.data.personal_info()
    }

    /// Field-level validation of the personal-info stage.
    #[must_use]
    pub fn validate_personal_info(&self) -> FieldErrors {
        self.data.personal_info().validate()
    }

    /// The section currently on screen, when in the assessment stage.
    #[must_use]
    pub fn current_section(&self) -> Option<SectionId> {
        self.position
            .section_index()
            .and_then(SectionId::from_index)
    }

    /// Completion of one section, evaluated fresh on every call.
    #[must_use]
    pub fn section_completion(&self, id: SectionId) -> SectionCompletion {
        self.data.assessment_results().section_completion(id)
    }

    #[must_use]
    pub fn is_section_complete(&self, index: usize) -> bool {
        self.data.assessment_results().is_section_complete(index)
    }

    #[must_use]
    pub fn overall_progress(&self) -> OverallProgress {
        self.data.assessment_results().overall_progress()
    }

    /// The `(current_step, total_steps)` pair the progress presenter consumes.
    #[must_use]
    pub fn progress(&self) -> WizardProgress {
        WizardProgress {
            current_step: self.position.step_number(),
            total_steps: TOTAL_STEPS,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.position, WizardPosition::Complete)
    }

    /// When the wizard reached the terminal stage, if it has.
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    //
    // ─── WRITES ────────────────────────────────────────────────────────────
    //

    /// Set one editable personal-info field.
    pub fn set_personal_field(&mut self, field: PersonalField, value: impl Into<String>) {
        self.data.personal_info_mut().set_field(field, value);
    }

    /// Record a scale answer for a keyed-scale section.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::ShapeMismatch` on an ordered-list section.
    pub fn set_scale(
        &mut self,
        section: SectionId,
        question_id: impl Into<String>,
        value: ScaleValue,
    ) -> Result<(), ResponseError> {
        self.data
            .assessment_results_mut()
            .set_scale(section, question_id, value)
    }

    /// Record a choice answer for an ordered-list section.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::ShapeMismatch` on a keyed-scale section.
    pub fn set_choice(
        &mut self,
        section: SectionId,
        question_id: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<(), ResponseError> {
        self.data
            .assessment_results_mut()
            .set_choice(section, question_id, answer)
    }

    /// Replace one section's response wholesale.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::ShapeMismatch` if the replacement's shape does
    /// not match the section schema.
    pub fn update_section(
        &mut self,
        section: SectionId,
        response: SectionResponse,
    ) -> Result<(), ResponseError> {
        self.data
            .assessment_results_mut()
            .update_section(section, response)
    }

    /// Toggle a developmental goal; returns whether it is now selected.
    pub fn toggle_goal(&mut self, goal: GoalId) -> bool {
        self.data.developmental_goals_mut().toggle(goal)
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────
    //

    /// Whether a forward transition is currently permitted.
    ///
    /// Gates are evaluated at call time, never cached: personal info must
    /// validate, the current assessment section must be complete, goals are
    /// always free to leave, and the terminal stage has no forward move.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.position {
            WizardPosition::PersonalInfo => self.validate_personal_info().is_valid(),
            WizardPosition::Assessment { section } => self.is_section_complete(section),
            WizardPosition::Goals => true,
            WizardPosition::Complete => false,
        }
    }

    /// Whether a backward transition exists from the current position.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        matches!(
            self.position,
            WizardPosition::Assessment { .. } | WizardPosition::Goals
        )
    }

    /// Advance the wizard if the current gate allows it.
    ///
    /// A gated call is a silent no-op: the position is returned unchanged.
    /// Callers are expected to consult [`can_advance`](Self::can_advance)
    /// before offering the action; the check here is defensive.
    pub fn next(&mut self) -> WizardPosition {
        if !self.can_advance() {
            return self.position;
        }

        self.position = match self.position {
            WizardPosition::PersonalInfo => WizardPosition::Assessment { section: 0 },
            WizardPosition::Assessment { section } => {
                if section + 1 < SECTION_COUNT {
                    WizardPosition::Assessment {
                        section: section + 1,
                    }
                } else {
                    WizardPosition::Goals
                }
            }
            WizardPosition::Goals => {
                self.completed_at = Some(self.clock.now());
                WizardPosition::Complete
            }
            WizardPosition::Complete => WizardPosition::Complete,
        };
        self.position
    }

    /// Step the wizard backwards.
    ///
    /// Backward moves are never gated. From the goals stage the wizard
    /// returns to the last assessment section, not the first; re-entry always
    /// lands on the section the user left from when walking forward.
    pub fn back(&mut self) -> WizardPosition {
        self.position = match self.position {
            WizardPosition::Assessment { section } if section > 0 => WizardPosition::Assessment {
                section: section - 1,
            },
            WizardPosition::Assessment { .. } => WizardPosition::PersonalInfo,
            WizardPosition::Goals => WizardPosition::Assessment {
                section: SECTION_COUNT - 1,
            },
            // No backward move exists at the first or terminal stage.
            other => other,
        };
        self.position
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::model::{AnswerShape, SectionSchema};
    use onboard_core::time::fixed_clock;

    fn wizard() -> OnboardingWizard {
        OnboardingWizard::new(fixed_clock())
    }

    fn fill_personal_info(wizard: &mut OnboardingWizard) {
        wizard.set_personal_field(PersonalField::FirstName, "Ada");
        wizard.set_personal_field(PersonalField::LastName, "Lovelace");
        wizard.set_personal_field(PersonalField::Role, "Engineer");
        wizard.set_personal_field(PersonalField::Password, "12345678");
    }

    fn fill_section(wizard: &mut OnboardingWizard, id: SectionId) {
        let schema = SectionSchema::of(id);
        for n in 1..=schema.total_questions() {
            let question_id = format!("{}{n}", id.as_str());
            match schema.answer_shape() {
                AnswerShape::KeyedScale => wizard
                    .set_scale(id, question_id, ScaleValue::new(3).unwrap())
                    .unwrap(),
                AnswerShape::OrderedList => wizard.set_choice(id, question_id, "A").unwrap(),
            }
        }
    }

    #[test]
    fn wizard_starts_at_personal_info_step_one() {
        let wizard = wizard();
        assert_eq!(wizard.position(), WizardPosition::PersonalInfo);
        let progress = wizard.progress();
        assert_eq!(progress.current_step, 1);
        assert_eq!(progress.total_steps, 4);
    }

    #[test]
    fn next_refuses_empty_personal_info() {
        let mut wizard = wizard();
        assert!(!wizard.can_advance());
        assert_eq!(wizard.next(), WizardPosition::PersonalInfo);
    }

    #[test]
    fn next_refuses_short_password() {
        let mut wizard = wizard();
        fill_personal_info(&mut wizard);
        wizard.set_personal_field(PersonalField::Password, "1234567");
        assert_eq!(wizard.next(), WizardPosition::PersonalInfo);
    }

    #[test]
    fn valid_personal_info_enters_assessment_at_section_zero() {
        let mut wizard = wizard();
        fill_personal_info(&mut wizard);
        assert!(wizard.can_advance());
        assert_eq!(wizard.next(), WizardPosition::Assessment { section: 0 });
        assert_eq!(wizard.current_section(), Some(SectionId::Hexaco));
        assert_eq!(wizard.progress().current_step, 2);
    }

    #[test]
    fn incomplete_section_gates_next() {
        let mut wizard = wizard();
        fill_personal_info(&mut wizard);
        wizard.next();

        // 23 of 24 answers is not enough.
        for n in 1..=23 {
            wizard
                .set_scale(SectionId::Hexaco, format!("q{n}"), ScaleValue::new(3).unwrap())
                .unwrap();
        }
        assert!(!wizard.can_advance());
        assert_eq!(wizard.next(), WizardPosition::Assessment { section: 0 });

        wizard
            .set_scale(SectionId::Hexaco, "q24", ScaleValue::new(3).unwrap())
            .unwrap();
        assert_eq!(wizard.next(), WizardPosition::Assessment { section: 1 });
    }

    #[test]
    fn last_section_exits_to_goals_not_back_to_start() {
        let mut wizard = wizard();
        fill_personal_info(&mut wizard);
        wizard.next();
        for id in SectionId::ALL {
            fill_section(&mut wizard, id);
            wizard.next();
        }
        assert_eq!(wizard.position(), WizardPosition::Goals);
        assert_eq!(wizard.progress().current_step, 3);
    }

    #[test]
    fn goals_stage_is_ungated_and_complete_is_terminal() {
        let mut wizard = wizard();
        fill_personal_info(&mut wizard);
        wizard.next();
        for id in SectionId::ALL {
            fill_section(&mut wizard, id);
            wizard.next();
        }

        // Zero goals selected is fine.
        assert!(wizard.can_advance());
        assert_eq!(wizard.next(), WizardPosition::Complete);
        assert!(wizard.is_complete());
        assert_eq!(wizard.completed_at(), Some(fixed_clock().now()));

        // No forward or backward transition exists from the terminal stage.
        assert!(!wizard.can_advance());
        assert!(!wizard.can_go_back());
        assert_eq!(wizard.next(), WizardPosition::Complete);
        assert_eq!(wizard.back(), WizardPosition::Complete);
    }

    #[test]
    fn back_from_goals_lands_on_last_section() {
        let mut wizard = wizard();
        fill_personal_info(&mut wizard);
        wizard.next();
        for id in SectionId::ALL {
            fill_section(&mut wizard, id);
            wizard.next();
        }
        assert_eq!(wizard.position(), WizardPosition::Goals);

        assert_eq!(wizard.back(), WizardPosition::Assessment { section: 4 });
        assert_eq!(wizard.current_section(), Some(SectionId::Asrs));
    }

    #[test]
    fn back_steps_through_sections_to_personal_info() {
        let mut wizard = wizard();
        fill_personal_info(&mut wizard);
        wizard.next();
        fill_section(&mut wizard, SectionId::Hexaco);
        wizard.next();

        assert_eq!(wizard.back(), WizardPosition::Assessment { section: 0 });
        assert_eq!(wizard.back(), WizardPosition::PersonalInfo);
        // First stage has nowhere further back to go.
        assert_eq!(wizard.back(), WizardPosition::PersonalInfo);
    }

    #[test]
    fn navigating_back_loses_no_data() {
        let mut wizard = wizard();
        fill_personal_info(&mut wizard);
        wizard.next();
        fill_section(&mut wizard, SectionId::Hexaco);
        wizard.next();
        wizard.back();
        wizard.back();

        assert_eq!(wizard.personal_info().first_name, "Ada");
        assert_eq!(wizard.overall_progress().answered_total, 24);
        assert!(wizard.is_section_complete(0));
    }

    #[test]
    fn invitation_prefills_read_only_fields() {
        let invitation = Invitation {
            email: "user@company.com".into(),
            organization: "Acme".into(),
        };
        let wizard = OnboardingWizard::with_invitation(fixed_clock(), &invitation);
        assert_eq!(wizard.personal_info().email, "user@company.com");
        assert_eq!(wizard.personal_info().organization, "Acme");
    }

    #[test]
    fn gate_is_reevaluated_on_every_call() {
        let mut wizard = wizard();
        fill_personal_info(&mut wizard);
        assert!(wizard.can_advance());

        // Clearing a field after a successful check must close the gate again.
        wizard.set_personal_field(PersonalField::FirstName, "");
        assert!(!wizard.can_advance());
        assert_eq!(wizard.next(), WizardPosition::PersonalInfo);
    }
}
