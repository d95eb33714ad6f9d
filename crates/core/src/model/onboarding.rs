use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::assessment::AssessmentResults;
use crate::model::goals::GoalSelection;
use crate::model::personal::PersonalInfo;

/// Root aggregate for one wizard session.
///
/// Created once when the wizard starts and mutated incrementally by each
/// stage. Stages only add or overwrite; nothing a previous stage filled in is
/// ever removed, so navigating back and forth loses no data. Dropped when the
/// session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingData {
    id: Uuid,
    personal_info: PersonalInfo,
    assessment_results: AssessmentResults,
    developmental_goals: GoalSelection,
    started_at: DateTime<Utc>,
}

impl OnboardingData {
    /// Creates an empty aggregate for a fresh session.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            personal_info: PersonalInfo::default(),
            assessment_results: AssessmentResults::new(),
            developmental_goals: GoalSelection::new(),
            started_at,
        }
    }

    /// Creates an aggregate with invitation fields pre-filled.
    #[must_use]
    pub fn with_invitation(
        started_at: DateTime<Utc>,
        email: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            personal_info: PersonalInfo::from_invitation(email, organization),
            ..Self::new(started_at)
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn personal_info_mut(&mut self) -> &mut PersonalInfo {
        &mut self.personal_info
    }

    #[must_use]
    pub fn assessment_results(&self) -> &AssessmentResults {
        &self.assessment_results
    }

    pub fn assessment_results_mut(&mut self) -> &mut AssessmentResults {
        &mut self.assessment_results
    }

    #[must_use]
    pub fn developmental_goals(&self) -> &GoalSelection {
        &self.developmental_goals
    }

    pub fn developmental_goals_mut(&mut self) -> &mut GoalSelection {
        &mut self.developmental_goals
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GoalId, PersonalField, ScaleValue, SectionId};
    use crate::time::fixed_now;

    #[test]
    fn new_session_starts_empty() {
        let data = OnboardingData::new(fixed_now());
        assert!(data.personal_info().first_name.is_empty());
        assert_eq!(data.assessment_results().overall_progress().answered_total, 0);
        assert!(data.developmental_goals().is_empty());
        assert_eq!(data.started_at(), fixed_now());
    }

    #[test]
    fn invitation_prefill_survives_other_mutations() {
        let mut data = OnboardingData::with_invitation(fixed_now(), "a@b.com", "Acme");
        data.personal_info_mut()
            .set_field(PersonalField::FirstName, "Ada");
        data.assessment_results_mut()
            .set_scale(SectionId::Hexaco, "q1", ScaleValue::new(4).unwrap())
            .unwrap();
        data.developmental_goals_mut().toggle(GoalId::Leadership);

        assert_eq!(data.personal_info().email, "a@b.com");
        assert_eq!(data.personal_info().organization, "Acme");
        assert_eq!(data.personal_info().first_name, "Ada");
        assert_eq!(data.assessment_results().overall_progress().answered_total, 1);
        assert_eq!(data.developmental_goals().len(), 1);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let first = OnboardingData::new(fixed_now());
        let second = OnboardingData::new(fixed_now());
        assert_ne!(first.id(), second.id());
    }
}
