use onboard_core::model::{OnboardingData, SectionId};

use crate::catalog::goal_card;

/// One per-section line in the completion summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummaryRow {
    pub icon: &'static str,
    pub label: &'static str,
    pub completed: usize,
    pub total: usize,
}

/// Display model for the completion step.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryVm {
    pub first_name: String,
    pub full_name: String,
    pub role: String,
    pub email: String,
    pub organization: String,
    pub sections: Vec<SectionSummaryRow>,
    pub total_completed: usize,
    pub total_questions: usize,
    pub percent: u32,
    pub goal_titles: Vec<&'static str>,
}

fn section_display(id: SectionId) -> (&'static str, &'static str) {
    match id {
        SectionId::Hexaco => ("🧠", "HEXACO Personality"),
        SectionId::Csi => ("💬", "Communication Style"),
        SectionId::Icar => ("🎯", "Cognitive Assessment"),
        SectionId::Aq10 => ("🔍", "AQ-10 Assessment"),
        SectionId::Asrs => ("⚡", "ADHD Assessment"),
    }
}

impl SummaryVm {
    #[must_use]
    pub fn from_data(data: &OnboardingData) -> Self {
        let info = data.personal_info();
        let results = data.assessment_results();
        let progress = results.overall_progress();

        let sections = SectionId::ALL
            .into_iter()
            .map(|id| {
                let (icon, label) = section_display(id);
                let completion = results.section_completion(id);
                SectionSummaryRow {
                    icon,
                    label,
                    completed: completion.answered,
                    total: completion.total,
                }
            })
            .collect();

        let goal_titles = data
            .developmental_goals()
            .iter()
            .map(|goal| goal_card(goal).title)
            .collect();

        Self {
            first_name: info.first_name.clone(),
            full_name: format!("{} {}", info.first_name, info.last_name),
            role: info.role.clone(),
            email: info.email.clone(),
            organization: info.organization.clone(),
            sections,
            total_completed: progress.answered_total,
            total_questions: progress.question_total,
            percent: progress.percent(),
            goal_titles,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::model::{GoalId, PersonalField, ScaleValue};
    use onboard_core::time::fixed_now;

    #[test]
    fn summary_reflects_profile_sections_and_goals() {
        let mut data = OnboardingData::with_invitation(fixed_now(), "ada@acme.com", "Acme");
        data.personal_info_mut()
            .set_field(PersonalField::FirstName, "Ada");
        data.personal_info_mut()
            .set_field(PersonalField::LastName, "Lovelace");
        data.personal_info_mut()
            .set_field(PersonalField::Role, "Engineer");
        for n in 1..=24 {
            data.assessment_results_mut()
                .set_scale(SectionId::Hexaco, format!("q{n}"), ScaleValue::new(3).unwrap())
                .unwrap();
        }
        data.developmental_goals_mut().toggle(GoalId::ProblemSolving);
        data.developmental_goals_mut().toggle(GoalId::Communication);

        let vm = SummaryVm::from_data(&data);

        assert_eq!(vm.full_name, "Ada Lovelace");
        assert_eq!(vm.sections.len(), 5);
        assert_eq!(vm.sections[0].completed, 24);
        assert_eq!(vm.sections[0].total, 24);
        assert_eq!(vm.sections[4].completed, 0);
        assert_eq!(vm.total_completed, 24);
        assert_eq!(vm.total_questions, 78);
        assert_eq!(vm.percent, 31);
        assert_eq!(
            vm.goal_titles,
            vec![
                "Problem-Solving and Critical Thinking",
                "Communication Skills"
            ]
        );
    }
}
