//! The fixed nine-goal developmental catalog.

use onboard_core::model::GoalId;

/// One selectable goal card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalCard {
    pub id: GoalId,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub static GOALS: [GoalCard; 9] = [
    GoalCard {
        id: GoalId::Communication,
        title: "Communication Skills",
        icon: "💬",
        description: "Includes verbal, written, and interpersonal communication. Strong communicators listen effectively, convey ideas clearly, and adapt their message to different audiences.",
    },
    GoalCard {
        id: GoalId::TimeManagement,
        title: "Time Management and Organization",
        icon: "⏰",
        description: "Encompasses prioritizing tasks, managing deadlines, and efficiently allocating resources. Good time managers reduce stress and increase overall productivity.",
    },
    GoalCard {
        id: GoalId::Leadership,
        title: "Leadership and Management",
        icon: "👑",
        description: "Involves motivating teams, guiding projects, and making strategic decisions. Effective leaders also mentor and support their colleagues' growth.",
    },
    GoalCard {
        id: GoalId::Collaboration,
        title: "Collaboration and Teamwork",
        icon: "🤝",
        description: "Focuses on working harmoniously with diverse groups, sharing responsibilities, and combining strengths to achieve common objectives.",
    },
    GoalCard {
        id: GoalId::ProblemSolving,
        title: "Problem-Solving and Critical Thinking",
        icon: "🧩",
        description: "Entails analyzing complex issues, brainstorming innovative solutions, and evaluating outcomes. Strong problem-solvers approach challenges methodically and creatively.",
    },
    GoalCard {
        id: GoalId::Adaptability,
        title: "Adaptability and Flexibility",
        icon: "🌊",
        description: "Involves remaining open to change, learning new skills quickly, and adjusting to evolving roles or priorities without sacrificing quality.",
    },
    GoalCard {
        id: GoalId::EmotionalIntelligence,
        title: "Emotional Intelligence",
        icon: "🧠",
        description: "Revolves around self-awareness, empathy, and managing one's own emotions and reactions. Colleagues with high emotional intelligence foster better relationships and resolve conflicts more easily.",
    },
    GoalCard {
        id: GoalId::ConflictResolution,
        title: "Conflict Resolution",
        icon: "⚖️",
        description: "Entails understanding differing perspectives, mediating disagreements, and finding common ground. Good conflict resolution promotes a positive and productive work environment.",
    },
    GoalCard {
        id: GoalId::TechnicalProficiency,
        title: "Technical Proficiency",
        icon: "⚙️",
        description: "Refers to industry-specific knowledge and the ability to use relevant tools or software effectively. Continued technical skill development helps professionals stay current and competitive.",
    },
];

/// The card for a goal id.
#[must_use]
pub fn goal_card(id: GoalId) -> &'static GoalCard {
    // The catalog covers every variant, so the lookup cannot miss.
    GOALS
        .iter()
        .find(|card| card.id == id)
        .unwrap_or(&GOALS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_goal_once() {
        assert_eq!(GOALS.len(), GoalId::ALL.len());
        for id in GoalId::ALL {
            assert_eq!(goal_card(id).id, id);
        }
    }
}
