use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine developmental goal areas from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalId {
    Communication,
    TimeManagement,
    Leadership,
    Collaboration,
    ProblemSolving,
    Adaptability,
    EmotionalIntelligence,
    ConflictResolution,
    TechnicalProficiency,
}

impl GoalId {
    /// All goals in catalog order.
    pub const ALL: [GoalId; 9] = [
        GoalId::Communication,
        GoalId::TimeManagement,
        GoalId::Leadership,
        GoalId::Collaboration,
        GoalId::ProblemSolving,
        GoalId::Adaptability,
        GoalId::EmotionalIntelligence,
        GoalId::ConflictResolution,
        GoalId::TechnicalProficiency,
    ];

    /// Returns the wire identifier for this goal.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GoalId::Communication => "communication",
            GoalId::TimeManagement => "time-management",
            GoalId::Leadership => "leadership",
            GoalId::Collaboration => "collaboration",
            GoalId::ProblemSolving => "problem-solving",
            GoalId::Adaptability => "adaptability",
            GoalId::EmotionalIntelligence => "emotional-intelligence",
            GoalId::ConflictResolution => "conflict-resolution",
            GoalId::TechnicalProficiency => "technical-proficiency",
        }
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user's selected goals: duplicate-free, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalSelection(Vec<GoalId>);

impl GoalSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a goal if it is not selected, deselect it otherwise.
    ///
    /// Returns whether the goal is selected after the toggle. New selections
    /// land at the end so display order follows selection order.
    pub fn toggle(&mut self, goal: GoalId) -> bool {
        if let Some(position) = self.0.iter().position(|selected| *selected == goal) {
            self.0.remove(position);
            false
        } else {
            self.0.push(goal);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, goal: GoalId) -> bool {
        self.0.contains(&goal)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected goals in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[GoalId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = GoalId> + '_ {
        self.0.iter().copied()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_goals() {
        assert_eq!(GoalId::ALL.len(), 9);
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let mut selection = GoalSelection::new();
        assert!(selection.toggle(GoalId::Leadership));
        assert!(selection.contains(GoalId::Leadership));
        assert!(!selection.toggle(GoalId::Leadership));
        assert!(selection.is_empty());
    }

    #[test]
    fn selection_preserves_insertion_order_without_duplicates() {
        let mut selection = GoalSelection::new();
        selection.toggle(GoalId::Adaptability);
        selection.toggle(GoalId::Communication);
        selection.toggle(GoalId::Adaptability);
        selection.toggle(GoalId::ConflictResolution);
        selection.toggle(GoalId::Adaptability);

        assert_eq!(
            selection.as_slice(),
            &[
                GoalId::Communication,
                GoalId::ConflictResolution,
                GoalId::Adaptability,
            ]
        );
    }

    #[test]
    fn wire_ids_are_kebab_case() {
        assert_eq!(GoalId::TimeManagement.as_str(), "time-management");
        let json = serde_json::to_string(&GoalId::EmotionalIntelligence).unwrap();
        assert_eq!(json, "\"emotional-intelligence\"");
        let back: GoalId = serde_json::from_str("\"problem-solving\"").unwrap();
        assert_eq!(back, GoalId::ProblemSolving);
    }
}
