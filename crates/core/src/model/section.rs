use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of questionnaire sections in the assessment.
pub const SECTION_COUNT: usize = 5;

/// Identifier for one of the five questionnaire sections.
///
/// The ordering of `ALL` is the order sections are presented in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hexaco,
    Csi,
    Icar,
    Aq10,
    Asrs,
}

impl SectionId {
    /// All sections in presentation order.
    pub const ALL: [SectionId; SECTION_COUNT] = [
        SectionId::Hexaco,
        SectionId::Csi,
        SectionId::Icar,
        SectionId::Aq10,
        SectionId::Asrs,
    ];

    /// Returns the wire identifier for this section.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hexaco => "hexaco",
            SectionId::Csi => "csi",
            SectionId::Icar => "icar",
            SectionId::Aq10 => "aq10",
            SectionId::Asrs => "asrs",
        }
    }

    /// Position of this section in the presentation order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SectionId::Hexaco => 0,
            SectionId::Csi => 1,
            SectionId::Icar => 2,
            SectionId::Aq10 => 3,
            SectionId::Asrs => 4,
        }
    }

    /// Returns the section at the given presentation index, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The shape a section's answers take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerShape {
    /// One numeric scale value per question id, unique per id.
    KeyedScale,
    /// An ordered sequence of question/answer records, unique per id.
    OrderedList,
}

/// Static descriptor for one questionnaire section.
///
/// Schemas are fixed: five instances, one per `SectionId`, supplied by the
/// question catalog. The core never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSchema {
    id: SectionId,
    title: &'static str,
    description: &'static str,
    total_questions: usize,
    answer_shape: AnswerShape,
}

static SCHEMAS: [SectionSchema; SECTION_COUNT] = [
    SectionSchema {
        id: SectionId::Hexaco,
        title: "Personality Assessment",
        description: "Understanding your personality traits and tendencies",
        total_questions: 24,
        answer_shape: AnswerShape::KeyedScale,
    },
    SectionSchema {
        id: SectionId::Csi,
        title: "Communication Style",
        description: "How you prefer to communicate and express yourself",
        total_questions: 16,
        answer_shape: AnswerShape::KeyedScale,
    },
    SectionSchema {
        id: SectionId::Icar,
        title: "Cognitive Assessment",
        description: "Evaluating reasoning and problem-solving abilities",
        total_questions: 10,
        answer_shape: AnswerShape::OrderedList,
    },
    SectionSchema {
        id: SectionId::Aq10,
        title: "Autism Spectrum Assessment",
        description: "Understanding cognitive patterns and preferences",
        total_questions: 10,
        answer_shape: AnswerShape::OrderedList,
    },
    SectionSchema {
        id: SectionId::Asrs,
        title: "ADHD Assessment",
        description: "Evaluating attention and focus patterns",
        total_questions: 18,
        answer_shape: AnswerShape::OrderedList,
    },
];

impl SectionSchema {
    /// Returns the schema for the given section.
    #[must_use]
    pub fn of(id: SectionId) -> &'static Self {
        &SCHEMAS[id.index()]
    }

    /// All five schemas in presentation order.
    #[must_use]
    pub fn all() -> &'static [SectionSchema; SECTION_COUNT] {
        &SCHEMAS
    }

    #[must_use]
    pub fn id(&self) -> SectionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn answer_shape(&self) -> AnswerShape {
        self.answer_shape
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_order_is_fixed() {
        assert_eq!(SectionId::ALL[0], SectionId::Hexaco);
        assert_eq!(SectionId::ALL[4], SectionId::Asrs);
        for (index, id) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), index);
            assert_eq!(SectionId::from_index(index), Some(id));
        }
        assert_eq!(SectionId::from_index(SECTION_COUNT), None);
    }

    #[test]
    fn schemas_cover_every_section_once() {
        for id in SectionId::ALL {
            assert_eq!(SectionSchema::of(id).id(), id);
        }
    }

    #[test]
    fn schema_question_counts() {
        assert_eq!(SectionSchema::of(SectionId::Hexaco).total_questions(), 24);
        assert_eq!(SectionSchema::of(SectionId::Csi).total_questions(), 16);
        assert_eq!(SectionSchema::of(SectionId::Icar).total_questions(), 10);
        assert_eq!(SectionSchema::of(SectionId::Aq10).total_questions(), 10);
        assert_eq!(SectionSchema::of(SectionId::Asrs).total_questions(), 18);
    }

    #[test]
    fn scale_sections_are_keyed_and_screeners_are_listed() {
        assert_eq!(
            SectionSchema::of(SectionId::Hexaco).answer_shape(),
            AnswerShape::KeyedScale
        );
        assert_eq!(
            SectionSchema::of(SectionId::Csi).answer_shape(),
            AnswerShape::KeyedScale
        );
        for id in [SectionId::Icar, SectionId::Aq10, SectionId::Asrs] {
            assert_eq!(
                SectionSchema::of(id).answer_shape(),
                AnswerShape::OrderedList
            );
        }
    }

    #[test]
    fn wire_ids_round_trip_through_serde() {
        let json = serde_json::to_string(&SectionId::Aq10).unwrap();
        assert_eq!(json, "\"aq10\"");
        let back: SectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SectionId::Aq10);
    }
}
