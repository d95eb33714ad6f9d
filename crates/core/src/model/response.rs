use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::section::AnswerShape;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur while recording answers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResponseError {
    #[error("scale value must be between 1 and 5, got {0}")]
    InvalidScale(u8),

    /// An answer was recorded with the wrong mutator for the section's shape.
    ///
    /// Cannot happen with a well-formed question catalog; it indicates a
    /// catalog/core mismatch rather than a user-recoverable condition.
    #[error("section expects {expected:?} answers")]
    ShapeMismatch { expected: AnswerShape },
}

//
// ─── SCALE VALUE ───────────────────────────────────────────────────────────────
//

/// Validated Likert scale value in 1..=5.
///
/// Serializes as the bare number; deserialization revalidates, so the range
/// invariant survives round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScaleValue(u8);

impl ScaleValue {
    /// Create a validated scale value.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::InvalidScale` if the value is outside 1..=5.
    pub fn new(value: u8) -> Result<Self, ResponseError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ResponseError::InvalidScale(value))
        }
    }

    /// Returns the underlying 1..=5 value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ScaleValue {
    type Error = ResponseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScaleValue> for u8 {
    fn from(value: ScaleValue) -> Self {
        value.get()
    }
}

//
// ─── SECTION RESPONSE ──────────────────────────────────────────────────────────
//

/// One answered question in an ordered-list section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceAnswer {
    pub question_id: String,
    pub answer: String,
}

/// In-progress answers for a single questionnaire section.
///
/// The variant matches the section schema's `AnswerShape`. Both variants keep
/// question ids unique: keyed answers overwrite, listed answers are replaced
/// in place so a question keeps its position once answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionResponse {
    KeyedScale(BTreeMap<String, ScaleValue>),
    OrderedList(Vec<ChoiceAnswer>),
}

impl SectionResponse {
    /// Returns the empty response matching the given shape.
    #[must_use]
    pub fn empty_for(shape: AnswerShape) -> Self {
        match shape {
            AnswerShape::KeyedScale => Self::KeyedScale(BTreeMap::new()),
            AnswerShape::OrderedList => Self::OrderedList(Vec::new()),
        }
    }

    /// The shape this response holds.
    #[must_use]
    pub fn shape(&self) -> AnswerShape {
        match self {
            Self::KeyedScale(_) => AnswerShape::KeyedScale,
            Self::OrderedList(_) => AnswerShape::OrderedList,
        }
    }

    /// Record a scale answer, overwriting any previous value for the id.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::ShapeMismatch` on an ordered-list section.
    pub fn set_scale(
        &mut self,
        question_id: impl Into<String>,
        value: ScaleValue,
    ) -> Result<(), ResponseError> {
        match self {
            Self::KeyedScale(map) => {
                map.insert(question_id.into(), value);
                Ok(())
            }
            Self::OrderedList(_) => Err(ResponseError::ShapeMismatch {
                expected: AnswerShape::OrderedList,
            }),
        }
    }

    /// Record a choice answer.
    ///
    /// If the question was already answered, its record is replaced in place
    /// (same position); otherwise a new record is appended. Re-answering must
    /// never grow the sequence, or completion counts would overshoot.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::ShapeMismatch` on a keyed-scale section.
    pub fn set_choice(
        &mut self,
        question_id: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<(), ResponseError> {
        match self {
            Self::OrderedList(records) => {
                let question_id = question_id.into();
                let answer = answer.into();
                if let Some(existing) = records
                    .iter_mut()
                    .find(|record| record.question_id == question_id)
                {
                    existing.answer = answer;
                } else {
                    records.push(ChoiceAnswer {
                        question_id,
                        answer,
                    });
                }
                Ok(())
            }
            Self::KeyedScale(_) => Err(ResponseError::ShapeMismatch {
                expected: AnswerShape::KeyedScale,
            }),
        }
    }

    /// Number of distinct answered question ids.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::KeyedScale(map) => map.len(),
            // Safe because `set_choice` replaces rather than appending.
            Self::OrderedList(records) => records.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The recorded scale value for a question, if any.
    #[must_use]
    pub fn scale_of(&self, question_id: &str) -> Option<ScaleValue> {
        match self {
            Self::KeyedScale(map) => map.get(question_id).copied(),
            Self::OrderedList(_) => None,
        }
    }

    /// The recorded choice answer for a question, if any.
    #[must_use]
    pub fn choice_of(&self, question_id: &str) -> Option<&str> {
        match self {
            Self::OrderedList(records) => records
                .iter()
                .find(|record| record.question_id == question_id)
                .map(|record| record.answer.as_str()),
            Self::KeyedScale(_) => None,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(value: u8) -> ScaleValue {
        ScaleValue::new(value).unwrap()
    }

    #[test]
    fn scale_value_accepts_1_through_5() {
        for value in 1..=5 {
            assert_eq!(ScaleValue::new(value).unwrap().get(), value);
        }
    }

    #[test]
    fn scale_value_rejects_out_of_range() {
        assert_eq!(ScaleValue::new(0), Err(ResponseError::InvalidScale(0)));
        assert_eq!(ScaleValue::new(6), Err(ResponseError::InvalidScale(6)));
    }

    #[test]
    fn keyed_overwrite_does_not_grow_count() {
        let mut response = SectionResponse::empty_for(AnswerShape::KeyedScale);
        response.set_scale("q1", scale(3)).unwrap();
        response.set_scale("q2", scale(4)).unwrap();
        response.set_scale("q1", scale(5)).unwrap();

        assert_eq!(response.count(), 2);
        assert_eq!(response.scale_of("q1"), Some(scale(5)));
    }

    #[test]
    fn choice_replaces_in_place() {
        let mut response = SectionResponse::empty_for(AnswerShape::OrderedList);
        response.set_choice("icar1", "A").unwrap();
        response.set_choice("icar2", "C").unwrap();
        response.set_choice("icar1", "B").unwrap();

        assert_eq!(response.count(), 2);
        assert_eq!(response.choice_of("icar1"), Some("B"));
        // The re-answered question keeps its original position.
        let SectionResponse::OrderedList(records) = &response else {
            panic!("expected ordered list");
        };
        assert_eq!(records[0].question_id, "icar1");
        assert_eq!(records[1].question_id, "icar2");
    }

    #[test]
    fn single_question_reanswer_keeps_length_one() {
        let mut response = SectionResponse::empty_for(AnswerShape::OrderedList);
        response.set_choice("icar1", "A").unwrap();
        response.set_choice("icar1", "B").unwrap();

        assert_eq!(response.count(), 1);
        assert_eq!(response.choice_of("icar1"), Some("B"));
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let mut keyed = SectionResponse::empty_for(AnswerShape::KeyedScale);
        let err = keyed.set_choice("q1", "A").unwrap_err();
        assert_eq!(
            err,
            ResponseError::ShapeMismatch {
                expected: AnswerShape::KeyedScale
            }
        );

        let mut listed = SectionResponse::empty_for(AnswerShape::OrderedList);
        let err = listed.set_scale("q1", scale(1)).unwrap_err();
        assert_eq!(
            err,
            ResponseError::ShapeMismatch {
                expected: AnswerShape::OrderedList
            }
        );
    }

    #[test]
    fn lookups_miss_across_shapes() {
        let keyed = SectionResponse::empty_for(AnswerShape::KeyedScale);
        assert_eq!(keyed.choice_of("q1"), None);
        let listed = SectionResponse::empty_for(AnswerShape::OrderedList);
        assert_eq!(listed.scale_of("q1"), None);
    }
}
