use serde::{Deserialize, Serialize};

use crate::completion::SectionCompletion;
use crate::model::response::{ResponseError, ScaleValue, SectionResponse};
use crate::model::section::{SectionId, SectionSchema};

/// Total number of questions across all five sections (24+16+10+10+18).
pub const QUESTION_TOTAL: usize = 78;

/// Cross-section progress, every question weighted equally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallProgress {
    pub answered_total: usize,
    pub question_total: usize,
    pub fraction: f32,
}

impl OverallProgress {
    /// Overall completion rounded to a whole percentage for display.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).round() as u32
    }
}

/// All five section responses, keyed by `SectionId`.
///
/// The section set is structurally fixed: one field per section, so sections
/// can never be added or removed; only their contents mutate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    hexaco: SectionResponse,
    csi: SectionResponse,
    icar: SectionResponse,
    aq10: SectionResponse,
    asrs: SectionResponse,
}

impl Default for AssessmentResults {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentResults {
    /// Creates an empty result set with each section in its schema's shape.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hexaco: SectionResponse::empty_for(
                SectionSchema::of(SectionId::Hexaco).answer_shape(),
            ),
            csi: SectionResponse::empty_for(SectionSchema::of(SectionId::Csi).answer_shape()),
            icar: SectionResponse::empty_for(SectionSchema::of(SectionId::Icar).answer_shape()),
            aq10: SectionResponse::empty_for(SectionSchema::of(SectionId::Aq10).answer_shape()),
            asrs: SectionResponse::empty_for(SectionSchema::of(SectionId::Asrs).answer_shape()),
        }
    }

    /// Read access to one section's response.
    #[must_use]
    pub fn section(&self, id: SectionId) -> &SectionResponse {
        match id {
            SectionId::Hexaco => &self.hexaco,
            SectionId::Csi => &self.csi,
            SectionId::Icar => &self.icar,
            SectionId::Aq10 => &self.aq10,
            SectionId::Asrs => &self.asrs,
        }
    }

    fn section_mut(&mut self, id: SectionId) -> &mut SectionResponse {
        match id {
            SectionId::Hexaco => &mut self.hexaco,
            SectionId::Csi => &mut self.csi,
            SectionId::Icar => &mut self.icar,
            SectionId::Aq10 => &mut self.aq10,
            SectionId::Asrs => &mut self.asrs,
        }
    }

    /// Replace one section's response wholesale.
    ///
    /// Used when a section component pushes its full response tree up.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::ShapeMismatch` if the replacement's shape does
    /// not match the section schema.
    pub fn update_section(
        &mut self,
        id: SectionId,
        response: SectionResponse,
    ) -> Result<(), ResponseError> {
        let expected = SectionSchema::of(id).answer_shape();
        if response.shape() != expected {
            return Err(ResponseError::ShapeMismatch { expected });
        }
        *self.section_mut(id) = response;
        Ok(())
    }

    /// Record a scale answer in a keyed-scale section.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::ShapeMismatch` on an ordered-list section.
    pub fn set_scale(
        &mut self,
        id: SectionId,
        question_id: impl Into<String>,
        value: ScaleValue,
    ) -> Result<(), ResponseError> {
        self.section_mut(id).set_scale(question_id, value)
    }

    /// Record a choice answer in an ordered-list section.
    ///
    /// # Errors
    ///
    /// Returns `ResponseError::ShapeMismatch` on a keyed-scale section.
    pub fn set_choice(
        &mut self,
        id: SectionId,
        question_id: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<(), ResponseError> {
        self.section_mut(id).set_choice(question_id, answer)
    }

    /// Completion of one section, evaluated fresh.
    #[must_use]
    pub fn section_completion(&self, id: SectionId) -> SectionCompletion {
        SectionCompletion::evaluate(SectionSchema::of(id), self.section(id))
    }

    /// Whether the section at the given presentation index is complete.
    ///
    /// Out-of-range indexes read as incomplete.
    #[must_use]
    pub fn is_section_complete(&self, index: usize) -> bool {
        SectionId::from_index(index)
            .is_some_and(|id| self.section_completion(id).is_complete)
    }

    /// Progress across all sections as a plain sum over questions.
    #[must_use]
    pub fn overall_progress(&self) -> OverallProgress {
        let answered_total: usize = SectionId::ALL
            .into_iter()
            .map(|id| self.section(id).count())
            .sum();
        OverallProgress {
            answered_total,
            question_total: QUESTION_TOTAL,
            fraction: answered_total as f32 / QUESTION_TOTAL as f32,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
