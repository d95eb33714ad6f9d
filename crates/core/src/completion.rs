//! Pure completion evaluation for questionnaire sections.

use serde::Serialize;

use crate::model::{SectionResponse, SectionSchema};

/// How far one section has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionCompletion {
    pub answered: usize,
    pub total: usize,
    pub fraction: f32,
    pub is_complete: bool,
}

impl SectionCompletion {
    /// Evaluate a section's completion from its schema and current response.
    ///
    /// Computed fresh on every call; callers must not cache the result across
    /// mutations. `is_complete` uses `>=` so an over-answered section (ruled
    /// out by the uniqueness invariant) still reads as complete.
    #[must_use]
    pub fn evaluate(schema: &SectionSchema, response: &SectionResponse) -> Self {
        let answered = response.count();
        let total = schema.total_questions();
        Self {
            answered,
            total,
            fraction: answered as f32 / total as f32,
            is_complete: answered >= total,
        }
    }

    /// Completion rounded to a whole percentage for display.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).round() as u32
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
