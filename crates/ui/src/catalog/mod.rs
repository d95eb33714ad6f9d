//! Static question and goal catalogs.
//!
//! The core treats these as an external, read-only collaborator: it only ever
//! sees schemas and answer events, never the text below. Catalog tests pin
//! each list to its schema's question count so the two cannot drift apart.

mod aq10;
mod asrs;
mod csi;
mod goals;
mod hexaco;
mod icar;

use onboard_core::model::SectionId;

pub use aq10::{AQ10_OPTIONS, AQ10_QUESTIONS};
pub use asrs::{ASRS_OPTIONS, ASRS_QUESTIONS};
pub use csi::{dimension_title, CSI_QUESTIONS};
pub use goals::{goal_card, GoalCard, GOALS};
pub use hexaco::HEXACO_QUESTIONS;
pub use icar::{ICAR_OPTIONS, ICAR_QUESTIONS};

/// One statement answered on the five-point agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub dimension: &'static str,
    pub facet: Option<&'static str>,
    /// Reverse-keyed when scored; raw answers are captured either way.
    pub reversed: bool,
}

/// One label on the agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleLabel {
    pub value: u8,
    pub label: &'static str,
}

/// The shared five-point agreement scale.
pub static AGREEMENT_SCALE: [ScaleLabel; 5] = [
    ScaleLabel { value: 1, label: "Strongly Disagree" },
    ScaleLabel { value: 2, label: "Disagree" },
    ScaleLabel { value: 3, label: "Neutral" },
    ScaleLabel { value: 4, label: "Agree" },
    ScaleLabel { value: 5, label: "Strongly Agree" },
];

/// One question answered by picking a labelled option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceQuestion {
    pub id: &'static str,
    pub text: &'static str,
    /// Item grouping shown as a badge (e.g. reasoning kind or symptom part).
    pub tag: Option<&'static str>,
}

/// One selectable answer for a choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The scale statements for a keyed-scale section, if it is one.
#[must_use]
pub fn scale_questions(id: SectionId) -> Option<&'static [ScaleQuestion]> {
    match id {
        SectionId::Hexaco => Some(&HEXACO_QUESTIONS),
        SectionId::Csi => Some(&CSI_QUESTIONS),
        _ => None,
    }
}

/// The choice questions for an ordered-list section, if it is one.
#[must_use]
pub fn choice_questions(id: SectionId) -> Option<&'static [ChoiceQuestion]> {
    match id {
        SectionId::Icar => Some(&ICAR_QUESTIONS),
        SectionId::Aq10 => Some(&AQ10_QUESTIONS),
        SectionId::Asrs => Some(&ASRS_QUESTIONS),
        _ => None,
    }
}

/// The answer options for an ordered-list section, if it is one.
#[must_use]
pub fn answer_options(id: SectionId) -> Option<&'static [AnswerOption]> {
    match id {
        SectionId::Icar => Some(&ICAR_OPTIONS),
        SectionId::Aq10 => Some(&AQ10_OPTIONS),
        SectionId::Asrs => Some(&ASRS_OPTIONS),
        _ => None,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
