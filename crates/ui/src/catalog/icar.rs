//! ICAR cognitive items.
//!
//! Stand-in statements: the real matrix/verbal items come from the ICAR
//! catalogue, which is distributed separately and cannot be bundled here.

use super::{AnswerOption, ChoiceQuestion};

pub static ICAR_QUESTIONS: [ChoiceQuestion; 10] = [
    ChoiceQuestion {
        id: "icar1",
        text: "Matrix reasoning question 1 (placeholder)",
        tag: Some("Matrix Reasoning"),
    },
    ChoiceQuestion {
        id: "icar2",
        text: "Matrix reasoning question 2 (placeholder)",
        tag: Some("Matrix Reasoning"),
    },
    ChoiceQuestion {
        id: "icar3",
        text: "Matrix reasoning question 3 (placeholder)",
        tag: Some("Matrix Reasoning"),
    },
    ChoiceQuestion {
        id: "icar4",
        text: "Verbal reasoning question 1 (placeholder)",
        tag: Some("Verbal Reasoning"),
    },
    ChoiceQuestion {
        id: "icar5",
        text: "Verbal reasoning question 2 (placeholder)",
        tag: Some("Verbal Reasoning"),
    },
    ChoiceQuestion {
        id: "icar6",
        text: "Verbal reasoning question 3 (placeholder)",
        tag: Some("Verbal Reasoning"),
    },
    ChoiceQuestion {
        id: "icar7",
        text: "Matrix reasoning question 4 (placeholder)",
        tag: Some("Matrix Reasoning"),
    },
    ChoiceQuestion {
        id: "icar8",
        text: "Matrix reasoning question 5 (placeholder)",
        tag: Some("Matrix Reasoning"),
    },
    ChoiceQuestion {
        id: "icar9",
        text: "Verbal reasoning question 4 (placeholder)",
        tag: Some("Verbal Reasoning"),
    },
    ChoiceQuestion {
        id: "icar10",
        text: "Verbal reasoning question 5 (placeholder)",
        tag: Some("Verbal Reasoning"),
    },
];

pub static ICAR_OPTIONS: [AnswerOption; 4] = [
    AnswerOption { value: "A", label: "Option A" },
    AnswerOption { value: "B", label: "Option B" },
    AnswerOption { value: "C", label: "Option C" },
    AnswerOption { value: "D", label: "Option D" },
];
