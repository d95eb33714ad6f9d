use dioxus::prelude::*;

use onboard_core::model::{ScaleValue, SectionId};
use services::OnboardingWizard;

use crate::catalog::{
    answer_options, choice_questions, dimension_title, scale_questions, AGREEMENT_SCALE,
};

/// Questions answered on the shared five-point agreement scale.
///
/// Used by the hexaco and csi sections; csi additionally gets a heading each
/// time the dimension changes (its items are grouped four by four).
#[component]
pub fn ScaleQuestionList(wizard: Signal<OnboardingWizard>, section: SectionId) -> Element {
    let questions = scale_questions(section).unwrap_or(&[]);
    let show_dimension_headings = section == SectionId::Csi;

    rsx! {
        div { class: "instructions",
            h3 { "Instructions" }
            p { "Please indicate to what extent you agree with the following statements using the scale below:" }
            div { class: "instructions__scale",
                for scale in AGREEMENT_SCALE {
                    div { class: "instructions__scale-item",
                        div { class: "instructions__scale-value", "{scale.value}" }
                        div { class: "instructions__scale-label", "{scale.label}" }
                    }
                }
            }
        }

        div { class: "question-list",
            for (index, question) in questions.iter().enumerate() {
                if show_dimension_headings
                    && (index == 0 || questions[index - 1].dimension != question.dimension)
                {
                    h4 { class: "question-list__dimension",
                        "{dimension_title(question.dimension)}"
                    }
                }
                ScaleQuestionCard {
                    wizard,
                    section,
                    number: index + 1,
                    question_id: question.id,
                    text: question.text,
                }
            }
        }
    }
}

#[component]
fn ScaleQuestionCard(
    wizard: Signal<OnboardingWizard>,
    section: SectionId,
    number: usize,
    question_id: &'static str,
    text: &'static str,
) -> Element {
    let selected = wizard
        .read()
        .data()
        .assessment_results()
        .section(section)
        .scale_of(question_id)
        .map(ScaleValue::get);

    rsx! {
        div { class: "question-card",
            div { class: "question-card__head",
                span { class: "question-card__number", "{number}" }
                p { class: "question-card__text", "{text}" }
            }
            div { class: "option-row option-row--five",
                for scale in AGREEMENT_SCALE {
                    button {
                        class: if selected == Some(scale.value) {
                            "option option--selected"
                        } else {
                            "option"
                        },
                        r#type: "button",
                        onclick: move |_| {
                            let Ok(value) = ScaleValue::new(scale.value) else {
                                return;
                            };
                            let _ = wizard.write().set_scale(section, question_id, value);
                        },
                        div { class: "option__value", "{scale.value}" }
                        div { class: "option__label", "{scale.label}" }
                    }
                }
            }
        }
    }
}

/// Questions answered by picking one labelled option.
///
/// Used by the icar, aq10 and asrs sections.
#[component]
pub fn ChoiceQuestionList(wizard: Signal<OnboardingWizard>, section: SectionId) -> Element {
    let questions = choice_questions(section).unwrap_or(&[]);
    let options = answer_options(section).unwrap_or(&[]);

    rsx! {
        div { class: "question-list",
            for (index, question) in questions.iter().enumerate() {
                ChoiceQuestionCard {
                    wizard,
                    section,
                    number: index + 1,
                    question_id: question.id,
                    text: question.text,
                    tag: question.tag,
                    options,
                }
            }
        }
    }
}

#[component]
fn ChoiceQuestionCard(
    wizard: Signal<OnboardingWizard>,
    section: SectionId,
    number: usize,
    question_id: &'static str,
    text: &'static str,
    tag: Option<&'static str>,
    options: &'static [crate::catalog::AnswerOption],
) -> Element {
    let selected = {
        let guard = wizard.read();
        guard
            .data()
            .assessment_results()
            .section(section)
            .choice_of(question_id)
            .map(str::to_string)
    };

    rsx! {
        div { class: "question-card",
            div { class: "question-card__head",
                span { class: "question-card__number", "{number}" }
                div { class: "question-card__body",
                    if let Some(tag) = tag {
                        span { class: "question-card__tag", "{tag}" }
                    }
                    p { class: "question-card__text", "{text}" }
                }
            }
            div { class: "option-row",
                for option in options {
                    button {
                        class: if selected.as_deref() == Some(option.value) {
                            "option option--selected"
                        } else {
                            "option"
                        },
                        r#type: "button",
                        onclick: move |_| {
                            let _ = wizard.write().set_choice(section, question_id, option.value);
                        },
                        div { class: "option__label", "{option.label}" }
                    }
                }
            }
        }
    }
}

/// Per-section completion footer: count, percentage and bar.
#[component]
pub fn SectionProgressSummary(answered: usize, total: usize, percent: u32) -> Element {
    let width = if total == 0 {
        0.0
    } else {
        answered as f32 / total as f32 * 100.0
    };

    rsx! {
        div { class: "section-progress",
            div { class: "section-progress__row",
                div {
                    h4 { "Progress" }
                    p { "{answered} of {total} questions completed" }
                }
                div { class: "section-progress__percent",
                    span { class: "section-progress__percent-value", "{percent}%" }
                    span { class: "section-progress__percent-label", "Complete" }
                }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {width}%" }
            }
        }
    }
}
