use dioxus::prelude::*;

use onboard_core::model::{AnswerShape, SectionId, SectionSchema, SECTION_COUNT};
use services::OnboardingWizard;

use super::sections::{ChoiceQuestionList, ScaleQuestionList, SectionProgressSummary};

/// Step 2: hosts the five questionnaire sections with their own sub-flow.
#[component]
pub fn AssessmentStep(wizard: Signal<OnboardingWizard>) -> Element {
    let (section_index, section, completion, can_advance) = {
        let guard = wizard.read();
        let section = guard.current_section().unwrap_or(SectionId::Hexaco);
        (
            guard.position().section_index().unwrap_or(0),
            section,
            guard.section_completion(section),
            guard.can_advance(),
        )
    };
    let schema = SectionSchema::of(section);
    let section_number = section_index + 1;

    // Blend stage-level and in-section progress into one bar, so finishing
    // questions moves the needle before the section flips over.
    let blended_percent =
        (section_index as f32 + completion.fraction) / SECTION_COUNT as f32 * 100.0;

    let back_label = if section_index == 0 {
        "Back to Info"
    } else {
        "Previous Section"
    };
    let next_label = if section_index + 1 == SECTION_COUNT {
        "Complete Assessment"
    } else {
        "Next Section"
    };

    rsx! {
        div { class: "card card--wide",
            header { class: "assessment-header",
                div { class: "assessment-header__row",
                    div {
                        h1 { "{schema.title()}" }
                        p { "{schema.description()}" }
                    }
                    div { class: "assessment-header__counter",
                        span { class: "assessment-header__counter-label", "Section" }
                        span { class: "assessment-header__counter-value",
                            "{section_number} of {SECTION_COUNT}"
                        }
                    }
                }
                div { class: "progress-track progress-track--inverse",
                    div { class: "progress-fill", style: "width: {blended_percent}%" }
                }
                p { class: "assessment-header__questions",
                    "Question {completion.answered} of {completion.total} in this section"
                }
            }

            div { class: "assessment-body",
                match schema.answer_shape() {
                    AnswerShape::KeyedScale => rsx! {
                        ScaleQuestionList { wizard, section }
                    },
                    AnswerShape::OrderedList => rsx! {
                        ChoiceQuestionList { wizard, section }
                    },
                }
                SectionProgressSummary {
                    answered: completion.answered,
                    total: completion.total,
                    percent: completion.percent(),
                }
            }

            footer { class: "step-nav",
                button {
                    class: "btn btn-secondary",
                    id: "assessment-back",
                    r#type: "button",
                    onclick: move |_| {
                        wizard.write().back();
                    },
                    "← {back_label}"
                }
                div { class: "step-nav__right",
                    div { class: "section-dots",
                        for index in 0..SECTION_COUNT {
                            span {
                                class: if index < section_index {
                                    "section-dots__dot section-dots__dot--done"
                                } else if index == section_index {
                                    "section-dots__dot section-dots__dot--current"
                                } else {
                                    "section-dots__dot"
                                },
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        id: "assessment-next",
                        r#type: "button",
                        disabled: !can_advance,
                        onclick: move |_| {
                            // The wizard re-checks the gate; a disabled-state
                            // race cannot skip an incomplete section.
                            wizard.write().next();
                        },
                        "{next_label} →"
                    }
                }
            }
        }
    }
}
