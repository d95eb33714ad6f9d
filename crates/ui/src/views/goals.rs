use dioxus::prelude::*;

use services::OnboardingWizard;

use crate::catalog::{goal_card, GOALS};

/// Step 3: optional developmental goal selection.
#[component]
pub fn GoalsStep(wizard: Signal<OnboardingWizard>) -> Element {
    let selected: Vec<_> = wizard
        .read()
        .data()
        .developmental_goals()
        .iter()
        .collect();
    let selected_count = selected.len();

    let selection_note = if selected_count == 0 {
        "Optional: Select your development focus areas".to_string()
    } else if selected_count == 1 {
        "1 goal selected".to_string()
    } else {
        format!("{selected_count} goals selected")
    };

    rsx! {
        div { class: "card card--wide",
            header { class: "goals-header",
                h1 { "Development Goals" }
                p { "Choose areas where you'd like to focus your professional development" }
                div { class: "goals-header__counter",
                    span { class: "goals-header__counter-label", "Selected Goals" }
                    span { class: "goals-header__counter-value",
                        "{selected_count} of {GOALS.len()}"
                    }
                }
            }

            div { class: "instructions",
                h3 { "Instructions" }
                p {
                    "Select the professional development areas that are most important to you right now. "
                    "You can choose as many or as few as you'd like - these will help us provide personalized insights."
                }
            }

            div { class: "goal-grid",
                for card in GOALS {
                    {
                        let is_selected = wizard
                            .read()
                            .data()
                            .developmental_goals()
                            .contains(card.id);
                        rsx! {
                            button {
                                class: if is_selected { "goal-card goal-card--selected" } else { "goal-card" },
                                r#type: "button",
                                onclick: move |_| {
                                    wizard.write().toggle_goal(card.id);
                                },
                                div { class: "goal-card__head",
                                    span { class: "goal-card__icon", "{card.icon}" }
                                    h4 { class: "goal-card__title", "{card.title}" }
                                    span {
                                        class: if is_selected {
                                            "goal-card__check goal-card__check--on"
                                        } else {
                                            "goal-card__check"
                                        },
                                        if is_selected { "✓" }
                                    }
                                }
                                p { class: "goal-card__description", "{card.description}" }
                            }
                        }
                    }
                }
            }

            if selected_count > 0 {
                div { class: "goal-summary",
                    h4 { "Your Selected Development Goals:" }
                    div { class: "goal-summary__chips",
                        for goal in selected {
                            span { class: "chip",
                                span { class: "chip__icon", "{goal_card(goal).icon}" }
                                "{goal_card(goal).title}"
                            }
                        }
                    }
                }
            }

            footer { class: "step-nav",
                button {
                    class: "btn btn-secondary",
                    id: "goals-back",
                    r#type: "button",
                    onclick: move |_| {
                        wizard.write().back();
                    },
                    "← Back to Assessment"
                }
                div { class: "step-nav__right",
                    span { class: "step-nav__note", "{selection_note}" }
                    button {
                        class: "btn btn-primary",
                        id: "goals-complete",
                        r#type: "button",
                        onclick: move |_| {
                            wizard.write().next();
                        },
                        "Complete Onboarding →"
                    }
                }
            }
        }
    }
}
