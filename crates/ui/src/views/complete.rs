use dioxus::prelude::*;

use services::{OnboardingWizard, SubmissionError};

use crate::context::AppContext;
use crate::vm::SummaryVm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Sending,
    Delivered,
    Skipped,
    Failed,
}

/// Step 4: the terminal summary.
///
/// Hands one snapshot of the aggregate to the submission collaborator; the
/// wizard itself is done and never mutated again from here.
#[component]
pub fn CompleteStep(wizard: Signal<OnboardingWizard>) -> Element {
    let ctx = use_context::<AppContext>();
    let vm = SummaryVm::from_data(wizard.read().data());

    let mut submit_state = use_signal(|| SubmitState::Idle);
    let submission = ctx.submission();
    let snapshot = wizard.read().data().clone();
    let send = use_callback(move |()| {
        let submission = submission.clone();
        let data = snapshot.clone();
        submit_state.set(SubmitState::Sending);
        spawn(async move {
            match submission.submit(&data).await {
                Ok(()) => submit_state.set(SubmitState::Delivered),
                Err(SubmissionError::Disabled) => submit_state.set(SubmitState::Skipped),
                Err(_) => submit_state.set(SubmitState::Failed),
            }
        });
    });

    let mut fired = use_signal(|| false);
    use_effect(move || {
        if !fired() {
            fired.set(true);
            send.call(());
        }
    });

    let submit_note = match submit_state() {
        SubmitState::Idle | SubmitState::Sending => Some("Submitting your results..."),
        SubmitState::Delivered => Some("Your results were submitted successfully."),
        SubmitState::Skipped => None,
        SubmitState::Failed => Some("We couldn't submit your results. Please retry."),
    };

    rsx! {
        div { class: "card card--wide",
            header { class: "complete-header",
                div { class: "complete-header__badge", "✓" }
                h1 { "Onboarding Complete!" }
                p { "Welcome to BBI Intelligence, {vm.first_name}!" }
            }

            section { class: "summary-panel summary-panel--profile",
                h3 { "Your Profile" }
                div { class: "summary-panel__grid",
                    div {
                        span { class: "summary-panel__label", "Name:" }
                        span { class: "summary-panel__value", "{vm.full_name}" }
                    }
                    div {
                        span { class: "summary-panel__label", "Role:" }
                        span { class: "summary-panel__value", "{vm.role}" }
                    }
                    div {
                        span { class: "summary-panel__label", "Email:" }
                        span { class: "summary-panel__value", "{vm.email}" }
                    }
                    div {
                        span { class: "summary-panel__label", "Organization:" }
                        span { class: "summary-panel__value", "{vm.organization}" }
                    }
                }
            }

            section { class: "summary-panel summary-panel--assessment",
                h3 { "Assessment Results" }
                div { class: "summary-panel__overall",
                    div { class: "summary-panel__overall-row",
                        span { "Overall Completion" }
                        span { class: "summary-panel__overall-count",
                            "{vm.total_completed} / {vm.total_questions} questions ({vm.percent}%)"
                        }
                    }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "width: {vm.percent}%" }
                    }
                }
                div { class: "summary-panel__sections",
                    for row in vm.sections {
                        div { class: "summary-panel__section-row",
                            span { "{row.icon} {row.label}" }
                            span { "{row.completed}/{row.total}" }
                        }
                    }
                }
            }

            if !vm.goal_titles.is_empty() {
                section { class: "summary-panel summary-panel--goals",
                    h3 { "Development Goals" }
                    div { class: "goal-summary__chips",
                        for title in vm.goal_titles {
                            span { class: "chip", "{title}" }
                        }
                    }
                }
            }

            section { class: "summary-panel summary-panel--next",
                h3 { "What's Next?" }
                ul { class: "next-steps",
                    li { "Your assessment results are being processed" }
                    li { "You'll receive a detailed behavioral profile within 24 hours" }
                    li { "Your manager can now include you in team matching and project planning" }
                    li { "Access your dashboard to track team compatibility and performance metrics" }
                }
                if let Some(note) = submit_note {
                    p { class: "submit-note", id: "submit-note", "{note}" }
                }
                if submit_state() == SubmitState::Failed {
                    button {
                        class: "btn btn-secondary",
                        id: "submit-retry",
                        r#type: "button",
                        onclick: move |_| send.call(()),
                        "Retry"
                    }
                }
            }

            footer { class: "complete-actions",
                button { class: "btn btn-primary", r#type: "button", "Go to Dashboard →" }
                button { class: "btn btn-secondary", r#type: "button", "Download Report Summary" }
            }
        }
    }
}
