use dioxus::prelude::*;

/// Labels for the four wizard steps, in order.
pub static STEPS: [(&str, &str); 4] = [
    ("Personal Info", "Basic information"),
    ("Assessment", "BBI evaluation"),
    ("Goals", "Development focus"),
    ("Complete", "All done!"),
];

/// Fixed header tracking wizard position.
///
/// Consumes only the `(current_step, total_steps)` pair; everything else is
/// static copy.
#[component]
pub fn StepProgressBar(current_step: usize, total_steps: usize) -> Element {
    let percent = current_step as f32 / total_steps as f32 * 100.0;

    rsx! {
        div { class: "step-progress",
            div { class: "step-progress__steps",
                for (index, (label, description)) in STEPS.iter().enumerate() {
                    {
                        let step = index + 1;
                        let circle_class = if step < current_step {
                            "step-progress__circle step-progress__circle--done"
                        } else if step == current_step {
                            "step-progress__circle step-progress__circle--current"
                        } else {
                            "step-progress__circle"
                        };
                        rsx! {
                            div { class: "step-progress__step",
                                div { class: "{circle_class}",
                                    if step < current_step {
                                        "✓"
                                    } else {
                                        "{step}"
                                    }
                                }
                                div { class: "step-progress__info",
                                    div { class: "step-progress__label", "{label}" }
                                    div { class: "step-progress__description", "{description}" }
                                }
                            }
                            if index + 1 < STEPS.len() {
                                div {
                                    class: if step < current_step {
                                        "step-progress__connector step-progress__connector--done"
                                    } else {
                                        "step-progress__connector"
                                    },
                                }
                            }
                        }
                    }
                }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
            div { class: "step-progress__counter",
                "Step {current_step} of {total_steps}"
            }
        }
    }
}
