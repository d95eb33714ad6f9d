use dioxus::prelude::*;

use services::{OnboardingWizard, WizardStage};

use crate::context::AppContext;
use super::{AssessmentStep, CompleteStep, GoalsStep, PersonalInfoStep, StepProgressBar};

/// The wizard driver view.
///
/// Owns the single `OnboardingWizard` for the session; step views read from
/// it and write back through it, never through a private copy.
#[component]
pub fn OnboardingView() -> Element {
    let ctx = use_context::<AppContext>();
    let wizard = use_signal(|| {
        let wizard = OnboardingWizard::with_invitation(ctx.clock(), ctx.invitation());
        #[cfg(test)]
        let wizard = {
            let mut wizard = wizard;
            if let Some(seed) = try_consume_context::<WizardSeed>() {
                (seed.0)(&mut wizard);
            }
            wizard
        };
        wizard
    });

    let (stage, progress) = {
        let guard = wizard.read();
        (guard.position().stage(), guard.progress())
    };

    rsx! {
        div { class: "onboarding",
            StepProgressBar {
                current_step: progress.current_step,
                total_steps: progress.total_steps,
            }
            div { class: "onboarding__content",
                match stage {
                    WizardStage::PersonalInfo => rsx! { PersonalInfoStep { wizard } },
                    WizardStage::Assessment => rsx! { AssessmentStep { wizard } },
                    WizardStage::Goals => rsx! { GoalsStep { wizard } },
                    WizardStage::Complete => rsx! { CompleteStep { wizard } },
                }
            }
        }
    }
}

/// Transforms the freshly created wizard before first render, so smoke tests
/// can start a view at any stage.
#[cfg(test)]
#[derive(Clone)]
pub(crate) struct WizardSeed(pub(crate) std::rc::Rc<dyn Fn(&mut OnboardingWizard)>);
