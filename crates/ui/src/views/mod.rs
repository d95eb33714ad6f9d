mod assessment;
mod complete;
mod flow;
mod goals;
mod personal_info;
mod progress;
mod sections;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentStep;
pub use complete::CompleteStep;
pub use flow::OnboardingView;
pub use goals::GoalsStep;
pub use personal_info::PersonalInfoStep;
pub use progress::StepProgressBar;
