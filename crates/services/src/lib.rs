#![forbid(unsafe_code)]

pub mod error;
pub mod progress;
pub mod submission;
pub mod wizard;

pub use onboard_core::Clock;

pub use error::SubmissionError;
pub use progress::WizardProgress;
pub use submission::{HttpSubmissionSink, SubmissionConfig, SubmissionSink};
pub use wizard::{Invitation, OnboardingWizard, WizardPosition, WizardStage, TOTAL_STEPS};
