mod assessment;
mod goals;
mod onboarding;
mod personal;
mod response;
mod section;

pub use assessment::{AssessmentResults, OverallProgress, QUESTION_TOTAL};
pub use goals::{GoalId, GoalSelection};
pub use onboarding::OnboardingData;
pub use personal::{FieldErrors, PersonalField, PersonalInfo, MIN_PASSWORD_LEN};
pub use response::{ChoiceAnswer, ResponseError, ScaleValue, SectionResponse};
pub use section::{AnswerShape, SectionId, SectionSchema, SECTION_COUNT};
