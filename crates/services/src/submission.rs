//! Outbound submission of the finished onboarding aggregate.
//!
//! Submission is an external collaborator invoked only from the terminal
//! Complete stage. The sink receives a snapshot of the aggregate; failures
//! surface to the caller and never touch wizard state.

use std::env;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use uuid::Uuid;

use onboard_core::model::{
    AssessmentResults, GoalSelection, OnboardingData, OverallProgress, PersonalInfo,
};

use crate::error::SubmissionError;

/// Where completed onboarding data is delivered.
#[derive(Clone, Debug)]
pub struct SubmissionConfig {
    pub endpoint: String,
}

impl SubmissionConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("ONBOARD_SUBMIT_URL").ok()?;
        if endpoint.trim().is_empty() {
            return None;
        }
        Some(Self { endpoint })
    }
}

/// Receiver for the final onboarding snapshot.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver the completed aggregate.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` when the sink is disabled or delivery fails.
    async fn submit(&self, data: &OnboardingData) -> Result<(), SubmissionError>;

    /// Whether the sink is configured to deliver anywhere.
    fn enabled(&self) -> bool;
}

/// JSON body posted to the submission endpoint.
///
/// `PersonalInfo` serializes without the password, so credentials never leave
/// the process through this path.
#[derive(Debug, Serialize)]
struct SubmissionPayload<'a> {
    id: Uuid,
    started_at: DateTime<Utc>,
    personal_info: &'a PersonalInfo,
    assessment_results: &'a AssessmentResults,
    developmental_goals: &'a GoalSelection,
    progress: OverallProgress,
}

impl<'a> SubmissionPayload<'a> {
    fn new(data: &'a OnboardingData) -> Self {
        Self {
            id: data.id(),
            started_at: data.started_at(),
            personal_info: data.personal_info(),
            assessment_results: data.assessment_results(),
            developmental_goals: data.developmental_goals(),
            progress: data.assessment_results().overall_progress(),
        }
    }
}

/// HTTP sink posting the aggregate as JSON.
#[derive(Clone)]
pub struct HttpSubmissionSink {
    client: Client,
    config: Option<SubmissionConfig>,
}

impl HttpSubmissionSink {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(SubmissionConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<SubmissionConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn submit(&self, data: &OnboardingData) -> Result<(), SubmissionError> {
        let config = self.config.as_ref().ok_or(SubmissionError::Disabled)?;

        let response = self
            .client
            .post(&config.endpoint)
            .json(&SubmissionPayload::new(data))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SubmissionError::HttpStatus(response.status()));
        }

        Ok(())
    }

    fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
