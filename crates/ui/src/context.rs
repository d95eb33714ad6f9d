use std::sync::Arc;

use services::{Clock, Invitation, SubmissionSink};

/// What the composition root supplies to the UI.
pub trait UiApp: Send + Sync {
    fn invitation(&self) -> Invitation;
    fn clock(&self) -> Clock;
    fn submission(&self) -> Arc<dyn SubmissionSink>;
}

#[derive(Clone)]
pub struct AppContext {
    invitation: Invitation,
    clock: Clock,
    submission: Arc<dyn SubmissionSink>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            invitation: app.invitation(),
            clock: app.clock(),
            submission: app.submission(),
        }
    }

    #[must_use]
    pub fn invitation(&self) -> &Invitation {
        &self.invitation
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn submission(&self) -> Arc<dyn SubmissionSink> {
        Arc::clone(&self.submission)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
