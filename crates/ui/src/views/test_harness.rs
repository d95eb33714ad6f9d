use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use onboard_core::model::OnboardingData;
use onboard_core::time::fixed_clock;
use services::{Clock, Invitation, OnboardingWizard, SubmissionError, SubmissionSink};

use crate::context::{build_app_context, UiApp};
use crate::views::OnboardingView;
use super::flow::WizardSeed;

/// Sink that counts deliveries instead of talking to the network.
pub(crate) struct RecordingSink {
    submissions: Mutex<usize>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self {
            submissions: Mutex::new(0),
        }
    }

    pub(crate) fn submissions(&self) -> usize {
        *self.submissions.lock().expect("sink lock")
    }
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn submit(&self, _data: &OnboardingData) -> Result<(), SubmissionError> {
        *self.submissions.lock().expect("sink lock") += 1;
        Ok(())
    }

    fn enabled(&self) -> bool {
        true
    }
}

struct TestApp {
    invitation: Invitation,
    sink: Arc<RecordingSink>,
}

impl UiApp for TestApp {
    fn invitation(&self) -> Invitation {
        self.invitation.clone()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn submission(&self) -> Arc<dyn SubmissionSink> {
        Arc::clone(&self.sink) as Arc<dyn SubmissionSink>
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    seed: Option<WizardSeed>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    if let Some(seed) = props.seed.clone() {
        use_context_provider(|| seed);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { OnboardingView {} }
}

pub(crate) struct ViewHarness {
    pub dom: VirtualDom,
    pub sink: Arc<RecordingSink>,
}

impl ViewHarness {
    pub(crate) fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub(crate) async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub(crate) fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub(crate) fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub(crate) fn setup_wizard_harness(
    invitation: Invitation,
    seed: Option<Rc<dyn Fn(&mut OnboardingWizard)>>,
) -> ViewHarness {
    let sink = Arc::new(RecordingSink::new());
    let app = Arc::new(TestApp {
        invitation,
        sink: Arc::clone(&sink),
    });

    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessProps {
            app,
            seed: seed.map(WizardSeed),
        },
    );

    ViewHarness { dom, sink }
}
