use std::rc::Rc;

use onboard_core::model::{AnswerShape, PersonalField, ScaleValue, SectionId, SectionSchema};
use services::{Invitation, OnboardingWizard};

use super::test_harness::setup_wizard_harness;

fn invitation() -> Invitation {
    Invitation {
        email: "ada@acme.com".into(),
        organization: "Acme".into(),
    }
}

fn fill_personal_info(wizard: &mut OnboardingWizard) {
    wizard.set_personal_field(PersonalField::FirstName, "Ada");
    wizard.set_personal_field(PersonalField::LastName, "Lovelace");
    wizard.set_personal_field(PersonalField::Role, "Engineer");
    wizard.set_personal_field(PersonalField::Password, "12345678");
}

fn fill_section(wizard: &mut OnboardingWizard, id: SectionId) {
    let schema = SectionSchema::of(id);
    for n in 1..=schema.total_questions() {
        let question_id = format!("{}{n}", id.as_str());
        match schema.answer_shape() {
            AnswerShape::KeyedScale => wizard
                .set_scale(id, question_id, ScaleValue::new(3).unwrap())
                .unwrap(),
            AnswerShape::OrderedList => wizard.set_choice(id, question_id, "A").unwrap(),
        }
    }
}

fn walk_to_goals(wizard: &mut OnboardingWizard) {
    fill_personal_info(wizard);
    wizard.next();
    for id in SectionId::ALL {
        fill_section(wizard, id);
        wizard.next();
    }
}

#[tokio::test(flavor = "current_thread")]
async fn personal_info_smoke_renders_form_and_invitation() {
    let mut harness = setup_wizard_harness(invitation(), None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Welcome to BBI Intelligence"), "missing intro in {html}");
    assert!(html.contains("Step 1 of 4"), "missing step counter in {html}");
    assert!(html.contains("First Name *"), "missing first name field in {html}");
    assert!(html.contains("ada@acme.com"), "missing invitation email in {html}");
    assert!(html.contains("Acme"), "missing invitation organization in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_smoke_renders_first_section() {
    let mut harness = setup_wizard_harness(
        invitation(),
        Some(Rc::new(|wizard: &mut OnboardingWizard| {
            fill_personal_info(wizard);
            wizard.next();
        })),
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Step 2 of 4"), "missing step counter in {html}");
    assert!(html.contains("Personality Assessment"), "missing section title in {html}");
    assert!(html.contains("Section"), "missing section counter in {html}");
    assert!(html.contains("1 of 5"), "missing section counter in {html}");
    assert!(
        html.contains("I can look at a painting for a long time."),
        "missing first hexaco statement in {html}"
    );
    assert!(html.contains("Question 0 of 24"), "missing question counter in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn goals_smoke_renders_catalog_and_counter() {
    let mut harness = setup_wizard_harness(
        invitation(),
        Some(Rc::new(|wizard: &mut OnboardingWizard| {
            walk_to_goals(wizard);
        })),
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Development Goals"), "missing title in {html}");
    assert!(html.contains("0 of 9"), "missing selection counter in {html}");
    assert!(html.contains("Communication Skills"), "missing goal card in {html}");
    assert!(html.contains("Technical Proficiency"), "missing goal card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn complete_smoke_renders_summary_and_submits_once() {
    let mut harness = setup_wizard_harness(
        invitation(),
        Some(Rc::new(|wizard: &mut OnboardingWizard| {
            walk_to_goals(wizard);
            wizard.next();
        })),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Onboarding Complete!"), "missing title in {html}");
    assert!(html.contains("Welcome to BBI Intelligence, Ada!"), "missing greeting in {html}");
    assert!(html.contains("78 / 78 questions (100%)"), "missing overall count in {html}");
    assert!(html.contains("HEXACO Personality"), "missing section row in {html}");
    assert_eq!(harness.sink.submissions(), 1, "submission should fire once");
}
