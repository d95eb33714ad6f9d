use dioxus::prelude::*;

use onboard_core::model::{FieldErrors, PersonalField};
use services::OnboardingWizard;

/// Step 1: the profile form plus the read-only invitation panel.
#[component]
pub fn PersonalInfoStep(wizard: Signal<OnboardingWizard>) -> Element {
    // Errors appear when Continue is pressed and clear per field on edit.
    let mut errors = use_signal(FieldErrors::default);

    let (first_name, last_name, role, password, email, organization) = {
        let guard = wizard.read();
        let info = guard.personal_info();
        (
            info.first_name.clone(),
            info.last_name.clone(),
            info.role.clone(),
            info.password.clone(),
            info.email.clone(),
            info.organization.clone(),
        )
    };

    let edit_field = use_callback(move |(field, value): (PersonalField, String)| {
        wizard.write().set_personal_field(field, value);
        errors.write().clear(field);
    });

    let on_continue = use_callback(move |()| {
        let outcome = wizard.read().validate_personal_info();
        if outcome.is_valid() {
            wizard.write().next();
        } else {
            errors.set(outcome);
        }
    });

    let email_display = if email.is_empty() {
        "user@company.com".to_string()
    } else {
        email
    };
    let organization_display = if organization.is_empty() {
        "Your Company".to_string()
    } else {
        organization
    };
    let errors_read = errors.read();

    rsx! {
        div { class: "card card--narrow",
            header { class: "card__intro",
                h1 { "Welcome to BBI Intelligence" }
                p { "Let's start by getting to know you better" }
            }

            div { class: "form",
                FormField {
                    label: "First Name *",
                    placeholder: "Enter your first name",
                    input_type: "text",
                    value: first_name,
                    error: errors_read.message(PersonalField::FirstName),
                    oninput: move |evt: FormEvent| {
                        edit_field.call((PersonalField::FirstName, evt.value()));
                    },
                }
                FormField {
                    label: "Last Name *",
                    placeholder: "Enter your last name",
                    input_type: "text",
                    value: last_name,
                    error: errors_read.message(PersonalField::LastName),
                    oninput: move |evt: FormEvent| {
                        edit_field.call((PersonalField::LastName, evt.value()));
                    },
                }
                FormField {
                    label: "Role / Job Title *",
                    placeholder: "e.g. Software Engineer, Product Manager",
                    input_type: "text",
                    value: role,
                    error: errors_read.message(PersonalField::Role),
                    oninput: move |evt: FormEvent| {
                        edit_field.call((PersonalField::Role, evt.value()));
                    },
                }
                FormField {
                    label: "Create Password *",
                    placeholder: "Minimum 8 characters",
                    input_type: "password",
                    value: password,
                    error: errors_read.message(PersonalField::Password),
                    oninput: move |evt: FormEvent| {
                        edit_field.call((PersonalField::Password, evt.value()));
                    },
                }

                div { class: "invitation-panel",
                    h3 { "Information from Invitation" }
                    div { class: "invitation-panel__grid",
                        div {
                            span { class: "invitation-panel__label", "Email Address" }
                            span { class: "invitation-panel__value", "{email_display}" }
                        }
                        div {
                            span { class: "invitation-panel__label", "Organization" }
                            span { class: "invitation-panel__value", "{organization_display}" }
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary btn-wide",
                id: "personal-info-continue",
                r#type: "button",
                onclick: move |_| on_continue.call(()),
                "Continue to Assessment"
            }
        }
    }
}

#[component]
fn FormField(
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    value: String,
    error: Option<&'static str>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "form-field__label", "{label}" }
            input {
                class: if error.is_some() { "form-field__input form-field__input--invalid" } else { "form-field__input" },
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = error {
                p { class: "form-field__error", "{message}" }
            }
        }
    }
}
