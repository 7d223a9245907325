//! Contact us page
//!
//! Form plus the other ways to reach the team. Submissions become
//! `ContactMessage` leads; validation errors surface on the field that
//! caused them.

use dioxus::prelude::*;
use procura_core::{ContactMessage, Lead, ProcuraError};
use procura_ui::{Button, ButtonVariant, Input, SuccessDialog, TextArea};

use crate::context::use_lead_log;

#[component]
pub fn ContactUs() -> Element {
    let leads = use_lead_log();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| None::<ProcuraError>);
    let mut sent = use_signal(|| false);

    // Route the one validation error to the field it belongs to
    let name_error = match error() {
        Some(ProcuraError::EmptyField("full name")) => Some("Please tell us your name".to_string()),
        _ => None,
    };
    let email_error = match error() {
        Some(ProcuraError::InvalidEmail(_)) => Some("Enter a valid email address".to_string()),
        _ => None,
    };
    let message_error = match error() {
        Some(ProcuraError::EmptyField("message")) => Some("A message is required".to_string()),
        _ => None,
    };

    let submit = move |_| {
        match ContactMessage::new(&full_name(), &email(), &subject(), &message()) {
            Ok(lead) => match leads.record(Lead::Contact(lead)) {
                Ok(_) => {
                    error.set(None);
                    full_name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                    sent.set(true);
                }
                Err(e) => error.set(Some(e)),
            },
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        div { class: "form-page container",
            header { class: "page-head",
                span { class: "eyebrow", "Contact" }
                h1 { class: "page-title", "Talk to us" }
                p { class: "page-sub",
                    "Product questions, supplier verification, press. \
                     We usually reply within one working day."
                }
            }

            div { class: "form-grid wide",
                div { class: "form-card",
                    Input {
                        label: Some("Full name".to_string()),
                        placeholder: Some("Ana Melo".to_string()),
                        value: full_name(),
                        oninput: move |v: String| full_name.set(v),
                        error: name_error,
                    }
                    Input {
                        label: Some("Email".to_string()),
                        input_type: "email",
                        placeholder: Some("you@company.com".to_string()),
                        value: email(),
                        oninput: move |v: String| email.set(v),
                        error: email_error,
                    }
                    Input {
                        label: Some("Subject".to_string()),
                        hint: Some("optional".to_string()),
                        placeholder: Some("What is this about?".to_string()),
                        value: subject(),
                        oninput: move |v: String| subject.set(v),
                    }
                    TextArea {
                        label: Some("Message".to_string()),
                        placeholder: Some("Tell us what you need...".to_string()),
                        value: message(),
                        oninput: move |v: String| message.set(v),
                        rows: 6,
                    }
                    if let Some(err) = message_error {
                        span { class: "input-error-text", "{err}" }
                    }

                    div { class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: submit,
                            "Send message"
                        }
                    }
                }

                aside { class: "contact-channels",
                    div { class: "contact-channel",
                        span { class: "label", "Sales" }
                        span { "sales@procura.example" }
                    }
                    div { class: "contact-channel",
                        span { class: "label", "Support" }
                        span { "help@procura.example" }
                    }
                    div { class: "contact-channel",
                        span { class: "label", "Office" }
                        span { "Rua do Carmo 71, Lisbon" }
                    }
                    div { class: "contact-channel",
                        span { class: "label", "Phone" }
                        span { "+351 21 0000 000" }
                    }
                }
            }

            SuccessDialog {
                show: sent(),
                title: "Message sent",
                message: "Thanks for reaching out. A real inbox would pick this up; in this build your message went to the activity log.",
                on_action: move |_| sent.set(false),
            }
        }
    }
}
