//! Book a demo page
//!
//! The primary conversion form. Valid submissions become `DemoRequest`
//! leads and resolve to the success dialog; nothing is sent anywhere.

use dioxus::prelude::*;
use procura_core::{DemoRequest, Lead, ProcuraError};
use procura_ui::{Button, ButtonVariant, Input, SuccessDialog, TextArea};

use crate::context::use_lead_log;

#[component]
pub fn BookDemo() -> Element {
    let leads = use_lead_log();

    let mut full_name = use_signal(String::new);
    let mut work_email = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut interest = use_signal(String::new);
    let mut error = use_signal(|| None::<ProcuraError>);
    let mut booked = use_signal(|| false);

    let name_error = match error() {
        Some(ProcuraError::EmptyField("full name")) => Some("Please tell us your name".to_string()),
        _ => None,
    };
    let email_error = match error() {
        Some(ProcuraError::InvalidEmail(_)) => Some("Enter a valid work email".to_string()),
        _ => None,
    };
    let company_error = match error() {
        Some(ProcuraError::EmptyField("company")) => Some("Company name is required".to_string()),
        _ => None,
    };

    let submit = move |_| {
        match DemoRequest::new(&full_name(), &work_email(), &company(), &phone(), &interest()) {
            Ok(lead) => match leads.record(Lead::Demo(lead)) {
                Ok(_) => {
                    error.set(None);
                    full_name.set(String::new());
                    work_email.set(String::new());
                    company.set(String::new());
                    phone.set(String::new());
                    interest.set(String::new());
                    booked.set(true);
                }
                Err(e) => error.set(Some(e)),
            },
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        div { class: "form-page container",
            header { class: "page-head",
                span { class: "eyebrow", "Book a demo" }
                h1 { class: "page-title", "See Procura in thirty minutes" }
                p { class: "page-sub",
                    "A walkthrough on your categories and your region, \
                     with someone who has run a purchasing desk."
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
                        label: Some("Work email".to_string()),
                        input_type: "email",
                        placeholder: Some("ana@hotelmar.com".to_string()),
                        value: work_email(),
                        oninput: move |v: String| work_email.set(v),
                        error: email_error,
                    }
                    Input {
                        label: Some("Company".to_string()),
                        placeholder: Some("Hotel Mar Azul".to_string()),
                        value: company(),
                        oninput: move |v: String| company.set(v),
                        error: company_error,
                    }
                    Input {
                        label: Some("Phone".to_string()),
                        hint: Some("optional".to_string()),
                        input_type: "tel",
                        placeholder: Some("+351 ...".to_string()),
                        value: phone(),
                        oninput: move |v: String| phone.set(v),
                    }
                    TextArea {
                        label: Some("What would you like to see?".to_string()),
                        hint: Some("optional".to_string()),
                        placeholder: Some("e.g. RFQs for F&B across three properties".to_string()),
                        value: interest(),
                        oninput: move |v: String| interest.set(v),
                        rows: 4,
                    }

                    div { class: "form-actions",
                        Button {
                            variant: ButtonVariant::Cta,
                            onclick: submit,
                            "Request my demo"
                        }
                    }
                }

                aside { class: "contact-channels",
                    div { class: "contact-channel",
                        span { class: "label", "What to expect" }
                        span { "A live tour of ordering, RFQs and the supplier network on sample data from your segment." }
                    }
                    div { class: "contact-channel",
                        span { class: "label", "Who it's for" }
                        span { "Owners, F&B managers and purchasing leads at hotels, restaurants and caterers." }
                    }
                    div { class: "contact-channel",
                        span { class: "label", "No prep needed" }
                        span { "Bring a recent supplier invoice if you want the price comparison to sting." }
                    }
                }
            }

            SuccessDialog {
                show: booked(),
                title: "Request received",
                message: "Thanks! Our team will reach out within one business day to schedule your demo.",
                on_action: move |_| booked.set(false),
            }
        }
    }
}
