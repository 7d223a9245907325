//! Site Footer Component
//!
//! Dark footer with link columns and the newsletter signup. Newsletter
//! submissions go through the shared lead log like every other form.

use dioxus::prelude::*;
use procura_core::{Lead, NewsletterSignup};

use crate::app::Route;
use crate::context::use_lead_log;

#[component]
pub fn SiteFooter() -> Element {
    let leads = use_lead_log();

    let mut email = use_signal(String::new);
    // (is_ok, message) for the line under the signup field
    let mut note = use_signal(|| None::<(bool, String)>);

    let subscribe = move |_| {
        let typed = email();
        match NewsletterSignup::new(&typed) {
            Ok(signup) => match leads.record(Lead::Newsletter(signup)) {
                Ok(_) => {
                    email.set(String::new());
                    note.set(Some((true, "You're on the list.".to_string())));
                }
                Err(e) => note.set(Some((false, e.to_string()))),
            },
            Err(e) => note.set(Some((false, e.to_string()))),
        }
    };

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-grid",
                div {
                    div { class: "footer-brand", "Procura." }
                    p { class: "footer-tagline",
                        "The marketplace where hospitality teams source smarter and suppliers sell more."
                    }
                    div { class: "footer-newsletter",
                        input {
                            class: "input-field",
                            r#type: "email",
                            placeholder: "Work email",
                            value: "{email}",
                            oninput: move |e| {
                                email.set(e.value());
                                note.set(None);
                            },
                        }
                        button {
                            class: "btn-cta",
                            r#type: "button",
                            onclick: subscribe,
                            "Subscribe"
                        }
                    }
                    if let Some((ok, message)) = note() {
                        p { class: if ok { "footer-note ok" } else { "footer-note" }, "{message}" }
                    }
                }

                div { class: "footer-col",
                    h3 { class: "footer-heading", "Product" }
                    Link { to: Route::Marketplace {}, class: "footer-link", "Marketplace" }
                    Link { to: Route::SmartSourcingTools {}, class: "footer-link", "Smart sourcing tools" }
                    Link { to: Route::VendorsHub {}, class: "footer-link", "Vendors hub" }
                    Link { to: Route::Anita {}, class: "footer-link", "Anita AI" }
                    Link { to: Route::RfqCreation {}, class: "footer-link", "RFQ creation" }
                }

                div { class: "footer-col",
                    h3 { class: "footer-heading", "Company" }
                    Link { to: Route::AboutUs {}, class: "footer-link", "About us" }
                    Link { to: Route::Learn {}, class: "footer-link", "Learn" }
                    Link { to: Route::ContactUs {}, class: "footer-link", "Contact us" }
                    Link { to: Route::BookDemo {}, class: "footer-link", "Book a demo" }
                }

                div { class: "footer-col",
                    h3 { class: "footer-heading", "Get started" }
                    Link { to: Route::BecomeABuyer {}, class: "footer-link", "Become a buyer" }
                    Link { to: Route::BecomeASeller {}, class: "footer-link", "Become a seller" }
                    Link { to: Route::SellerPage {}, class: "footer-link", "For suppliers" }
                    Link { to: Route::Login {}, class: "footer-link", "Log in" }
                }
            }

            div { class: "footer-bottom",
                "\u{00A9} 2025 Procura. Sourcing made simple for hospitality."
            }
        }
    }
}
