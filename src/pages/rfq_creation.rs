//! RFQ creation page
//!
//! Explains the request-for-quotation flow with a worked example. The
//! flow itself lives behind a buyer account; this page is the pitch.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, FaqItem, SectionHead};

const STEPS: &[(&str, &str)] = &[
    (
        "Describe what you need",
        "Pick a category template, set quantities, delivery windows and any \
         quality notes. Two minutes, no procurement jargon required.",
    ),
    (
        "We match suppliers",
        "Your request goes only to verified suppliers covering your region \
         and category. They see quantities and deadlines up front.",
    ),
    (
        "Quotes come back aligned",
        "Unit prices, minimums and lead times land in one table. No PDF \
         archaeology, no unit-conversion spreadsheets.",
    ),
    (
        "Award and reorder",
        "Award the whole lot or split by line. Winning quotes become \
         standing prices you can reorder against all season.",
    ),
];

#[component]
pub fn RfqCreation() -> Element {
    rsx! {
        div { class: "container",
            header { class: "page-head",
                span { class: "eyebrow", "RFQ creation" }
                h1 { class: "page-title", "Competitive quotes without the chase" }
                p { class: "page-sub",
                    "A request for quotation on Procura is a form, not a \
                     project. Here is the whole flow."
                }
            }

            ol { class: "rfq-steps",
                for (i, (title, text)) in STEPS.iter().enumerate() {
                    {
                        let num = i + 1;
                        rsx! {
                            li { class: "rfq-step",
                                span { class: "rfq-step-num", "{num}" }
                                div {
                                    h3 { class: "rfq-step-title", "{title}" }
                                    p { class: "rfq-step-text", "{text}" }
                                }
                            }
                        }
                    }
                }
            }

            // Worked example of a request as suppliers receive it
            div { class: "rfq-example",
                span { class: "eyebrow", "Example request" }
                h3 { class: "rfq-example-title", "Breakfast pastries, weekly standing order" }
                div { class: "rfq-example-grid",
                    div {
                        span { class: "rfq-example-label", "Quantities" }
                        p { "240 croissants, 180 pastéis de nata per week" }
                    }
                    div {
                        span { class: "rfq-example-label", "Delivery" }
                        p { "3 properties, Lisbon, before 06:30 daily" }
                    }
                    div {
                        span { class: "rfq-example-label", "Quotes by" }
                        p { "Friday 17:00" }
                    }
                    div {
                        span { class: "rfq-example-label", "Notes" }
                        p { "Butter-only laminates, delivery in reusable crates" }
                    }
                }
            }

            SectionHead {
                kicker: Some("Questions".to_string()),
                title: "Before your first request",
            }
            div { class: "faq-list",
                FaqItem {
                    question: "Am I committed once quotes arrive?",
                    answer: "No. A request carries no obligation; you award it, \
                             extend the deadline or let it lapse.",
                }
                FaqItem {
                    question: "Can my current supplier quote too?",
                    answer: "Yes. Invite them from the request screen and their \
                             quote lands in the same comparison table.",
                }
            }

            CtaBand {
                title: "Send your first RFQ today",
                sub: Some("Buyer accounts are free; the first request takes minutes.".to_string()),
                action_label: "Become a buyer",
                to: Route::BecomeABuyer {},
            }
        }
    }
}
