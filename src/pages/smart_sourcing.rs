//! Smart sourcing tools page

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, FaqItem, SectionHead, SplitSection};

#[component]
pub fn SmartSourcingTools() -> Element {
    rsx! {
        div { class: "container",
            header { class: "page-head",
                span { class: "eyebrow", "Smart sourcing tools" }
                h1 { class: "page-title", "Sourcing that runs itself" }
                p { class: "page-sub",
                    "Guided requests, side-by-side quotes and approval flows \
                     that keep purchasing moving without the chase."
                }
            }

            SplitSection {
                kicker: Some("Guided RFQs".to_string()),
                title: "From need to request in two minutes",
                text: "Templates for the categories hospitality actually buys. \
                       Specify quantities, delivery windows and quality notes \
                       once; we route the request to matching suppliers.",
                points: vec![
                    "Category templates with sensible defaults".to_string(),
                    "Automatic supplier matching by region".to_string(),
                    "Quote deadlines suppliers actually see".to_string(),
                ],
                art: "\u{1F4CB}",
            }

            SplitSection {
                kicker: Some("Quote comparison".to_string()),
                title: "Every quote, one table",
                text: "Quotes land normalized: unit prices, lead times and \
                       minimums aligned so the comparison is honest. Award the \
                       line or the lot, your call.",
                points: vec![
                    "Like-for-like unit normalization".to_string(),
                    "Split awards across suppliers".to_string(),
                    "History kept for the next negotiation".to_string(),
                ],
                art: "\u{2696}",
                flip: true,
            }

            SplitSection {
                kicker: Some("Approvals".to_string()),
                title: "Spend control without bottlenecks",
                text: "Thresholds route orders to the right approver. Small \
                       reorders flow straight through; the big calls get a \
                       second pair of eyes.",
                points: vec![
                    "Per-property and per-category thresholds".to_string(),
                    "One-tap approve from email".to_string(),
                    "Full audit trail on every order".to_string(),
                ],
                art: "\u{2705}",
            }

            SectionHead {
                kicker: Some("Questions".to_string()),
                title: "Frequently asked",
            }
            div { class: "faq-list",
                FaqItem {
                    question: "Do suppliers pay to receive my RFQs?",
                    answer: "No. Suppliers respond to requests for free; there is \
                             no pay-to-quote mechanic that would bias who answers.",
                }
                FaqItem {
                    question: "Can I keep my current suppliers?",
                    answer: "Yes. Invite them during onboarding and they quote \
                             alongside marketplace suppliers in the same view.",
                }
                FaqItem {
                    question: "How long until quotes come back?",
                    answer: "You set the deadline per request. Across the \
                             marketplace, the median first quote lands within a \
                             day.",
                }
            }

            CtaBand {
                title: "Put sourcing on rails",
                action_label: "Book a demo",
                to: Route::BookDemo {},
            }
        }
    }
}
