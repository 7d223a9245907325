//! Anita page
//!
//! Marketing page for the procurement assistant. The chat panel is the
//! scripted preview from `AnitaChatPreview`; nothing here talks to a
//! real model.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{AnitaChatPreview, CtaBand, FeatureCard, SectionHead, TypingText};

#[component]
pub fn Anita() -> Element {
    rsx! {
        div { class: "container",
            section { class: "anita-hero",
                div { class: "anita-hero-copy",
                    span { class: "eyebrow", "Meet Anita" }
                    h1 { class: "page-title",
                        "Ask Anita to "
                        TypingText {
                            phrases: vec![
                                "draft an RFQ".to_string(),
                                "chase a late delivery".to_string(),
                                "compare supplier quotes".to_string(),
                                "check this week\u{2019}s prices".to_string(),
                            ],
                        }
                    }
                    p { class: "page-sub",
                        "Anita is the procurement assistant built into Procura. \
                         She knows your suppliers, your order history and your \
                         budgets, and she answers in plain language."
                    }
                }
                AnitaChatPreview {}
            }

            SectionHead {
                kicker: Some("What she handles".to_string()),
                title: "Busywork, off your plate",
                sub: Some(
                    "Anita works inside your account, so every answer is grounded \
                     in your actual orders and suppliers."
                        .to_string(),
                ),
            }
            div { class: "feature-grid",
                FeatureCard {
                    icon: "\u{1F4DD}",
                    title: "Drafts RFQs from a sentence",
                    text: "Tell her what you need and she writes the request, \
                           picks matching suppliers and sets a quote deadline.",
                }
                FeatureCard {
                    icon: "\u{1F4C9}",
                    title: "Watches your prices",
                    text: "She flags when a supplier drifts above market and \
                           suggests alternatives with comparable quality.",
                }
                FeatureCard {
                    icon: "\u{1F4E6}",
                    title: "Chases orders for you",
                    text: "Late delivery? Anita follows up with the supplier and \
                           reports back, so your team stays on service.",
                }
                FeatureCard {
                    icon: "\u{1F4CA}",
                    title: "Answers spend questions",
                    text: "From \u{201C}what did we spend on linen last month\u{201D} \
                           to category breakdowns across properties.",
                }
            }

            CtaBand {
                title: "See Anita on your own data",
                sub: Some("Demos run on a sandbox seeded with your categories.".to_string()),
                action_label: "Book a demo",
                to: Route::BookDemo {},
            }
        }
    }
}
