//! Procurement solutions page

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, FeatureCard, SectionHead, SplitSection};

#[component]
pub fn ProcurementSolutions() -> Element {
    rsx! {
        div { class: "container",
            header { class: "page-head",
                span { class: "eyebrow", "Procurement solutions" }
                h1 { class: "page-title", "One buying desk for every property" }
                p { class: "page-sub",
                    "From a single bistro to a twelve-property group: the same \
                     catalog, the same suppliers, one view of spend."
                }
            }

            SectionHead {
                kicker: Some("Built for operators".to_string()),
                title: "The problems we actually solve",
            }
            div { class: "feature-grid",
                FeatureCard {
                    icon: "\u{1F3E8}",
                    title: "Multi-property ordering",
                    text: "Group-level contracts with property-level deliveries. \
                           Head office sets the catalog, each site orders what \
                           it needs.",
                }
                FeatureCard {
                    icon: "\u{1F4B0}",
                    title: "Budget guardrails",
                    text: "Monthly budgets per category and property. Orders that \
                           would overshoot route to approval instead of failing \
                           silently.",
                }
                FeatureCard {
                    icon: "\u{1F9FE}",
                    title: "Invoice consolidation",
                    text: "One supplier, one weekly invoice, regardless of how \
                           many kitchens ordered. Your bookkeeper will notice.",
                }
                FeatureCard {
                    icon: "\u{1F50D}",
                    title: "Compliance on file",
                    text: "HACCP certificates, allergen sheets and insurance docs \
                           collected from suppliers and kept current for audits.",
                }
            }

            SplitSection {
                kicker: Some("Switching".to_string()),
                title: "Move over without a procurement freeze",
                text: "Import your current supplier list and price files. Your \
                       existing suppliers keep their terms; the marketplace \
                       fills the gaps.",
                points: vec![
                    "Supplier and price-file import".to_string(),
                    "Parallel running until you cut over".to_string(),
                    "Onboarding support for your suppliers".to_string(),
                ],
                art: "\u{1F4E6}",
                flip: true,
                action: Some(("Talk to us about switching".to_string(), Route::ContactUs {})),
            }

            CtaBand {
                title: "See it on your own numbers",
                sub: Some("Bring a recent invoice stack to the demo.".to_string()),
                action_label: "Book a demo",
                to: Route::BookDemo {},
            }
        }
    }
}
