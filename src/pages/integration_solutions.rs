//! Integration solutions page
//!
//! Marketing copy only; the connector names are illustrative.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, FaqItem, FeatureCard, LogoStrip, SectionHead};

#[component]
pub fn IntegrationSolutions() -> Element {
    rsx! {
        div { class: "container",
            header { class: "page-head",
                span { class: "eyebrow", "Integration solutions" }
                h1 { class: "page-title", "Procura fits the systems you already run" }
                p { class: "page-sub",
                    "Orders, invoices and stock levels flow to the tools your \
                     back office lives in. No re-keying, no export rituals."
                }
            }

            LogoStrip {
                names: vec![
                    "HotelSoft PMS".to_string(),
                    "ContaFacil".to_string(),
                    "StockSense".to_string(),
                    "MesaPoint POS".to_string(),
                    "PayLedger".to_string(),
                    "RotaPlan".to_string(),
                ],
            }

            SectionHead {
                kicker: Some("Connectors".to_string()),
                title: "Three flows, wired once",
            }
            div { class: "feature-grid",
                FeatureCard {
                    icon: "\u{1F9FE}",
                    title: "Accounting export",
                    text: "Approved invoices post to your ledger with cost \
                           centers mapped per property and category.",
                }
                FeatureCard {
                    icon: "\u{1F4E6}",
                    title: "Inventory sync",
                    text: "Deliveries update stock on receipt. Par levels drive \
                           reorder suggestions back into Procura.",
                }
                FeatureCard {
                    icon: "\u{1F6CE}",
                    title: "PMS occupancy feed",
                    text: "Forecasted occupancy shapes order quantities, so the \
                           kitchen buys for the house you'll actually have.",
                }
            }

            SectionHead {
                kicker: Some("Questions".to_string()),
                title: "Before you ask IT",
            }
            div { class: "faq-list",
                FaqItem {
                    question: "Is there an API?",
                    answer: "Yes, a documented REST API with webhooks for order \
                             and invoice events. Connectors above are built on \
                             the same API.",
                }
                FaqItem {
                    question: "Who builds the integration?",
                    answer: "Standard connectors are switched on from settings. \
                             Custom work is scoped with our team during \
                             onboarding.",
                }
                FaqItem {
                    question: "What about my legacy system?",
                    answer: "If it can read a CSV, it can talk to Procura. \
                             Scheduled file drops cover systems without APIs.",
                }
            }

            CtaBand {
                title: "Tell us what you run",
                sub: Some("We'll map the integration before you commit.".to_string()),
                action_label: "Contact us",
                to: Route::ContactUs {},
            }
        }
    }
}
