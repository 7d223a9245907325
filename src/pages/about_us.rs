//! About us page

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, FeatureCard, SectionHead, SplitSection};

#[component]
pub fn AboutUs() -> Element {
    rsx! {
        section { class: "section",
            div { class: "container",
                header { class: "page-head",
                    span { class: "eyebrow", "About us" }
                    h1 { class: "page-title", "Built by people who carried the clipboards" }
                    p { class: "page-sub",
                        "Procura started in the receiving docks and back offices of the \
                         hotels we ran. We built the tool we kept wishing existed."
                    }
                }
            }
        }

        section { class: "section section-alt",
            div { class: "container",
                SplitSection {
                    kicker: Some("Why we exist".to_string()),
                    title: "Hospitality buying is stuck in 2004",
                    text: "A mid-sized hotel juggles thirty suppliers across phone, fax, \
                           WhatsApp and four ordering portals. Prices drift, invoices \
                           disagree with delivery notes, and nobody has the full picture. \
                           We think the fix is one honest marketplace, not another ERP module.",
                    points: vec![
                        "Founded in Lisbon in 2023 by two hoteliers and an engineer".to_string(),
                        "Live with buyers and sellers across Portugal and Spain".to_string(),
                        "Backed by operators, not just investors".to_string(),
                    ],
                    art: "\u{1F4CB}",
                }
            }
        }

        section { class: "section",
            div { class: "container",
                SectionHead {
                    kicker: Some("How we work".to_string()),
                    title: "Three things we refuse to compromise on",
                }
                div { class: "feature-grid",
                    FeatureCard {
                        icon: "\u{2696}",
                        title: "Neutral ground",
                        text: "We never take margin on the goods. Suppliers compete on price and service, and buyers see the same numbers we do.",
                    }
                    FeatureCard {
                        icon: "\u{1F50D}",
                        title: "Verified, always",
                        text: "Licensing, food safety and insurance checks before a seller can quote. Re-checked yearly, not once at signup.",
                    }
                    FeatureCard {
                        icon: "\u{1F91D}",
                        title: "Operator first",
                        text: "Every feature ships after a week in a working kitchen. If it slows down a Tuesday delivery, it goes back.",
                    }
                }
            }
        }

        section { class: "section section-alt",
            div { class: "container",
                CtaBand {
                    title: "Talk to the people who built it",
                    sub: Some("Questions, feedback, partnership ideas. We answer.".to_string()),
                    action_label: "Contact us",
                    to: Route::ContactUs {},
                }
            }
        }
    }
}
