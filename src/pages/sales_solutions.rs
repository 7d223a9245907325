//! Sales solutions page

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, FeatureCard, SectionHead, SplitSection};

#[component]
pub fn SalesSolutions() -> Element {
    rsx! {
        div { class: "container",
            header { class: "page-head",
                span { class: "eyebrow", "Sales solutions" }
                h1 { class: "page-title", "Grow your book without growing your sales team" }
                p { class: "page-sub",
                    "Procura puts your catalog in front of buyers who are \
                     already purchasing your categories, in your region."
                }
            }

            SplitSection {
                kicker: Some("Demand, found".to_string()),
                title: "Buyers search, you appear",
                text: "When a hotel searches your category, verified suppliers \
                       with delivery coverage show first. No ad auctions, just \
                       fit.",
                points: vec![
                    "Ranked by fit and fulfilment record".to_string(),
                    "Coverage map keeps leads deliverable".to_string(),
                    "Verification badge on every listing".to_string(),
                ],
                art: "\u{1F4C8}",
            }

            SectionHead {
                kicker: Some("Tools".to_string()),
                title: "What your team gets",
            }
            div { class: "feature-grid",
                FeatureCard {
                    icon: "\u{1F4E5}",
                    title: "Matched RFQ inbox",
                    text: "Quote requests filtered to your categories and \
                           delivery area, with quantities and deadlines stated.",
                }
                FeatureCard {
                    icon: "\u{1F3F7}",
                    title: "Customer price lists",
                    text: "Negotiated prices per account, applied automatically \
                           at checkout. No more stale price sheets in inboxes.",
                }
                FeatureCard {
                    icon: "\u{1F514}",
                    title: "Reorder nudges",
                    text: "Buyers get restock reminders built from their own \
                           order cadence, with your lines pre-filled.",
                }
                FeatureCard {
                    icon: "\u{1F4CA}",
                    title: "Demand analytics",
                    text: "See which categories are growing in your region \
                           before you plan the next season's range.",
                }
            }

            CtaBand {
                title: "Put your catalog to work",
                action_label: "Become a seller",
                to: Route::BecomeASeller {},
            }
        }
    }
}
