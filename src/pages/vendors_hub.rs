//! Vendors hub page
//!
//! Supplier-facing overview of selling on Procura.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, QuoteCard, SplitSection, StatBand};

#[component]
pub fn VendorsHub() -> Element {
    rsx! {
        div { class: "container",
            header { class: "page-head",
                span { class: "eyebrow", "Vendors hub" }
                h1 { class: "page-title", "Sell to hospitality without the cold calls" }
                p { class: "page-sub",
                    "Hotels, restaurants and caterers come to Procura ready to \
                     buy. Your job is to quote well, not to find them."
                }
            }

            StatBand {
                stats: vec![
                    ("9,800".to_string(), "active buyer properties".to_string()),
                    ("\u{20AC}140M".to_string(), "annual demand on platform".to_string()),
                    ("31%".to_string(), "avg. seller revenue lift, year one".to_string()),
                    ("14 days".to_string(), "standard payment terms".to_string()),
                ],
            }

            SplitSection {
                kicker: Some("Your storefront".to_string()),
                title: "A catalog buyers can actually order from",
                text: "List products once with real pack sizes, minimums and \
                       delivery areas. Buyers reorder in two clicks; you see \
                       demand before it becomes an email.",
                points: vec![
                    "Bulk import from spreadsheet".to_string(),
                    "Per-customer price lists".to_string(),
                    "Availability windows for seasonal lines".to_string(),
                ],
                art: "\u{1F3EA}",
            }

            SplitSection {
                kicker: Some("RFQ inbox".to_string()),
                title: "Quote requests matched to what you sell",
                text: "Requests reach you only when the category and delivery \
                       region fit. No fishing expeditions, no irrelevant \
                       tenders.",
                points: vec![
                    "Category and region matching".to_string(),
                    "Deadlines and quantities up front".to_string(),
                    "One form to quote, no PDFs".to_string(),
                ],
                art: "\u{1F4E5}",
                flip: true,
            }

            SplitSection {
                kicker: Some("Getting paid".to_string()),
                title: "Terms agreed before the first delivery",
                text: "Payment terms are part of the order, not a negotiation \
                       after the fact. Overdue balances are visible to both \
                       sides.",
                points: vec![
                    "Standard 14-day terms by default".to_string(),
                    "Invoice status shared with the buyer".to_string(),
                    "Statements exportable to your accounting".to_string(),
                ],
                art: "\u{1F4B6}",
            }

            QuoteCard {
                quote: "We replaced three salespeople's worth of prospecting with \
                        the RFQ inbox. The orders come to us now.",
                attrib: "Rui Cabral, Atlas Provisions",
            }

            CtaBand {
                title: "Open your storefront",
                sub: Some("Seller onboarding takes about ten minutes.".to_string()),
                action_label: "Become a seller",
                to: Route::BecomeASeller {},
            }
        }
    }
}
