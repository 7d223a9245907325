//! Marketplace preview page
//!
//! Teaser for the supplier marketplace. The category switcher filters
//! a fixed showcase list locally; there is no live catalog behind it.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, SectionHead, SplitSection, StatBand};

/// Showcase tiles per category tab: (tab label, [(emoji, supplier, line)])
const SHOWCASE: &[(&str, &[(&str, &str, &str)])] = &[
    (
        "Food & Beverage",
        &[
            ("\u{1F35E}", "Forno do Bairro", "Artisan bakery, daily morning drops"),
            ("\u{1F41F}", "Atlantico Pescados", "Day-boat fish, coastal delivery"),
            ("\u{1F9C0}", "Queijaria Serra", "Farmhouse cheeses and charcuterie"),
            ("\u{2615}", "Tosta Roasters", "Specialty coffee with machine service"),
        ],
    ),
    (
        "Housekeeping",
        &[
            ("\u{1F6CF}", "Linho Fino", "Hotel linen, rental or purchase"),
            ("\u{1F9F4}", "ClaraChem", "Eco-certified cleaning chemicals"),
            ("\u{1F9FA}", "Amenity Works", "Guest amenities, white-label lines"),
            ("\u{1F6BF}", "Banho & Co", "Towelling and bathrobes, bulk pricing"),
        ],
    ),
    (
        "Kitchen & Equipment",
        &[
            ("\u{1F373}", "Inox Norte", "Stainless kitchen lines, install included"),
            ("\u{2744}", "FrioTec", "Refrigeration with maintenance plans"),
            ("\u{1F52A}", "Mesa Pro", "Smallwares and tabletop programs"),
            ("\u{1F9CA}", "Gelo Rapido", "Ice machines, lease options"),
        ],
    ),
    (
        "Services",
        &[
            ("\u{1F527}", "FixHotel", "Planned maintenance for properties"),
            ("\u{1F33F}", "Verde Interior", "Plantscaping and green walls"),
            ("\u{1F3B5}", "SomAtmos", "Licensed background music"),
            ("\u{1F9FA}", "Lavanda Pro", "Outsourced laundry with SLA pickup"),
        ],
    ),
];

#[component]
pub fn Marketplace() -> Element {
    let mut tab = use_signal(|| 0usize);

    let (_, tiles) = SHOWCASE[tab()];

    rsx! {
        div { class: "container",
            header { class: "page-head",
                span { class: "eyebrow", "Marketplace" }
                h1 { class: "page-title", "Every supplier your property needs, pre-vetted" }
                p { class: "page-sub",
                    "Browse verified suppliers across food, housekeeping, equipment \
                     and services. Full catalog access opens with a buyer account."
                }
            }

            StatBand {
                stats: vec![
                    ("4,200+".to_string(), "verified suppliers".to_string()),
                    ("38k".to_string(), "listed products".to_string()),
                    ("97%".to_string(), "quote response rate".to_string()),
                    ("24h".to_string(), "median quote turnaround".to_string()),
                ],
            }

            div { class: "market-tabs",
                for (i, (label, _)) in SHOWCASE.iter().enumerate() {
                    button {
                        class: if tab() == i { "market-tab active" } else { "market-tab" },
                        onclick: move |_| tab.set(i),
                        "{label}"
                    }
                }
            }

            div { class: "market-grid",
                for (emoji, name, line) in tiles.iter() {
                    div { class: "market-tile",
                        div { class: "market-emoji", "{emoji}" }
                        h3 { class: "market-name", "{name}" }
                        p { class: "market-line", "{line}" }
                        span { class: "market-verified", "\u{2713} Verified" }
                    }
                }
            }

            SectionHead {
                kicker: Some("Beyond the catalog".to_string()),
                title: "Can\u{2019}t find it? Put it out to quote",
            }
            SplitSection {
                title: "RFQs reach the right suppliers automatically",
                text: "Describe what you need once. We match your request to \
                       suppliers who actually serve your region and category, \
                       and quotes come back side by side.",
                points: vec![
                    "No phone tag, no spreadsheet collation".to_string(),
                    "Compare like-for-like on price and lead time".to_string(),
                    "Award in one click, reorder in two".to_string(),
                ],
                art: "\u{1F4E8}",
                action: Some(("See how RFQs work".to_string(), Route::RfqCreation {})),
            }

            CtaBand {
                title: "Unlock the full marketplace",
                sub: Some("Buyer accounts are free for hospitality operators.".to_string()),
                action_label: "Become a buyer",
                to: Route::BecomeABuyer {},
            }
        }
    }
}
