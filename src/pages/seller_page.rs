//! Seller page preview
//!
//! Shows prospective suppliers what their storefront looks like to
//! buyers, using a worked example.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, SplitSection};

/// Example catalog lines for the preview storefront
const SAMPLE_LINES: &[(&str, &str, &str)] = &[
    ("Arborio rice 5kg", "\u{20AC}12.40", "48h lead"),
    ("San Marzano tomatoes 2.5kg", "\u{20AC}8.90", "48h lead"),
    ("Extra virgin olive oil 5L", "\u{20AC}34.00", "24h lead"),
    ("Tipo 00 flour 25kg", "\u{20AC}19.80", "48h lead"),
    ("Guanciale, whole", "\u{20AC}16.20/kg", "72h lead"),
    ("Parmigiano Reggiano 24m", "\u{20AC}21.50/kg", "48h lead"),
];

#[component]
pub fn SellerPage() -> Element {
    rsx! {
        div { class: "container",
            header { class: "page-head",
                span { class: "eyebrow", "Seller page" }
                h1 { class: "page-title", "Your storefront, the way buyers see it" }
                p { class: "page-sub",
                    "Every seller gets a page like this one. Catalog, coverage, \
                     terms and reviews in one place buyers can order from."
                }
            }

            // Worked example of a live storefront
            div { class: "storefront-preview",
                div { class: "storefront-cover", "\u{1F6FB}" }
                div { class: "storefront-head",
                    div {
                        h2 { class: "storefront-name", "Atlas Provisions" }
                        p { class: "storefront-meta",
                            "Dry goods \u{00B7} Iberia \u{00B7} 14-day terms"
                        }
                    }
                    span { class: "market-verified", "\u{2713} Verified" }
                }
                p { class: "storefront-blurb",
                    "Italian dry goods importer supplying restaurants and hotel \
                     kitchens across Portugal and Spain since 2011. Weekly \
                     deliveries, no minimum on repeat orders."
                }
                div { class: "storefront-lines",
                    for (name, price, lead) in SAMPLE_LINES.iter() {
                        div { class: "storefront-line",
                            span { class: "line-name", "{name}" }
                            span { class: "line-price", "{price}" }
                            span { class: "line-lead", "{lead}" }
                        }
                    }
                }
                p { class: "storefront-note", "Example storefront, not a live listing" }
            }

            SplitSection {
                kicker: Some("Why it works".to_string()),
                title: "A storefront that sells while you sleep",
                text: "Buyers find you by category and region, check your terms \
                       and order without a phone call. Reviews and fulfilment \
                       stats build the trust a PDF catalog never could.",
                points: vec![
                    "Orderable catalog, not a brochure".to_string(),
                    "Fulfilment record shown to buyers".to_string(),
                    "Updated prices propagate instantly".to_string(),
                ],
                art: "\u{1F31F}",
                flip: true,
            }

            CtaBand {
                title: "Claim your page",
                action_label: "Become a seller",
                to: Route::BecomeASeller {},
            }
        }
    }
}
