//! Buyer dashboard preview
//!
//! App-surface page shown after the login and onboarding stubs. All
//! figures are sampled once per visit; the banner says so up front.

use dioxus::prelude::*;
use procura_core::demo::{buyer_activity, buyer_snapshot};
use procura_ui::{format_eur, StatCard};

use crate::app::Route;

#[component]
pub fn BuyerDashboard() -> Element {
    let snapshot = use_signal(buyer_snapshot);
    let activity = use_signal(buyer_activity);
    let s = snapshot();

    rsx! {
        div { class: "dash-page container",
            div { class: "dash-banner",
                span {
                    "You're looking at sample data. "
                    Link { to: Route::BookDemo {}, "Book a demo" }
                    " to see your own numbers here."
                }
            }

            header { class: "dash-head",
                h1 { class: "dash-title", "Purchasing overview" }
                p { class: "muted", "Hotel Mar Azul \u{00B7} all properties" }
            }

            div { class: "stat-grid",
                StatCard {
                    label: "Open orders",
                    value: "{s.open_orders}",
                    detail: Some("across all departments".to_string()),
                }
                StatCard {
                    label: "Pending deliveries",
                    value: "{s.pending_deliveries}",
                    detail: Some("next 48 hours".to_string()),
                }
                StatCard {
                    label: "Open RFQs",
                    value: "{s.open_rfqs}",
                    detail: Some("quotes coming in".to_string()),
                }
                StatCard {
                    label: "Active suppliers",
                    value: "{s.active_suppliers}",
                }
                StatCard {
                    label: "Spend this month",
                    value: format_eur(s.monthly_spend_eur),
                }
                StatCard {
                    label: "Saved vs list",
                    value: "{s.savings_percent}%",
                    detail: Some("on contracted items".to_string()),
                }
            }

            div { class: "activity-card",
                h2 { class: "section-title", "Latest activity" }
                for item in activity() {
                    div { class: "activity-item",
                        div {
                            span { class: "activity-label", "{item.label}" }
                            span { class: "activity-detail", "{item.detail}" }
                        }
                        span { class: "activity-time", "{item.minutes_ago}m ago" }
                    }
                }
            }

            div { class: "form-actions",
                Link { class: "btn-primary", to: Route::RfqCreation {}, "Draft an RFQ" }
                Link { class: "btn-outline", to: Route::Marketplace {}, "Browse the marketplace" }
            }
        }
    }
}
