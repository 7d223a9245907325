//! Seller dashboard preview
//!
//! Mirror of the buyer dashboard for the supply side, sampled per visit.

use dioxus::prelude::*;
use procura_core::demo::{seller_activity, seller_snapshot};
use procura_ui::{format_eur, StatCard};

use crate::app::Route;

#[component]
pub fn SellerDashboard() -> Element {
    let snapshot = use_signal(seller_snapshot);
    let activity = use_signal(seller_activity);
    let s = snapshot();

    rsx! {
        div { class: "dash-page container",
            div { class: "dash-banner",
                span {
                    "You're looking at sample data. "
                    Link { to: Route::BookDemo {}, "Book a demo" }
                    " to see your own order book here."
                }
            }

            header { class: "dash-head",
                h1 { class: "dash-title", "Sales overview" }
                p { class: "muted", "Atlas Provisions \u{00B7} Iberia coverage" }
            }

            div { class: "stat-grid",
                StatCard {
                    label: "New RFQs",
                    value: "{s.new_rfqs}",
                    detail: Some("matching your categories".to_string()),
                }
                StatCard {
                    label: "Quotes awaiting reply",
                    value: "{s.quotes_awaiting_reply}",
                }
                StatCard {
                    label: "Orders to fulfil",
                    value: "{s.orders_to_fulfil}",
                    detail: Some("this week".to_string()),
                }
                StatCard {
                    label: "Active buyers",
                    value: "{s.active_buyers}",
                }
                StatCard {
                    label: "Revenue this month",
                    value: format_eur(s.monthly_revenue_eur),
                }
                StatCard {
                    label: "On-time in-full",
                    value: "{s.otif_percent}%",
                    detail: Some("rolling 30 days".to_string()),
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
                Link { class: "btn-primary", to: Route::SellerPage {}, "See your storefront" }
                Link { class: "btn-outline", to: Route::VendorsHub {}, "Vendor resources" }
            }
        }
    }
}
