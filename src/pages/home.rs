//! Home page
//!
//! The main landing surface: hero with the rotating headline, the
//! product story told in sections, and the two conversion paths
//! (book a demo, start onboarding).

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CtaBand, FeatureCard, LogoStrip, QuoteCard, SectionHead, SplitSection, TypingText};

#[component]
pub fn Home() -> Element {
    rsx! {
        // Hero
        section { class: "hero",
            div { class: "container",
                span { class: "hero-badge", "B2B marketplace for hospitality" }
                h1 { class: "hero-title",
                    "One place to source "
                    span { class: "accent",
                        TypingText {
                            phrases: vec![
                                "fresh produce".to_string(),
                                "linen and amenities".to_string(),
                                "kitchen equipment".to_string(),
                                "cleaning supplies".to_string(),
                                "everything your property needs".to_string(),
                            ],
                        }
                    }
                }
                p { class: "hero-sub",
                    "Procura connects hotels, restaurants and caterers with vetted \
                     suppliers. Compare quotes, consolidate orders and keep every \
                     purchase in one ledger instead of forty inboxes."
                }
                div { class: "hero-actions",
                    Link { class: "btn-cta", to: Route::BookDemo {}, "Book a demo" }
                    Link { class: "btn-outline", to: Route::Marketplace {}, "Explore the marketplace" }
                }
            }
        }

        section { class: "section",
            div { class: "container",
                LogoStrip {
                    names: vec![
                        "Hotel Miramar".to_string(),
                        "Casa Branca Group".to_string(),
                        "The Anchor Inn".to_string(),
                        "Osteria Lumen".to_string(),
                        "Atlas Catering".to_string(),
                        "Parkside Collection".to_string(),
                    ],
                }
            }
        }

        // What the platform does
        section { class: "section section-alt",
            div { class: "container",
                SectionHead {
                    kicker: Some("The platform".to_string()),
                    title: "Everything sourcing, nothing else",
                    sub: Some("Four jobs, done properly, instead of a suite you never open.".to_string()),
                }
                div { class: "feature-grid cols-4",
                    FeatureCard {
                        icon: "\u{1F4E6}",
                        title: "Consolidated ordering",
                        text: "Bundle every department's needs into one weekly order per supplier. Fewer deliveries, fewer invoices, better prices.",
                    }
                    FeatureCard {
                        icon: "\u{1F4C4}",
                        title: "RFQs and quotes",
                        text: "Describe what you need once and collect comparable quotes from the network, side by side.",
                    }
                    FeatureCard {
                        icon: "\u{2705}",
                        title: "Vetted suppliers",
                        text: "Every seller is verified for licensing, food safety and delivery coverage before they can quote.",
                    }
                    FeatureCard {
                        icon: "\u{1F4C8}",
                        title: "Spend visibility",
                        text: "Live view of spend by category, property and supplier. Price drift surfaces before the quarter closes.",
                    }
                }
            }
        }

        // Buyer story
        section { class: "section",
            div { class: "container",
                SplitSection {
                    kicker: Some("For buyers".to_string()),
                    title: "Run procurement, not paperwork",
                    text: "Set up your properties once and Procura keeps the catalogue, \
                           the approved supplier list and the order history in one place. \
                           Your chefs order against contracted prices; you see everything.",
                    points: vec![
                        "Onboard your team in minutes, not weeks".to_string(),
                        "Compare supplier quotes line by line".to_string(),
                        "Standing orders for the staples, RFQs for the rest".to_string(),
                    ],
                    art: "\u{1F3E8}",
                    action: Some(("Become a buyer".to_string(), Route::BecomeABuyer {})),
                }
            }
        }

        // Seller story
        section { class: "section section-alt",
            div { class: "container",
                SplitSection {
                    kicker: Some("For sellers".to_string()),
                    title: "Your storefront for the whole trade",
                    text: "List once and reach every hospitality buyer in your delivery \
                           area. Quote RFQs that match what you actually stock, and keep \
                           repeat customers on standing orders.",
                    points: vec![
                        "Qualified leads instead of cold calls".to_string(),
                        "Quote requests filtered to your categories".to_string(),
                        "Payment terms agreed up front".to_string(),
                    ],
                    art: "\u{1F69A}",
                    flip: true,
                    action: Some(("Become a seller".to_string(), Route::BecomeASeller {})),
                }
            }
        }

        // Anita teaser
        section { class: "section",
            div { class: "container",
                SplitSection {
                    kicker: Some("Meet Anita".to_string()),
                    title: "Sourcing help that reads your order book",
                    text: "Anita is Procura's sourcing assistant. Ask for suppliers, \
                           price checks or a draft RFQ in plain language and she works \
                           from your actual order history.",
                    points: vec![
                        "\"Find a fish supplier that delivers on Sundays\"".to_string(),
                        "\"Why did our olive oil spend jump last month?\"".to_string(),
                    ],
                    art: "\u{1F4AC}",
                    action: Some(("Preview Anita".to_string(), Route::Anita {})),
                }
            }
        }

        section { class: "section section-alt",
            div { class: "container",
                QuoteCard {
                    quote: "We went from eleven supplier portals and a wall of delivery \
                            notes to one screen. My head chef got two hours of his Monday back.",
                    attrib: "Operations director, 40-room coastal hotel",
                }
            }
        }

        section { class: "section",
            div { class: "container",
                CtaBand {
                    title: "See Procura on your own numbers",
                    sub: Some("Thirty minutes, your categories, no slideware.".to_string()),
                    action_label: "Book a demo",
                    to: Route::BookDemo {},
                }
            }
        }
    }
}
