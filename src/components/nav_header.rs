//! Navigation Header Component
//!
//! Sticky top bar: wordmark on the left, primary links and the
//! Solutions dropdown in the middle, login and the demo CTA on the
//! right. Rendered once by the shell and kept across route changes.

use dioxus::prelude::*;

use crate::app::Route;

/// Top-level nav destinations shown as plain links
const PRIMARY_LINKS: &[(&str, NavTarget)] = &[
    ("Marketplace", NavTarget::Marketplace),
    ("Learn", NavTarget::Learn),
    ("About us", NavTarget::AboutUs),
    ("Contact", NavTarget::ContactUs),
];

/// Entries of the Solutions dropdown
const SOLUTION_LINKS: &[(&str, NavTarget)] = &[
    ("Procurement solutions", NavTarget::ProcurementSolutions),
    ("Sales solutions", NavTarget::SalesSolutions),
    ("Integration solutions", NavTarget::IntegrationSolutions),
    ("Smart sourcing tools", NavTarget::SmartSourcingTools),
    ("Vendors hub", NavTarget::VendorsHub),
    ("Anita AI", NavTarget::Anita),
];

/// Const-friendly stand-in for Route, resolved at render time
#[derive(Clone, Copy, PartialEq, Debug)]
enum NavTarget {
    Marketplace,
    Learn,
    AboutUs,
    ContactUs,
    ProcurementSolutions,
    SalesSolutions,
    IntegrationSolutions,
    SmartSourcingTools,
    VendorsHub,
    Anita,
}

impl NavTarget {
    fn route(&self) -> Route {
        match self {
            NavTarget::Marketplace => Route::Marketplace {},
            NavTarget::Learn => Route::Learn {},
            NavTarget::AboutUs => Route::AboutUs {},
            NavTarget::ContactUs => Route::ContactUs {},
            NavTarget::ProcurementSolutions => Route::ProcurementSolutions {},
            NavTarget::SalesSolutions => Route::SalesSolutions {},
            NavTarget::IntegrationSolutions => Route::IntegrationSolutions {},
            NavTarget::SmartSourcingTools => Route::SmartSourcingTools {},
            NavTarget::VendorsHub => Route::VendorsHub {},
            NavTarget::Anita => Route::Anita {},
        }
    }
}

/// Navigation Header component
///
/// Active-link highlighting follows the current route; the Solutions
/// menu opens on click and closes after any selection.
#[component]
pub fn NavHeader() -> Element {
    let route = use_route::<Route>();
    let mut show_solutions = use_signal(|| false);

    let solutions_active = SOLUTION_LINKS.iter().any(|(_, t)| t.route() == route);

    rsx! {
        header { class: "nav-header",
            div { class: "nav-inner",
                Link {
                    to: Route::Home {},
                    class: "nav-logo",
                    "Procura"
                    span { "." }
                }

                nav { class: "nav-links",
                    for (label, target) in PRIMARY_LINKS.iter() {
                        Link {
                            to: target.route(),
                            class: if target.route() == route { "nav-link active" } else { "nav-link" },
                            "{label}"
                        }
                    }

                    div { class: "nav-group",
                        button {
                            class: if solutions_active { "nav-group-label nav-link active" } else { "nav-group-label" },
                            r#type: "button",
                            "aria-expanded": "{show_solutions()}",
                            onclick: move |_| show_solutions.toggle(),
                            "Solutions \u{25BE}"
                        }
                        if show_solutions() {
                            div {
                                class: "nav-group-menu",
                                onclick: move |_| show_solutions.set(false),
                                for (label, target) in SOLUTION_LINKS.iter() {
                                    Link {
                                        to: target.route(),
                                        class: "nav-link",
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "nav-actions",
                    Link {
                        to: Route::Login {},
                        class: "btn-ghost",
                        "Log in"
                    }
                    Link {
                        to: Route::BookDemo {},
                        class: "btn-cta",
                        "Book a demo"
                    }
                }
            }
        }
    }
}
