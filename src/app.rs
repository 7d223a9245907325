use std::sync::Arc;

use dioxus::prelude::*;
use procura_core::LeadLog;

use crate::components::{NavHeader, SiteFooter};
use crate::pages::{
    AboutUs, Anita, BecomeABuyer, BecomeASeller, BookDemo, BuyerDashboard, ContactUs, Home,
    IntegrationSolutions, Learn, Login, Marketplace, NotFound, ProcurementSolutions, RfqCreation,
    SalesSolutions, SellerDashboard, SellerPage, SmartSourcingTools, VendorsHub,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// Marketing pages (`/`, `/about-us`, the solution pages) share the
/// full shell with footer; app-like surfaces (login, onboarding, the
/// dashboards) keep the nav but drop the footer. Unknown paths fall
/// through to `NotFound`.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/about-us")]
    AboutUs {},
    #[route("/contact-us")]
    ContactUs {},
    #[route("/seller-dashboard")]
    SellerDashboard {},
    #[route("/book-demo")]
    BookDemo {},
    #[route("/login")]
    Login {},
    #[route("/buyer-dashboard")]
    BuyerDashboard {},
    #[route("/become-a-seller")]
    BecomeASeller {},
    #[route("/become-a-buyer")]
    BecomeABuyer {},
    #[route("/marketplace")]
    Marketplace {},
    #[route("/anita")]
    Anita {},
    #[route("/smart-sourcing-tools")]
    SmartSourcingTools {},
    #[route("/learn")]
    Learn {},
    #[route("/vendors-hub")]
    VendorsHub {},
    #[route("/procurement-solutions")]
    ProcurementSolutions {},
    #[route("/sales-solutions")]
    SalesSolutions {},
    #[route("/integration-solutions")]
    IntegrationSolutions {},
    #[route("/seller-page")]
    SellerPage {},
    #[route("/rfq-creation")]
    RfqCreation {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Whether the marketing footer renders under this route
    pub fn shows_footer(&self) -> bool {
        !matches!(
            self,
            Route::Login {}
                | Route::BuyerDashboard {}
                | Route::SellerDashboard {}
                | Route::BecomeABuyer {}
                | Route::BecomeASeller {}
        )
    }
}

/// Shared page shell: sticky nav on top, routed content, footer on
/// marketing routes. Mounted once; route changes swap the outlet only.
#[component]
fn SiteShell() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();

    // honor --route on first mount, then let the router own navigation
    use_effect(move || {
        if let Some(path) = crate::get_start_route() {
            match path.parse::<Route>() {
                Ok(target) => {
                    navigator.push(target);
                }
                Err(e) => {
                    tracing::warn!(%path, error = %e, "ignoring unknown start route");
                }
            }
        }
    });

    rsx! {
        div { class: "site-shell",
            NavHeader {}
            main { class: "site-main",
                Outlet::<Route> {}
            }
            if route.shows_footer() {
                SiteFooter {}
            }
        }
    }
}

/// Root application component.
///
/// Provides global styles, the lead log, and routing.
#[component]
pub fn App() -> Element {
    // Every form submission in the app lands in this one sink
    use_context_provider(|| Arc::new(LeadLog::new()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_hidden_on_app_surfaces() {
        assert!(Route::Home {}.shows_footer());
        assert!(Route::Learn {}.shows_footer());
        assert!(Route::ContactUs {}.shows_footer());
        assert!(!Route::Login {}.shows_footer());
        assert!(!Route::BuyerDashboard {}.shows_footer());
        assert!(!Route::SellerDashboard {}.shows_footer());
        assert!(!Route::BecomeABuyer {}.shows_footer());
        assert!(!Route::BecomeASeller {}.shows_footer());
    }

    #[test]
    fn routes_parse_from_paths() {
        assert!(matches!("/".parse::<Route>(), Ok(Route::Home {})));
        assert!(matches!("/learn".parse::<Route>(), Ok(Route::Learn {})));
        assert!(matches!(
            "/become-a-buyer".parse::<Route>(),
            Ok(Route::BecomeABuyer {})
        ));
        assert!(matches!(
            "/no/such/page".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
