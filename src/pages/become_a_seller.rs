//! Seller onboarding
//!
//! Five-step wizard: supply categories, company details, location, team
//! invites, customer invites. No intro screen, so back stays disabled on
//! step one. Finishing records an onboarding lead and previews the
//! seller dashboard.

use dioxus::prelude::*;
use procura_core::{
    Advance, BackPolicy, Lead, OnboardingComplete, SellerDraft, StepTracker, SELLER_STEP_COUNT,
    SUPPLY_CATEGORY_OPTIONS,
};
use procura_ui::{EmailChipInput, Input, SuccessDialog, TogglePills};

use crate::app::Route;
use crate::components::WizardFrame;
use crate::context::use_lead_log;

#[component]
pub fn BecomeASeller() -> Element {
    let navigator = use_navigator();
    let leads = use_lead_log();

    let mut draft = use_signal(SellerDraft::new);
    let mut tracker = use_signal(|| StepTracker::new(SELLER_STEP_COUNT, BackPolicy::Disabled));
    let mut team_error = use_signal(|| None::<String>);
    let mut customer_error = use_signal(|| None::<String>);
    let mut completed = use_signal(|| false);

    let on_next = move |_| {
        let current = tracker.read().current();
        if !draft.read().step_complete(current) {
            return;
        }
        if tracker.write().advance() == Advance::Completed {
            let summary = OnboardingComplete::from_seller(&draft.read());
            if leads.record(Lead::Onboarding(summary)).is_ok() {
                completed.set(true);
            }
        }
    };

    let on_back = move |_| {
        tracker.write().retreat();
    };

    let step = tracker.read().current();
    let next_label = if tracker.read().is_last() { "Finish" } else { "Next" };

    let (step_title, step_sub) = match step {
        1 => ("What do you supply?", "Pick every category you can quote for."),
        2 => ("Tell us about your company", "The website is optional."),
        3 => ("Where do you deliver from?", "Country, region and home city."),
        4 => ("Invite your sales team", "Optional. They'll handle quotes with you."),
        _ => ("Bring your existing customers", "Optional. Standing orders carry over."),
    };

    let step_body = match step {
        1 => rsx! {
            TogglePills {
                options: SUPPLY_CATEGORY_OPTIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                selected: draft.read().supply_categories.clone(),
                on_toggle: move |category: String| draft.write().toggle_supply_category(&category),
                aria_label: "Supply categories",
            }
        },
        2 => rsx! {
            Input {
                label: Some("Company name".to_string()),
                placeholder: Some("Atlas Provisions".to_string()),
                value: draft.read().company_name.clone(),
                oninput: move |v: String| draft.write().company_name = v,
            }
            Input {
                label: Some("Website".to_string()),
                hint: Some("optional".to_string()),
                placeholder: Some("https://".to_string()),
                value: draft.read().website.clone(),
                oninput: move |v: String| draft.write().website = v,
            }
        },
        3 => rsx! {
            Input {
                label: Some("Country".to_string()),
                placeholder: Some("Spain".to_string()),
                value: draft.read().country.clone(),
                oninput: move |v: String| draft.write().country = v,
            }
            Input {
                label: Some("State / Region".to_string()),
                placeholder: Some("Catalonia".to_string()),
                value: draft.read().state.clone(),
                oninput: move |v: String| draft.write().state = v,
            }
            Input {
                label: Some("City".to_string()),
                placeholder: Some("Barcelona".to_string()),
                value: draft.read().city.clone(),
                oninput: move |v: String| draft.write().city = v,
            }
        },
        4 => rsx! {
            EmailChipInput {
                entries: draft.read().team_invites.entries().to_vec(),
                on_add: move |email: String| {
                    let outcome = draft.write().team_invites.add(&email);
                    match outcome {
                        Ok(()) => team_error.set(None),
                        Err(e) => team_error.set(Some(e.to_string())),
                    }
                },
                on_remove: move |email: String| {
                    draft.write().team_invites.remove(&email);
                    team_error.set(None);
                },
                label: Some("Colleague emails".to_string()),
                error: team_error(),
            }
        },
        _ => rsx! {
            EmailChipInput {
                entries: draft.read().customer_invites.entries().to_vec(),
                on_add: move |email: String| {
                    let outcome = draft.write().customer_invites.add(&email);
                    match outcome {
                        Ok(()) => customer_error.set(None),
                        Err(e) => customer_error.set(Some(e.to_string())),
                    }
                },
                on_remove: move |email: String| {
                    draft.write().customer_invites.remove(&email);
                    customer_error.set(None);
                },
                label: Some("Customer emails".to_string()),
                error: customer_error(),
            }
        },
    };

    rsx! {
        WizardFrame {
            title: "{step_title}",
            sub: Some(step_sub.to_string()),
            step: step,
            total: SELLER_STEP_COUNT,
            back_enabled: tracker.read().back_enabled(),
            next_enabled: draft.read().step_complete(step),
            next_label: "{next_label}",
            on_back: on_back,
            on_next: on_next,
            {step_body}
        }

        SuccessDialog {
            show: completed(),
            title: "Welcome aboard",
            message: "Your seller profile is ready for verification. Here's the dashboard you'd work from.",
            action_label: "See the preview",
            on_action: move |_| {
                navigator.push(Route::SellerDashboard {});
            },
        }
    }
}
