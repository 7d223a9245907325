//! Buyer onboarding
//!
//! Intro screen with the role choice, then the six-step wizard: industry,
//! company kinds, company name, location, team invites, supplier invites.
//! Picking a preset industry auto-advances after a short pause; "Others"
//! reveals a text field and waits for a manual Next. Back on step one
//! returns to the intro. Finishing records an onboarding lead.

use std::time::Duration;

use dioxus::prelude::*;
use procura_core::{
    Advance, BackPolicy, BuyerDraft, IndustrySelection, Lead, OnboardingComplete, Retreat,
    StepTracker, BUYER_STEP_COUNT, COMPANY_KIND_OPTIONS, INDUSTRY_AUTO_ADVANCE_MS,
    INDUSTRY_OPTIONS, OTHER_INDUSTRY_LABEL,
};
use procura_ui::{EmailChipInput, Input, SelectPills, SuccessDialog, TogglePills};

use crate::app::Route;
use crate::components::WizardFrame;
use crate::context::use_lead_log;

#[component]
pub fn BecomeABuyer() -> Element {
    let navigator = use_navigator();
    let leads = use_lead_log();

    let mut started = use_signal(|| false);
    let mut draft = use_signal(BuyerDraft::new);
    let mut tracker = use_signal(|| StepTracker::new(BUYER_STEP_COUNT, BackPolicy::DelegateToHost));
    let mut team_error = use_signal(|| None::<String>);
    let mut supplier_error = use_signal(|| None::<String>);
    let mut completed = use_signal(|| false);

    let pick_industry = move |label: String| {
        if label == OTHER_INDUSTRY_LABEL {
            draft.write().select_other_industry();
            return;
        }
        draft.write().select_preset_industry(label);
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(INDUSTRY_AUTO_ADVANCE_MS)).await;
            // fire only if the visitor is still sitting on step one with
            // a preset pick; "Others" and manual moves cancel it
            if tracker.read().current() == 1 && draft.read().industry_auto_advances() {
                tracker.write().advance();
            }
        });
    };

    let on_next = move |_| {
        let current = tracker.read().current();
        if !draft.read().step_complete(current) {
            return;
        }
        if tracker.write().advance() == Advance::Completed {
            let summary = OnboardingComplete::from_buyer(&draft.read());
            if leads.record(Lead::Onboarding(summary)).is_ok() {
                completed.set(true);
            }
        }
    };

    let on_back = move |_| {
        if tracker.write().retreat() == Retreat::Delegated {
            started.set(false);
        }
    };

    if !started() {
        return rsx! {
            div { class: "wizard-page",
                div { class: "wizard-card",
                    h1 { class: "wizard-title", "Let's set you up" }
                    p { class: "wizard-sub",
                        "Two minutes of questions so the marketplace opens \
                         tuned to your operation. Which side are you on?"
                    }
                    div { class: "role-cards",
                        button {
                            class: "role-card",
                            onclick: move |_| started.set(true),
                            span { class: "role-card-icon", "\u{1F3E8}" }
                            span { class: "role-card-title", "I buy for a property" }
                            span { class: "role-card-text",
                                "Hotels, restaurants, caterers. Source supplies and collect quotes."
                            }
                        }
                        button {
                            class: "role-card",
                            onclick: move |_| {
                                navigator.push(Route::BecomeASeller {});
                            },
                            span { class: "role-card-icon", "\u{1F69A}" }
                            span { class: "role-card-title", "I sell to the trade" }
                            span { class: "role-card-text",
                                "Producers, wholesalers, importers. Reach verified buyers."
                            }
                        }
                    }
                }
            }
        };
    }

    let step = tracker.read().current();
    let next_label = if tracker.read().is_last() { "Finish" } else { "Next" };

    let (step_title, step_sub) = match step {
        1 => ("What industry are you in?", "Pick the closest fit. This tunes your starting catalogue."),
        2 => ("What kind of places do you run?", "Choose as many as apply."),
        3 => ("What's your company called?", "The name your suppliers know you by."),
        4 => ("Where do you operate?", "Country, region and home city."),
        5 => ("Invite your team", "Optional. Colleagues get a seat the day you go live."),
        _ => ("Which suppliers do you already use?", "Optional. We'll bring them on board with you."),
    };

    let industry_pill = match &draft.read().industry {
        Some(IndustrySelection::Preset(label)) => Some(label.clone()),
        Some(IndustrySelection::Other(_)) => Some(OTHER_INDUSTRY_LABEL.to_string()),
        None => None,
    };

    let step_body = match step {
        1 => rsx! {
            SelectPills {
                options: INDUSTRY_OPTIONS
                    .iter()
                    .map(|s| s.to_string())
                    .chain(std::iter::once(OTHER_INDUSTRY_LABEL.to_string()))
                    .collect::<Vec<_>>(),
                selected: industry_pill,
                on_select: pick_industry,
                aria_label: "Industry",
            }
            if draft.read().industry_is_other() {
                Input {
                    label: Some("Tell us your industry".to_string()),
                    placeholder: Some("e.g. Senior living, co-working, stadium".to_string()),
                    value: draft.read().industry_label().unwrap_or_default().to_string(),
                    oninput: move |v: String| draft.write().set_other_industry_text(v),
                }
            }
        },
        2 => rsx! {
            TogglePills {
                options: COMPANY_KIND_OPTIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                selected: draft.read().company_kinds.clone(),
                on_toggle: move |kind: String| draft.write().toggle_company_kind(&kind),
                aria_label: "Company kinds",
            }
        },
        3 => rsx! {
            Input {
                label: Some("Company name".to_string()),
                placeholder: Some("Hotel Mar Azul".to_string()),
                value: draft.read().company_name.clone(),
                oninput: move |v: String| draft.write().company_name = v,
            }
        },
        4 => rsx! {
            Input {
                label: Some("Country".to_string()),
                placeholder: Some("Portugal".to_string()),
                value: draft.read().country.clone(),
                oninput: move |v: String| draft.write().country = v,
            }
            Input {
                label: Some("State / Region".to_string()),
                placeholder: Some("Algarve".to_string()),
                value: draft.read().state.clone(),
                oninput: move |v: String| draft.write().state = v,
            }
            Input {
                label: Some("City".to_string()),
                placeholder: Some("Lagos".to_string()),
                value: draft.read().city.clone(),
                oninput: move |v: String| draft.write().city = v,
            }
        },
        5 => rsx! {
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
                entries: draft.read().supplier_invites.entries().to_vec(),
                on_add: move |email: String| {
                    let outcome = draft.write().supplier_invites.add(&email);
                    match outcome {
                        Ok(()) => supplier_error.set(None),
                        Err(e) => supplier_error.set(Some(e.to_string())),
                    }
                },
                on_remove: move |email: String| {
                    draft.write().supplier_invites.remove(&email);
                    supplier_error.set(None);
                },
                label: Some("Supplier emails".to_string()),
                error: supplier_error(),
            }
        },
    };

    rsx! {
        WizardFrame {
            title: "{step_title}",
            sub: Some(step_sub.to_string()),
            step: step,
            total: BUYER_STEP_COUNT,
            back_enabled: tracker.read().back_enabled(),
            next_enabled: draft.read().step_complete(step),
            next_label: "{next_label}",
            on_back: on_back,
            on_next: on_next,
            {step_body}
        }

        SuccessDialog {
            show: completed(),
            title: "Welcome to Procura",
            message: "Your buyer profile is ready. Here's a preview of the dashboard you'd land on.",
            action_label: "See the preview",
            on_action: move |_| {
                navigator.push(Route::BuyerDashboard {});
            },
        }
    }
}
