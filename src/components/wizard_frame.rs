//! Wizard Frame
//!
//! Shared chrome for the onboarding flows: card, step progress and the
//! back/next action row. The pages own all step state; this component
//! only renders what it is told.

use dioxus::prelude::*;
use procura_ui::{Button, ButtonVariant, StepProgress};

#[derive(Props, Clone, PartialEq)]
pub struct WizardFrameProps {
    pub title: String,
    #[props(default = None)]
    pub sub: Option<String>,
    /// Current step, 1-based
    pub step: u8,
    pub total: u8,
    #[props(default = true)]
    pub back_enabled: bool,
    pub next_enabled: bool,
    #[props(default = String::from("Next"))]
    pub next_label: String,
    pub on_back: EventHandler<()>,
    pub on_next: EventHandler<()>,
    pub children: Element,
}

#[component]
pub fn WizardFrame(props: WizardFrameProps) -> Element {
    rsx! {
        div { class: "wizard-page",
            div { class: "wizard-card",
                StepProgress { current: props.step, total: props.total }
                h1 { class: "wizard-title", "{props.title}" }
                if let Some(sub) = &props.sub {
                    p { class: "wizard-sub", "{sub}" }
                }

                div { class: "wizard-body", {props.children} }

                div { class: "wizard-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !props.back_enabled,
                        onclick: move |_| props.on_back.call(()),
                        "Back"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !props.next_enabled,
                        onclick: move |_| props.on_next.call(()),
                        "{props.next_label}"
                    }
                }
            }
        }
    }
}
