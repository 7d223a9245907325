//! Modal Components
//!
//! Overlay shell plus the success dialog every lead form resolves to.
//! Clicking the dim backdrop dismisses; clicks inside the card do not.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Properties for the ModalOverlay component
#[derive(Clone, PartialEq, Props)]
pub struct ModalOverlayProps {
    /// Whether the modal is visible
    pub show: bool,
    /// Called when the backdrop is clicked
    pub on_dismiss: EventHandler<()>,
    /// Card content
    pub children: Element,
}

/// Dimmed backdrop with a centered card
///
/// # Example
///
/// ```rust,ignore
/// ModalOverlay {
///     show: show_details(),
///     on_dismiss: move |_| show_details.set(false),
///     h2 { "Details" }
/// }
/// ```
#[component]
pub fn ModalOverlay(props: ModalOverlayProps) -> Element {
    if !props.show {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| props.on_dismiss.call(()),

            div {
                class: "modal-card",
                onclick: move |e| e.stop_propagation(),
                {props.children}
            }
        }
    }
}

/// Properties for the SuccessDialog component
#[derive(Clone, PartialEq, Props)]
pub struct SuccessDialogProps {
    /// Whether the dialog is visible
    pub show: bool,
    /// Headline, e.g. "Request received"
    pub title: String,
    /// Supporting copy under the headline
    pub message: String,
    /// Label of the single action button
    #[props(default = "Done".to_string())]
    pub action_label: String,
    /// Called for both the action button and a backdrop click
    pub on_action: EventHandler<()>,
}

/// Confirmation dialog shown after a form submission lands
///
/// # Example
///
/// ```rust,ignore
/// SuccessDialog {
///     show: submitted(),
///     title: "Request received".to_string(),
///     message: "Our team will reach out within one business day.".to_string(),
///     on_action: move |_| submitted.set(false),
/// }
/// ```
#[component]
pub fn SuccessDialog(props: SuccessDialogProps) -> Element {
    let on_action = props.on_action;

    rsx! {
        ModalOverlay {
            show: props.show,
            on_dismiss: move |_| on_action.call(()),

            div { class: "success-dialog",
                span { class: "success-mark", "\u{2713}" }
                h2 { class: "modal-title", "{props.title}" }
                p { class: "modal-description", "{props.message}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_action.call(()),
                    "{props.action_label}"
                }
            }
        }
    }
}
