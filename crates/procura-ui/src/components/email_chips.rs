//! Email Chip Input Component
//!
//! The invite collector used by both onboarding wizards and anywhere
//! else a list of addresses is gathered. Typed addresses are validated,
//! then handed to the host, which owns the roster; accepted entries
//! render as removable chips beneath the field.

use dioxus::prelude::*;
use procura_core::is_plausible_email;

use crate::components::IconButton;

/// Properties for the EmailChipInput component
#[derive(Clone, PartialEq, Props)]
pub struct EmailChipInputProps {
    /// Accepted addresses, rendered as chips
    pub entries: Vec<String>,
    /// Called with a trimmed, validated address to append
    pub on_add: EventHandler<String>,
    /// Called with the address of a removed chip
    pub on_remove: EventHandler<String>,
    /// Field label
    #[props(default = None)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default = "name@company.com".to_string())]
    pub placeholder: String,
    /// Host-level error to display (duplicate, roster full)
    #[props(default = None)]
    pub error: Option<String>,
    /// Plausibility check applied before `on_add` fires
    #[props(default = is_plausible_email as fn(&str) -> bool)]
    pub validate: fn(&str) -> bool,
}

/// Collects email addresses as chips
///
/// Enter or the Add button submits the current text. Input that fails
/// the validate check shows an inline error and is never handed to the
/// host, so a roster behind this component only ever sees plausible
/// addresses.
///
/// # Example
///
/// ```rust,ignore
/// EmailChipInput {
///     entries: draft.read().team_invites.entries().to_vec(),
///     on_add: move |email: String| {
///         if let Err(e) = draft.write().team_invites.add(&email) {
///             roster_error.set(Some(e.to_string()));
///         }
///     },
///     on_remove: move |email: String| {
///         draft.write().team_invites.remove(&email);
///     },
///     label: Some("Invite your team".to_string()),
///     error: roster_error(),
/// }
/// ```
#[component]
pub fn EmailChipInput(props: EmailChipInputProps) -> Element {
    let mut draft = use_signal(String::new);
    let mut local_error = use_signal(|| None::<&'static str>);

    let validate = props.validate;
    let on_add = props.on_add;
    let mut submit = move || {
        let typed = draft();
        let trimmed = typed.trim();
        if trimmed.is_empty() {
            return;
        }
        if validate(trimmed) {
            on_add.call(trimmed.to_string());
            draft.set(String::new());
            local_error.set(None);
        } else {
            local_error.set(Some("Enter a valid email address"));
        }
    };

    // host errors (duplicates, caps) outrank the local shape check
    let shown_error = props
        .error
        .clone()
        .or_else(|| local_error().map(String::from));

    rsx! {
        div { class: "email-chips",
            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }
            div { class: "email-chips-row",
                input {
                    class: if shown_error.is_some() { "input-field input-error" } else { "input-field" },
                    r#type: "email",
                    placeholder: "{props.placeholder}",
                    value: "{draft}",
                    oninput: move |e| {
                        draft.set(e.value());
                        local_error.set(None);
                    },
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "btn-outline chip-add",
                    r#type: "button",
                    onclick: move |_| submit(),
                    "Add"
                }
            }
            if let Some(error) = &shown_error {
                span { class: "input-error-text", "{error}" }
            }
            if !props.entries.is_empty() {
                div { class: "chip-list",
                    for entry in props.entries.iter() {
                        {
                            let entry_clone = entry.clone();
                            let remove_label = format!("Remove {entry}");
                            let on_remove = props.on_remove;
                            rsx! {
                                span { class: "chip",
                                    span { class: "chip-text", "{entry}" }
                                    IconButton {
                                        class: Some("chip-remove".to_string()),
                                        aria_label: remove_label,
                                        onclick: move |_| on_remove.call(entry_clone.clone()),
                                        "\u{00D7}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_validator_is_the_shared_check() {
        let validate: fn(&str) -> bool = is_plausible_email;
        assert!(validate("gm@hotel.com"));
        assert!(!validate("not-an-email"));
    }
}
