//! Pill Selection Components
//!
//! Horizontal rows of pill buttons in two flavors:
//! - SelectPills: single choice (industry pick, article category filter)
//! - TogglePills: multi choice (company kinds, supply categories)
//! Selected pills fill teal; unselected keep a hairline border.

use dioxus::prelude::*;

/// Properties for the SelectPills component
#[derive(Clone, PartialEq, Props)]
pub struct SelectPillsProps {
    /// List of available options
    pub options: Vec<String>,
    /// Currently selected option, if any
    #[props(default = None)]
    pub selected: Option<String>,
    /// Handler called when an option is picked
    pub on_select: EventHandler<String>,
    /// Accessible group label
    #[props(default = "Options".to_string())]
    pub aria_label: String,
}

/// Displays a horizontal row of single-select pills
///
/// # Example
///
/// ```rust,ignore
/// let mut category = use_signal(|| None::<String>);
///
/// rsx! {
///     SelectPills {
///         options: vec!["All".to_string(), "Procurement".to_string()],
///         selected: category(),
///         on_select: move |c| category.set(Some(c))
///     }
/// }
/// ```
#[component]
pub fn SelectPills(props: SelectPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "pill-row",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for option in props.options.iter() {
                {
                    let option_clone = option.clone();
                    let is_selected = selected.as_deref() == Some(option.as_str());
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(option_clone.clone());
                            },
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}

/// Properties for the TogglePills component
#[derive(Clone, PartialEq, Props)]
pub struct TogglePillsProps {
    /// List of available options
    pub options: Vec<String>,
    /// Currently selected options
    pub selected: Vec<String>,
    /// Handler called with the option whose state should flip
    pub on_toggle: EventHandler<String>,
    /// Accessible group label
    #[props(default = "Options".to_string())]
    pub aria_label: String,
}

/// Displays a wrapping grid of multi-select pills
///
/// The host owns the selection list; each click reports the clicked
/// label and the host flips it.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TogglePills {
///         options: kind_options,
///         selected: draft.read().company_kinds.clone(),
///         on_toggle: move |kind| draft.write().toggle_company_kind(&kind)
///     }
/// }
/// ```
#[component]
pub fn TogglePills(props: TogglePillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "pill-grid",
            role: "group",
            "aria-label": "{props.aria_label}",
            for option in props.options.iter() {
                {
                    let option_clone = option.clone();
                    let is_selected = selected.iter().any(|s| s == option);
                    let on_toggle = props.on_toggle;
                    rsx! {
                        button {
                            class: if is_selected { "pill selected" } else { "pill" },
                            "aria-pressed": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_toggle.call(option_clone.clone());
                            },
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}

/// A single pill (for custom layouts)
#[derive(Clone, PartialEq, Props)]
pub struct PillProps {
    /// The pill label
    pub label: String,
    /// Whether this pill is selected
    #[props(default = false)]
    pub selected: bool,
    /// Handler called when clicked
    pub on_click: EventHandler<()>,
}

#[component]
pub fn Pill(props: PillProps) -> Element {
    let is_selected = props.selected;

    rsx! {
        button {
            class: if is_selected { "pill selected" } else { "pill" },
            onclick: move |_| props.on_click.call(()),
            "{props.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn pills_module_exists() {
        // Basic compile-time test to ensure the module is properly structured.
        // Component rendering tests require a Dioxus runtime and should be
        // done in integration tests or with the dioxus testing utilities.
        assert!(true);
    }
}
