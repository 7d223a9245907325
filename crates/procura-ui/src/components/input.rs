//! Input Field Components
//!
//! Text inputs and textareas following the design system.
//! Features:
//! - White field on paper background with a hairline border
//! - Teal focus ring
//! - Muted placeholder text
//! - Optional inline error line below the field

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text (displayed muted)
    #[props(default = None)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default = None)]
    pub label: Option<String>,
    /// Hint text beside the label (e.g., "optional")
    #[props(default = None)]
    pub hint: Option<String>,
    /// Inline error shown under the field
    #[props(default = None)]
    pub error: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default = None)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default = None)]
    pub class: Option<String>,
}

/// Text input field following the design system
///
/// # Example
///
/// ```rust,ignore
/// let mut company = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: company(),
///         oninput: move |s| company.set(s),
///         label: Some("Company name".to_string()),
///         placeholder: Some("Hotel Mar Azul".to_string())
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));
    let extra_class = props.class.as_deref().unwrap_or("");
    let has_error = props.error.is_some();
    let input_class = match (has_error, extra_class.is_empty()) {
        (false, true) => "input-field".to_string(),
        (false, false) => format!("input-field {}", extra_class),
        (true, true) => "input-field input-error".to_string(),
        (true, false) => format!("input-field input-error {}", extra_class),
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                span { class: "input-error-text", "{error}" }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = None)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default = None)]
    pub label: Option<String>,
    /// Hint text beside the label
    #[props(default = None)]
    pub hint: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default = None)]
    pub id: Option<String>,
}

/// Multi-line text input following the design system
///
/// # Example
///
/// ```rust,ignore
/// let mut message = use_signal(String::new);
///
/// rsx! {
///     TextArea {
///         value: message(),
///         oninput: move |s| message.set(s),
///         label: Some("How can we help?".to_string()),
///         rows: 5
///     }
/// }
/// ```
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("textarea-{}", rand_id()));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Generate a simple random ID for form elements
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search articles...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Single-character input box for one digit of a verification code
#[derive(Clone, PartialEq, Props)]
pub struct CodeBoxProps {
    /// Current digit value (empty or one character)
    pub value: String,
    /// Handler called with the (possibly truncated) new value
    pub oninput: EventHandler<String>,
    /// Position within the code, used for the accessible label
    pub index: usize,
}

#[component]
pub fn CodeBox(props: CodeBoxProps) -> Element {
    let position = props.index + 1;
    rsx! {
        input {
            class: "code-box",
            r#type: "text",
            inputmode: "numeric",
            maxlength: "1",
            "aria-label": "Digit {position}",
            value: "{props.value}",
            oninput: move |e| {
                // keep at most the last typed character
                let v = e.value();
                let kept = v.chars().last().map(String::from).unwrap_or_default();
                props.oninput.call(kept);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_id_generates_number() {
        let id1 = rand_id();
        let id2 = rand_id();
        // IDs should be reasonable numbers
        assert!(id1 < 1_000_000);
        assert!(id2 < 1_000_000);
    }
}
