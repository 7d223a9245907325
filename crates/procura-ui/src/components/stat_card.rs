//! Stat Card Component
//!
//! Headline-number tile used on the dashboard pages.

use dioxus::prelude::*;

/// Properties for the StatCard component
#[derive(Clone, PartialEq, Props)]
pub struct StatCardProps {
    /// Small caption above the number
    pub label: String,
    /// The headline value, already formatted
    pub value: String,
    /// Optional footnote under the number
    #[props(default = None)]
    pub detail: Option<String>,
}

/// A single dashboard tile: caption, big number, optional footnote
///
/// # Example
///
/// ```rust,ignore
/// StatCard {
///     label: "Open orders".to_string(),
///     value: snapshot.open_orders.to_string(),
///     detail: Some("across all properties".to_string()),
/// }
/// ```
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-label", "{props.label}" }
            span { class: "stat-value", "{props.value}" }
            if let Some(detail) = &props.detail {
                span { class: "stat-detail", "{detail}" }
            }
        }
    }
}

/// Formats a whole euro amount with comma thousand separators
pub fn format_eur(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("\u{20AC}{out}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_euro_amounts() {
        assert_eq!(format_eur(0), "\u{20AC}0");
        assert_eq!(format_eur(950), "\u{20AC}950");
        assert_eq!(format_eur(18_000), "\u{20AC}18,000");
        assert_eq!(format_eur(1_234_567), "\u{20AC}1,234,567");
    }
}
