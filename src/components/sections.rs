//! Marketing Section Kit
//!
//! The building blocks the presentational pages are assembled from:
//! section headers, feature cards, split rows, logo strips, quote
//! cards, and the closing CTA band.

use dioxus::prelude::*;

use crate::app::Route;

/// Centered kicker + title + subtitle block that opens a section
#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadProps {
    #[props(default = None)]
    pub kicker: Option<String>,
    pub title: String,
    #[props(default = None)]
    pub sub: Option<String>,
}

#[component]
pub fn SectionHead(props: SectionHeadProps) -> Element {
    rsx! {
        div { class: "section-head",
            if let Some(kicker) = &props.kicker {
                span { class: "eyebrow", "{kicker}" }
            }
            h2 { class: "section-title", "{props.title}" }
            if let Some(sub) = &props.sub {
                p { class: "section-sub", "{sub}" }
            }
        }
    }
}

/// Icon + title + text tile for feature grids
#[derive(Clone, PartialEq, Props)]
pub struct FeatureCardProps {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[component]
pub fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div { class: "feature-card",
            div { class: "feature-icon", "{props.icon}" }
            h3 { class: "feature-title", "{props.title}" }
            p { class: "feature-text", "{props.text}" }
        }
    }
}

/// Two-column copy/illustration row. `flip` puts the art on the left.
#[derive(Clone, PartialEq, Props)]
pub struct SplitSectionProps {
    #[props(default = None)]
    pub kicker: Option<String>,
    pub title: String,
    pub text: String,
    /// Checkmark bullet lines under the copy
    #[props(default)]
    pub points: Vec<String>,
    /// Illustration stand-in (emoji) shown in the art panel
    pub art: String,
    #[props(default = false)]
    pub flip: bool,
    /// Optional action button: (label, destination)
    #[props(default = None)]
    pub action: Option<(String, Route)>,
}

#[component]
pub fn SplitSection(props: SplitSectionProps) -> Element {
    let copy = rsx! {
        div { class: "split-copy",
            if let Some(kicker) = &props.kicker {
                span { class: "eyebrow", "{kicker}" }
            }
            h2 { class: "section-title", "{props.title}" }
            p { class: "section-sub", "{props.text}" }
            if !props.points.is_empty() {
                ul { class: "check-list",
                    for point in props.points.iter() {
                        li { "{point}" }
                    }
                }
            }
            if let Some((label, to)) = &props.action {
                div { style: "margin-top: 24px;",
                    Link { to: to.clone(), class: "btn-primary", "{label}" }
                }
            }
        }
    };
    let art = rsx! {
        div { class: "split-art", "{props.art}" }
    };

    rsx! {
        section { class: "section",
            div { class: "split",
                if props.flip {
                    {art}
                    {copy}
                } else {
                    {copy}
                    {art}
                }
            }
        }
    }
}

/// Row of venue/partner wordmarks rendered as chips
#[derive(Clone, PartialEq, Props)]
pub struct LogoStripProps {
    pub names: Vec<String>,
}

#[component]
pub fn LogoStrip(props: LogoStripProps) -> Element {
    rsx! {
        div { class: "logo-strip",
            for name in props.names.iter() {
                span { class: "logo-chip", "{name}" }
            }
        }
    }
}

/// Pull-quote with attribution
#[derive(Clone, PartialEq, Props)]
pub struct QuoteCardProps {
    pub quote: String,
    pub attrib: String,
}

#[component]
pub fn QuoteCard(props: QuoteCardProps) -> Element {
    rsx! {
        div { class: "quote-card",
            p { class: "quote-text", "\u{201C}{props.quote}\u{201D}" }
            p { class: "quote-attrib", "\u{2014} {props.attrib}" }
        }
    }
}

/// Horizontal band of headline numbers
#[derive(Clone, PartialEq, Props)]
pub struct StatBandProps {
    /// (value, caption) pairs, e.g. ("4,200+", "verified suppliers")
    pub stats: Vec<(String, String)>,
}

#[component]
pub fn StatBand(props: StatBandProps) -> Element {
    rsx! {
        div { class: "stat-band",
            for (value, caption) in props.stats.iter() {
                div { class: "stat-band-item",
                    span { class: "stat-band-value", "{value}" }
                    span { class: "stat-band-caption", "{caption}" }
                }
            }
        }
    }
}

/// One expandable question/answer row
#[derive(Clone, PartialEq, Props)]
pub struct FaqItemProps {
    pub question: String,
    pub answer: String,
}

#[component]
pub fn FaqItem(props: FaqItemProps) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div { class: "faq-item",
            div {
                class: "faq-question",
                onclick: move |_| is_open.toggle(),

                span { class: "faq-toggle",
                    if is_open() { "\u{25BC}" } else { "\u{25B6}" }
                }
                span { "{props.question}" }
            }
            if is_open() {
                p { class: "faq-answer", "{props.answer}" }
            }
        }
    }
}

/// Teal closing band with one amber CTA
#[derive(Clone, PartialEq, Props)]
pub struct CtaBandProps {
    pub title: String,
    #[props(default = None)]
    pub sub: Option<String>,
    pub action_label: String,
    pub to: Route,
}

#[component]
pub fn CtaBand(props: CtaBandProps) -> Element {
    rsx! {
        section { class: "section",
            div { class: "cta-band",
                h2 { class: "section-title", "{props.title}" }
                if let Some(sub) = &props.sub {
                    p { class: "section-sub", "{sub}" }
                }
                Link { to: props.to.clone(), class: "btn-cta", "{props.action_label}" }
            }
        }
    }
}
