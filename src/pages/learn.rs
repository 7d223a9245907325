//! Learn page
//!
//! Searchable article library with category filters and an in-page
//! reader. Filtering happens in memory over the fixed catalog; the
//! reader swaps in when a card is clicked, no route change.

use dioxus::prelude::*;
use procura_core::{catalog, Article, ArticleCategory};
use procura_ui::{Button, ButtonVariant, SearchInput, SelectPills};

use crate::components::MarkdownRenderer;

const ALL_LABEL: &str = "All";

#[component]
pub fn Learn() -> Element {
    let mut query = use_signal(String::new);
    let mut category = use_signal(|| None::<ArticleCategory>);
    let mut reading = use_signal(|| None::<&'static str>);

    // Reader view when a card has been opened
    if let Some(slug) = reading() {
        if let Some(article) = catalog::get(slug) {
            return rsx! {
                div { class: "reader container",
                    button {
                        class: "reader-back btn-ghost",
                        onclick: move |_| reading.set(None),
                        "\u{2190} All articles"
                    }
                    img {
                        class: "article-image",
                        src: "{article.image_url}",
                        alt: "",
                    }
                    h1 { class: "reader-title", "{article.title}" }
                    p { class: "reader-meta",
                        span { class: "article-badge", "{article.category}" }
                        " {article.author} \u{00B7} {article.read_minutes} min read"
                    }
                    MarkdownRenderer { content: article.body.to_string() }
                }
            };
        }
        // stale slug, fall through to the list
    }

    let results = catalog::filtered(&query(), category());
    let selected_pill = category()
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| ALL_LABEL.to_string());
    let pill_options: Vec<String> = std::iter::once(ALL_LABEL.to_string())
        .chain(ArticleCategory::all().iter().map(|c| c.label().to_string()))
        .collect();

    rsx! {
        div { class: "container",
            header { class: "page-head",
                span { class: "eyebrow", "Learn" }
                h1 { class: "page-title", "Sharper sourcing, one read at a time" }
                p { class: "page-sub",
                    "Field notes on hospitality procurement from operators, \
                     chefs and the Procura team."
                }
            }

            div { class: "learn-controls",
                div { class: "learn-search-row",
                    SearchInput {
                        value: query(),
                        oninput: move |v: String| query.set(v),
                    }
                }
                SelectPills {
                    options: pill_options,
                    selected: Some(selected_pill),
                    on_select: move |label: String| {
                        category.set(
                            ArticleCategory::all()
                                .iter()
                                .find(|c| c.label() == label)
                                .copied(),
                        );
                    },
                    aria_label: "Article category",
                }
            }

            if results.is_empty() {
                div { class: "learn-empty",
                    p { "Nothing matches that search." }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            query.set(String::new());
                            category.set(None);
                        },
                        "Clear filters"
                    }
                }
            } else {
                div { class: "article-grid",
                    for article in results {
                        ArticleCard {
                            article: article,
                            on_open: move |slug: &'static str| reading.set(Some(slug)),
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ArticleCardProps {
    article: &'static Article,
    on_open: EventHandler<&'static str>,
}

#[component]
fn ArticleCard(props: ArticleCardProps) -> Element {
    let article = props.article;
    rsx! {
        button {
            class: "article-card",
            onclick: move |_| props.on_open.call(article.id),
            img {
                class: "article-image",
                src: "{article.image_url}",
                alt: "",
            }
            div { class: "article-body",
                span { class: "article-badge", "{article.category}" }
                h2 { class: "article-title", "{article.title}" }
                p { class: "article-preview", "{article.preview}" }
                p { class: "article-meta",
                    "{article.read_minutes} min read \u{00B7} {article.author}"
                }
            }
        }
    }
}
