//! Markdown Renderer
//!
//! Read-only markdown display for Learn articles.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Renders markdown content as styled HTML
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     MarkdownRenderer { content: article.body.to_string() }
/// }
/// ```
#[component]
pub fn MarkdownRenderer(
    /// Markdown source to render
    content: ReadOnlySignal<String>,
) -> Element {
    // Convert markdown to HTML
    let html_content = use_memo(move || {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);

        let content_str = content();
        let parser = Parser::new_ext(&content_str, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    });

    rsx! {
        div {
            class: "markdown-body",
            dangerous_inner_html: "{html_content()}",
        }
    }
}
