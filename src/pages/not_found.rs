//! Wildcard fallback page

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "container notfound",
            span { class: "notfound-code", "404" }
            h1 { class: "page-title", "That page isn't on the menu" }
            p { class: "page-sub",
                "Nothing lives at "
                span { class: "notfound-path", "/{path}" }
            }
            Link { to: Route::Home {}, class: "btn-primary", "Back to the homepage" }
        }
    }
}
