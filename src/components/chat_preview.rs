//! Anita Chat Preview
//!
//! Scripted demo conversation for the Anita page. Messages the user
//! types get a canned assistant reply after a short delay; nothing
//! leaves the process.

use std::time::Duration;

use dioxus::prelude::*;

/// Replies cycled through in order as the visitor keeps chatting
const SCRIPTED_REPLIES: &[&str] = &[
    "I found 4 suppliers for breakfast dry goods near Lisbon. Three can deliver before 07:00. Want me to request quotes from all of them?",
    "Done. I've sent the RFQ to Atlantic Fresh, Verde Produce and Mercado Norte. Quotes usually land within a day; I'll compare them against your last contracted prices.",
    "Your olive oil spend is up 9% this quarter on the same volume. Two suppliers in your network list it cheaper. Shall I draft a switch proposal?",
    "That's everything I can show in the preview. Book a demo and I'll run on your real order history.",
];

/// One chat line
#[derive(Clone, PartialEq)]
struct ChatLine {
    from_user: bool,
    text: String,
}

#[component]
pub fn AnitaChatPreview() -> Element {
    let mut lines = use_signal(|| {
        vec![ChatLine {
            from_user: false,
            text: "Hi, I'm Anita. Ask me anything about your sourcing. Try: \
                   \"find me a linen supplier that delivers on Sundays\""
                .to_string(),
        }]
    });
    let mut input = use_signal(String::new);
    let mut reply_idx = use_signal(|| 0usize);
    let mut thinking = use_signal(|| false);

    let mut send = move || {
        let typed = input();
        let text = typed.trim().to_string();
        if text.is_empty() || thinking() {
            return;
        }
        lines.write().push(ChatLine { from_user: true, text });
        input.set(String::new());
        thinking.set(true);

        spawn(async move {
            tokio::time::sleep(Duration::from_millis(700)).await;
            let idx = reply_idx();
            let reply = SCRIPTED_REPLIES[idx % SCRIPTED_REPLIES.len()];
            reply_idx.set(idx + 1);
            lines.write().push(ChatLine {
                from_user: false,
                text: reply.to_string(),
            });
            thinking.set(false);
        });
    };

    rsx! {
        div { class: "chat-preview",
            div { class: "chat-head",
                div { class: "chat-avatar", "A" }
                div {
                    div { class: "chat-name", "Anita" }
                    div { class: "chat-status", "\u{25CF} preview mode" }
                }
            }

            div { class: "chat-scroll",
                for line in lines() {
                    div {
                        class: if line.from_user { "chat-bubble user" } else { "chat-bubble bot" },
                        "{line.text}"
                    }
                }
                if thinking() {
                    div { class: "chat-bubble bot", "\u{2026}" }
                }
            }

            div { class: "chat-input-row",
                input {
                    class: "input-field",
                    r#type: "text",
                    placeholder: "Ask Anita about sourcing...",
                    value: "{input}",
                    oninput: move |e| input.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            send();
                        }
                    },
                }
                button {
                    class: "btn-primary",
                    r#type: "button",
                    disabled: thinking(),
                    onclick: move |_| send(),
                    "Send"
                }
            }
        }
    }
}
