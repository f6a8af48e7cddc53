//! Terminal transcript and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits user text through the shared `Conversation`, performs the webhook
//! exchange on a spawned task, and types bot replies out one character per
//! `REVEAL_TICK_MS`.

use leptos::prelude::*;

use chat::{Submission, WebhookRequest};
#[cfg(feature = "csr")]
use chat::conversation::REVEAL_TICK_MS;

use crate::net::webhook;
use crate::state::chat::ChatState;
use crate::util::clock;

/// Transcript view with typing indicator and message input.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the latest message in view as messages arrive and reveal.
    Effect::new(move || {
        chat.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let stamp = chat.with_untracked(|state| state.stamp(clock::now_ms(), clock::iso_now()));
        let Some(submission) = chat.try_update(|state| state.conversation.submit(&text, &stamp)) else {
            return;
        };

        match submission {
            Submission::Rejected(reason) => {
                log::debug!("submission ignored: {reason:?}");
            }
            Submission::Failed(err) => {
                log::warn!("submission failed before sending: {err}");
                input.set(String::new());
            }
            Submission::Dispatched(request) => {
                input.set(String::new());
                leptos::task::spawn_local(exchange(chat, request));
            }
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.with(|state| state.conversation.is_pending());

    view! {
        <section class="chat-panel">
            <div class="chat-panel__messages" id="chat-messages" node_ref=messages_ref>
                <div class="message system-message">
                    <span class="timestamp">"[00:00:00]"</span>
                    <span class="message-text">"SYSTEM ONLINE. Connection to the Matrix established."</span>
                </div>

                {move || {
                    chat.with(|state| {
                        state
                            .conversation
                            .transcript()
                            .iter()
                            .map(|msg| {
                                let class = format!("message {}-message", msg.role.as_str());
                                let timestamp = format!("[{}]", msg.timestamp);
                                let text = msg.visible_text().to_owned();
                                view! {
                                    <div class=class>
                                        <span class="timestamp">{timestamp}</span>
                                        <span class="message-text">{text}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}

                {move || {
                    chat.with(ChatState::typing_since)
                        .map(|since| {
                            view! {
                                <div class="message bot-message typing-indicator">
                                    <span class="timestamp">{format!("[{since}]")}</span>
                                    <span class="message-text">
                                        "Agent is typing"
                                        <span class="loading">"..."</span>
                                    </span>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="chat-panel__input-row">
                <span class="chat-panel__prompt">">"</span>
                <input
                    class="chat-panel__input"
                    id="message-input"
                    type="text"
                    placeholder="Enter message..."
                    autocomplete="off"
                    node_ref=input_ref
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="chat-panel__send" id="send-button" on:click=on_click disabled=move || !can_send()>
                    "SEND"
                </button>
            </div>
        </section>
    }
}

/// Perform one webhook exchange and resolve it into the transcript.
async fn exchange(chat: RwSignal<ChatState>, request: WebhookRequest) {
    let result = webhook::fetch_reply(&request).await;
    let start_reveal = chat
        .try_update(|state| state.resolve(result, clock::now_ms()))
        .unwrap_or(false);
    if start_reveal {
        reveal(chat).await;
    }
}

/// Type out pending bot replies until every one is fully visible.
async fn reveal(chat: RwSignal<ChatState>) {
    #[cfg(feature = "csr")]
    {
        while chat.try_update(ChatState::reveal_tick).unwrap_or(false) {
            gloo_timers::future::TimeoutFuture::new(REVEAL_TICK_MS).await;
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        chat.update(|state| {
            state.conversation.reveal_all();
            state.reveal_running = false;
        });
    }
}
