//! Bottom status bar: message counter, webhook link state, session id.

use leptos::prelude::*;

use crate::state::chat::ChatState;

#[component]
pub fn StatusBar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let count = move || chat.with(|state| format!("Messages: {}", state.conversation.message_count()));
    let link = move || chat.with(ChatState::link_label);
    let session = move || chat.with(|state| state.conversation.session_id().to_owned());

    view! {
        <footer class="status-bar">
            <span class="status-bar__count" id="message-count">{count}</span>
            <span class="status-bar__link">{link}</span>
            <span class="status-bar__session" title=session>{session}</span>
        </footer>
    }
}
