//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use chat::Conversation;

use crate::components::rain_host::RainHost;
use crate::pages::terminal::TerminalPage;
use crate::state::chat::ChatState;
use crate::util::{clock, env, session};

/// Root application component.
///
/// Owns the single conversation instance for the page and provides it to
/// child components as `RwSignal<ChatState>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = env::read_widget_config();
    if config.is_configured() {
        log::info!("Matrix terminal initialized with webhook");
    } else {
        log::warn!("No webhook URL configured. Set window.ENV.N8N_WEBHOOK_URL.");
    }

    let conversation = Conversation::with_config(&config, session::resolve_session_id(), clock::entropy_seed());
    let chat = RwSignal::new(ChatState::new(conversation, clock::now_ms()));
    provide_context(chat);

    view! {
        <Title text="Matrix Terminal"/>
        <RainHost/>
        <TerminalPage/>
    }
}
