//! Terminal page: header, chat panel, and status bar over the rain canvas.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::status_bar::StatusBar;

#[component]
pub fn TerminalPage() -> impl IntoView {
    view! {
        <main class="terminal">
            <header class="terminal__header">
                <span class="terminal__title">"MATRIX TERMINAL v1.0"</span>
                <span class="terminal__subtitle">"// secure channel"</span>
            </header>
            <ChatPanel/>
            <StatusBar/>
        </main>
    }
}
