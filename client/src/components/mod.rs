//! Reusable UI components for the terminal page.
//!
//! DESIGN
//! ======
//! Components read shared `RwSignal<ChatState>` from context; none of them
//! owns conversation state.

pub mod chat_panel;
pub mod rain_host;
pub mod status_bar;
