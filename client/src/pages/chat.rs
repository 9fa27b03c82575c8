//! The assistant chat page.
//!
//! Probes backend health once on load and reports the result in the
//! transcript. The probe runs independently of the query flow, so a failed
//! probe never blocks submissions.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
#[cfg(feature = "hydrate")]
use crate::net::agent::{AgentTransport, HttpTransport};
use crate::state::chat::ChatState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = HttpTransport::default().check_health().await;
            chat.update(|c| c.apply_health(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = chat;
    });

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1>"POS Assistant"</h1>
                <p class="chat-page__subtitle">"Ask about sales, or tell the agent to update your menu."</p>
            </header>
            <main class="chat-page__body">
                <ChatPanel/>
            </main>
        </div>
    }
}
