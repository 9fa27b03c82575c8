//! Chat transcript, merchant selector, example queries and query input.

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::config::{EXAMPLE_QUERIES, MERCHANTS, default_merchant_id};
#[cfg(feature = "hydrate")]
use crate::net::agent::{AgentTransport, HttpTransport};
use crate::state::chat::ChatState;

/// Chat panel: one request/response cycle per submitted query.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let merchant = RwSignal::new(default_merchant_id().to_owned());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.scroll_seq);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let merchant_id = merchant.get_untracked();
        let Some(request) = chat.try_update(|c| c.begin_query(&text, &merchant_id)).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = HttpTransport::default().send_query(&request).await;
            chat.update(|c| c.finish_query(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__toolbar">
                <label class="chat-panel__merchant">
                    "Merchant "
                    <select
                        id="merchant-select"
                        prop:value=move || merchant.get()
                        on:change=move |ev| merchant.set(event_target_value(&ev))
                    >
                        {MERCHANTS
                            .iter()
                            .map(|m| view! { <option value=m.id>{m.name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="chat-panel__examples">
                    {EXAMPLE_QUERIES
                        .iter()
                        .map(|example| {
                            let on_example = move |_| {
                                input.set((*example).to_owned());
                                do_send();
                            };
                            view! {
                                <button class="example-query-btn" on:click=on_example>{*example}</button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="chat-messages" node_ref=messages_ref>
                <For
                    each=move || chat.get().entries
                    key=|entry| entry.id.clone()
                    children=move |entry| view! { <MessageBubble message=entry.view/> }
                />
            </div>

            <div class="chat-panel__input-row">
                <input
                    id="query-input"
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about your sales or menu..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id="send-query-btn" class="btn btn--primary chat-panel__send" on:click=on_click>
                    "Send"
                </button>
            </div>

            <div class="loading-overlay" class:active=move || chat.with(|c| c.busy)>
                <div class="spinner"></div>
                <p>"Processing your request..."</p>
            </div>
        </div>
    }
}
