//! Floating chat widget talking to `/api/chat`.
//!
//! SYSTEM CONTEXT
//! ==============
//! One message per request, no history. While a request is pending the
//! input and send button are disabled; afterwards the input regains focus
//! and the transcript scrolls to the newest message.

use leptos::html;
use leptos::prelude::*;

use crate::state::chat::ChatState;

const GREETING: &str = "Hi! Ask me anything about my projects, experience or skills.";

fn focus_input(input_ref: NodeRef<html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = input_ref.get_untracked() {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input_ref;
    }
}

fn scroll_transcript(messages_ref: NodeRef<html::Div>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = messages_ref.get_untracked() {
            crate::util::dom::scroll_to_bottom(&el);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = messages_ref;
    }
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let input_ref = NodeRef::<html::Input>::new();
    let messages_ref = NodeRef::<html::Div>::new();

    let send = move || {
        let Some(text) = chat.try_update(|c| c.begin_send(&input.get_untracked())).flatten() else {
            return;
        };
        input.set(String::new());
        request_animation_frame(move || scroll_transcript(messages_ref));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_chat(&text).await;
            if let Err(e) = &result {
                log::error!("Chat error: {e}");
            }
            chat.update(|c| c.finish_send(result));
            request_animation_frame(move || {
                scroll_transcript(messages_ref);
                focus_input(input_ref);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let on_toggle = move |_| {
        if chat.try_update(ChatState::toggle).unwrap_or(false) {
            request_animation_frame(move || focus_input(input_ref));
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    let pending = move || chat.with(|c| c.pending);

    view! {
        <div class="chat-widget">
            <button class="chat-toggle" id="chatToggle" aria-label="Open chat" on:click=on_toggle>
                <i class="fas fa-comments"></i>
            </button>
            <div class="chat-window" id="chatWindow" class:active=move || chat.with(|c| c.open)>
                <div class="chat-header">
                    <span class="chat-title">"Ask me anything"</span>
                    <button
                        class="chat-close"
                        id="chatClose"
                        aria-label="Close chat"
                        on:click=move |_| chat.update(ChatState::close)
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="chat-messages" id="chatMessages" node_ref=messages_ref>
                    <div class="chat-message bot-message">
                        <div class="message-content">{GREETING}</div>
                    </div>
                    {move || {
                        chat.with(|c| {
                            c.messages
                                .iter()
                                .map(|msg| {
                                    view! {
                                        <div class=msg.sender.css_class()>
                                            <div class="message-content">{msg.text.clone()}</div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </div>
                <div class="chat-input-area">
                    <input
                        type="text"
                        class="chat-input"
                        id="chatInput"
                        placeholder="Type your message..."
                        maxlength=records::MAX_CHAT_MESSAGE_CHARS.to_string()
                        node_ref=input_ref
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        disabled=pending
                    />
                    <button class="chat-send" id="chatSend" aria-label="Send" on:click=move |_| send() disabled=pending>
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}
