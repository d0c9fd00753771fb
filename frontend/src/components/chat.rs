use std::sync::LazyLock;

use leptos::ev;
use leptos::prelude::*;
use resume_chat_core::{Chunk, Highlighter, Message, Role};

use crate::state::AppState;

static HIGHLIGHTER: LazyLock<Highlighter> = LazyLock::new(Highlighter::default);

/// Chat panel: error banner, thread, starter prompts and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <main class="chat-area" class:open=move || state.chat_open.get()>
            <div class="chat-header">
                <span>"Ask me anything"</span>
                <button class="close-btn" on:click=move |_| state.chat_open.set(false)>
                    "×"
                </button>
            </div>

            // Error banner
            {move || {
                state.error.get().map(|err| {
                    view! {
                        <div class="error-banner">
                            <span>{err}</span>
                            <button on:click=move |_| state.dismiss_error()>"Dismiss"</button>
                        </div>
                    }
                })
            }}

            // Messages
            <div class="messages-container">
                <For
                    each=move || state.messages.get()
                    key=|m| m.id.clone()
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>
                {move || {
                    state
                        .busy
                        .get()
                        .then(|| view! { <div class="message assistant typing">"…"</div> })
                }}
                <Suggestions />
            </div>

            <ChatInput />
        </main>
    }
}

/// Starter prompts, shown only on an empty idle thread.
#[component]
fn Suggestions() -> impl IntoView {
    let state = expect_context::<AppState>();

    move || {
        let prompts = state.suggestions();
        (!prompts.is_empty()).then(|| {
            view! {
                <div class="suggestions">
                    {prompts
                        .iter()
                        .map(|&prompt| {
                            view! {
                                <button
                                    class="suggestion"
                                    on:click=move |_| state.choose_suggestion(prompt)
                                >
                                    {prompt}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
    }
}

/// A single chat message bubble. Assistant text is highlighted.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = match message.role {
        Role::User => "message user",
        Role::Assistant => "message assistant",
    };

    let body = match message.role {
        Role::User => message.content.into_any(),
        Role::Assistant => view! { <RichText content=message.content /> }.into_any(),
    };

    view! { <div class=css_class>{body}</div> }
}

/// Emphasis and clickable keyword tags for one assistant reply.
#[component]
fn RichText(content: String) -> impl IntoView {
    let state = expect_context::<AppState>();

    HIGHLIGHTER
        .render(&content)
        .into_iter()
        .map(|segment| {
            let chunks = segment
                .chunks
                .into_iter()
                .map(|chunk| render_chunk(state, chunk))
                .collect_view();
            if segment.emphasized {
                view! { <strong>{chunks}</strong> }.into_any()
            } else {
                chunks.into_any()
            }
        })
        .collect_view()
}

fn render_chunk(state: AppState, chunk: Chunk) -> AnyView {
    match chunk {
        Chunk::Text(text) => text.into_any(),
        Chunk::Tag { text, category } => {
            let token = text.clone();
            view! {
                <button
                    class=category.css_class()
                    title=category.label()
                    on:click=move |_| state.activate_tag(token.clone())
                >
                    {text}
                </button>
            }
            .into_any()
        }
    }
}

/// Chat input form with textarea and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let is_sending = move || state.busy.get();

    let send = move || {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() || state.busy.get_untracked() {
            return;
        }
        set_input.set(String::new());
        state.send_message(text);
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <textarea
                    rows="1"
                    placeholder="Ask about projects, skills, education… (Enter to send)"
                    prop:value=input
                    on:input=move |ev| {
                        set_input.set(event_target_value(&ev));
                    }
                    on:keydown=on_keydown
                    disabled=is_sending
                />
                <button
                    class="send-btn"
                    on:click=move |_| send()
                    disabled=move || is_sending() || input.get().trim().is_empty()
                >
                    {move || if is_sending() { "Thinking…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
