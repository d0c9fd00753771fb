mod api;
mod components;
mod models;
mod state;
mod storage;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatArea;
use components::sidebar::Sidebar;
use state::{AppState, Tab};

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide();

    // Load the résumé once on mount
    state.load_resume();

    view! {
        <nav class="tabs">
            <button
                class:active=move || state.active_tab.get() == Tab::Profile
                on:click=move |_| state.active_tab.set(Tab::Profile)
            >
                "Profile"
            </button>
            <button
                class:active=move || state.active_tab.get() == Tab::Chat
                on:click=move |_| state.open_chat()
            >
                "Chat"
            </button>
        </nav>
        <div class="app-container" class:show-chat=move || state.active_tab.get() == Tab::Chat>
            <Sidebar />
            <ChatArea />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
