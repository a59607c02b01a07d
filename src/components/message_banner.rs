//! Shared transient message region.

use leptos::prelude::*;

use crate::state::message::MessageState;

/// Renders the current transient message, or an empty hidden region.
#[component]
pub fn MessageBanner(message: RwSignal<MessageState>) -> impl IntoView {
    view! {
        <div id="message" class=move || message.with(MessageState::class) role="status">
            {move || message.with(|m| m.text().to_owned())}
        </div>
    }
}
