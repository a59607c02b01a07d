//! Card component for one activity and its participant roster.
//!
//! DESIGN
//! ======
//! The card is a pure projection of [`CardData`]. Remove buttons do not act on
//! their own; they raise an [`UnregisterEvent`] carrying the activity, email,
//! and entry handle, and the page hands it to the controller.

use leptos::prelude::*;

use crate::state::roster::{ActivityCard as CardData, RosterEntry, UnregisterEvent};

pub const EMPTY_ROSTER_TEXT: &str = "No participants yet";

#[component]
pub fn ActivityCard(card: CardData, on_unregister: Callback<UnregisterEvent>) -> impl IntoView {
    let badge = card.badge();
    let schedule = card.schedule_line();
    let CardData {
        name,
        description,
        entries,
        ..
    } = card;

    let roster = if entries.is_empty() {
        view! { <div class="participants-empty">{EMPTY_ROSTER_TEXT}</div> }.into_any()
    } else {
        let items = entries
            .into_iter()
            .map(|entry| participant_item(&name, entry, on_unregister))
            .collect_view();
        view! { <ul class="participants-list">{items}</ul> }.into_any()
    };

    view! {
        <div class="activity-card">
            <div class="activity-card__header">
                <h4>{name.clone()}</h4>
                <span class="participant-count">{badge}</span>
            </div>
            <p>{description}</p>
            <p>{schedule}</p>
            <div class="participants">
                <h5>"Participants"</h5>
                {roster}
            </div>
        </div>
    }
}

fn participant_item(activity: &str, entry: RosterEntry, on_unregister: Callback<UnregisterEvent>) -> impl IntoView {
    let label = format!("Unregister {}", entry.email);
    let event = UnregisterEvent {
        activity: activity.to_owned(),
        email: entry.email.clone(),
        entry: entry.id,
    };

    view! {
        <li class="participant">
            <span class="participant__email">{entry.email}</span>
            <button
                type="button"
                class="participant__remove"
                title=label.clone()
                aria-label=label
                on:click=move |_| on_unregister.run(event.clone())
            >
                "✕"
            </button>
        </li>
    }
}
