//! Activities page: card list, signup form, and message region.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. It triggers the initial load, forwards form submission and
//! remove clicks to the controller, and renders the controller's signals.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::message_banner::MessageBanner;
use crate::controller::AppController;
use crate::state::roster::{ActivityCard as CardData, RosterState, RosterStatus, UnregisterEvent};
use crate::util::task::spawn;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Inline error shown in place of the card list when the read fails.
fn load_failure_text(reason: &str) -> String {
    format!("Unable to load activities: {reason}")
}

#[component]
pub fn RosterPage(controller: AppController) -> impl IntoView {
    let handles = *controller.view();
    let roster = handles.roster;
    let form = handles.form;

    {
        let controller = controller.clone();
        spawn(async move { controller.load_and_render().await });
    }

    let on_unregister = Callback::new({
        let controller = controller.clone();
        move |event: UnregisterEvent| {
            let controller = controller.clone();
            spawn(async move { controller.unregister(event).await });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        spawn(async move { controller.signup().await });
    };

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <div id="activities-list">
                    {move || roster.with(|state| activity_list(state, on_unregister))}
                </div>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <form id="signup-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Student Email:"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="your-email@mergington.edu"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="activity">"Select Activity:"</label>
                        <select
                            id="activity"
                            prop:value=move || form.with(|f| f.activity.clone())
                            on:change=move |ev| form.update(|f| f.activity = event_target_value(&ev))
                        >
                            <option value="">{SELECT_PLACEHOLDER}</option>
                            {move || roster.with(activity_options)}
                        </select>
                    </div>
                    <button type="submit">"Sign Up"</button>
                </form>
                <MessageBanner message=handles.message/>
            </section>
        </main>
    }
}

/// What the activity list area shows for a given roster state.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ListContent {
    Loading(&'static str),
    Failed(String),
    Cards(Vec<CardData>),
}

fn list_content(state: &RosterState) -> ListContent {
    match &state.status {
        RosterStatus::Loading => ListContent::Loading(LOADING_TEXT),
        RosterStatus::Failed(reason) => ListContent::Failed(load_failure_text(reason)),
        RosterStatus::Ready => ListContent::Cards(state.cards.clone()),
    }
}

fn activity_list(state: &RosterState, on_unregister: Callback<UnregisterEvent>) -> AnyView {
    match list_content(state) {
        ListContent::Loading(text) => view! { <p>{text}</p> }.into_any(),
        ListContent::Failed(text) => view! { <p class="error">{text}</p> }.into_any(),
        ListContent::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <ActivityCard card=card on_unregister=on_unregister/> })
            .collect_view()
            .into_any(),
    }
}

fn activity_options(state: &RosterState) -> AnyView {
    state
        .options
        .iter()
        .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
        .collect_view()
        .into_any()
}
