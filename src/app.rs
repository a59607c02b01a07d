//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::controller::{AppController, RosterController, SignalRosterView};
use crate::net::api::HttpActivitiesApi;
use crate::pages::roster::RosterPage;

/// Root application component.
///
/// Builds the single roster controller (same-origin backend plus the page's
/// signals) and hands it to the activities page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller: AppController = RosterController::new(HttpActivitiesApi::default(), SignalRosterView::new());

    view! {
        <Title text="Mergington High School Activities"/>
        <RosterPage controller=controller/>
    }
}
