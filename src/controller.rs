//! Roster view controller: load, signup, and unregister orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is built once by the root component. It owns the backend
//! handle and the view handles, and every user action is one async method on
//! it. Signup resynchronizes by re-running the full load after the server
//! accepts the registration; unregister patches the single affected entry and
//! falls back to a full load when that entry is no longer rendered.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error to the caller. Load failures land in the
//! roster state as an inline error block; signup/unregister failures become a
//! transient error message. The controller stays usable after any failure.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::net::api::{ActivitiesApi, HttpActivitiesApi};
use crate::state::form::SignupForm;
use crate::state::message::{MESSAGE_TTL, MessageKind, MessageState};
use crate::state::roster::{RosterState, UnregisterEvent};

pub const LOAD_FAILED: &str = "Failed to load activities";
pub const SIGNUP_SUCCEEDED: &str = "Signed up successfully!";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const UNREGISTER_SUCCEEDED: &str = "Unregistered successfully";
pub const UNREGISTER_FAILED: &str = "Failed to unregister";

/// The view handles the controller paints into.
pub trait RosterView {
    /// Mutate the rendered roster.
    fn update_roster(&self, f: impl FnOnce(&mut RosterState));
    /// Snapshot of the signup form at submission time.
    fn signup_form(&self) -> SignupForm;
    /// Clear the email input and reset the selection to the placeholder.
    fn reset_form(&self);
    /// Show a transient message, replacing any current one. Returns the
    /// sequence number the matching hide must carry.
    fn show_message(&self, kind: MessageKind, text: String) -> u64;
    /// Arrange for the message shown under `seq` to be hidden after
    /// [`MESSAGE_TTL`].
    fn schedule_hide(&self, seq: u64);
}

/// Roster view controller generic over its backend and view.
#[derive(Clone, Debug)]
pub struct RosterController<A, V> {
    api: A,
    view: V,
}

/// The controller the browser app runs.
pub type AppController = RosterController<HttpActivitiesApi, SignalRosterView>;

impl<A, V> RosterController<A, V>
where
    A: ActivitiesApi,
    V: RosterView,
{
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch the collection and repaint every card and option from it.
    pub async fn load_and_render(&self) {
        match self.api.list_activities().await {
            Ok(collection) => {
                leptos::logging::log!("activities loaded: count={}", collection.len());
                self.view.update_roster(|roster| roster.render(&collection));
            }
            Err(err) => {
                leptos::logging::warn!("activities load failed: {err}");
                let reason = err.user_message(LOAD_FAILED);
                self.view.update_roster(|roster| roster.fail(reason));
            }
        }
    }

    /// Validate the form, submit the signup, then resync from the server.
    pub async fn signup(&self) {
        let request = match self.view.signup_form().validate() {
            Ok(request) => request,
            Err(err) => {
                self.notify(MessageKind::Error, err.to_string());
                return;
            }
        };

        match self.api.signup(&request.activity, &request.email).await {
            Ok(response) => {
                let text = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| SIGNUP_SUCCEEDED.to_owned());
                self.notify(MessageKind::Success, text);
                self.view.reset_form();
                self.load_and_render().await;
            }
            Err(err) => {
                leptos::logging::warn!("signup failed: activity={} error={err}", request.activity);
                self.notify(MessageKind::Error, err.user_message(SIGNUP_FAILED));
            }
        }
    }

    /// Remove one participant; on success drop exactly the entry `event`
    /// points at, or resync when that entry is no longer rendered. Events
    /// missing the activity or email are ignored.
    pub async fn unregister(&self, event: UnregisterEvent) {
        if !event.is_actionable() {
            return;
        }

        match self.api.unregister(&event.activity, &event.email).await {
            Ok(response) => {
                let text = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UNREGISTER_SUCCEEDED.to_owned());
                self.notify(MessageKind::Success, text);
                let mut patched = false;
                self.view.update_roster(|roster| patched = roster.remove_entry(&event));
                if !patched {
                    // Entry handle went stale (resync while in flight).
                    self.load_and_render().await;
                }
            }
            Err(err) => {
                leptos::logging::warn!("unregister failed: activity={} error={err}", event.activity);
                self.notify(MessageKind::Error, err.user_message(UNREGISTER_FAILED));
            }
        }
    }

    fn notify(&self, kind: MessageKind, text: String) {
        let seq = self.view.show_message(kind, text);
        self.view.schedule_hide(seq);
    }
}

/// Reactive view handles backing the Leptos page.
#[derive(Clone, Copy, Debug)]
pub struct SignalRosterView {
    pub roster: RwSignal<RosterState>,
    pub form: RwSignal<SignupForm>,
    pub message: RwSignal<MessageState>,
}

impl SignalRosterView {
    /// Create the signals. Must run inside a reactive owner.
    pub fn new() -> Self {
        Self {
            roster: RwSignal::new(RosterState::default()),
            form: RwSignal::new(SignupForm::default()),
            message: RwSignal::new(MessageState::default()),
        }
    }
}

impl Default for SignalRosterView {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterView for SignalRosterView {
    fn update_roster(&self, f: impl FnOnce(&mut RosterState)) {
        self.roster.update(f);
    }

    fn signup_form(&self) -> SignupForm {
        self.form.get_untracked()
    }

    fn reset_form(&self) {
        self.form.update(SignupForm::reset);
    }

    fn show_message(&self, kind: MessageKind, text: String) -> u64 {
        let mut seq = 0;
        self.message.update(|m| seq = m.show(kind, text));
        seq
    }

    fn schedule_hide(&self, seq: u64) {
        #[cfg(feature = "csr")]
        {
            let message = self.message;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(MESSAGE_TTL).await;
                message.update(|m| {
                    m.expire(seq);
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (seq, MESSAGE_TTL);
        }
    }
}
