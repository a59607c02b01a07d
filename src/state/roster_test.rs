use super::*;
use crate::net::types::Activity;

// =============================================================
// Helpers
// =============================================================

fn activity(max: Option<u32>, participants: &[&str]) -> Activity {
    Activity {
        description: "d".to_owned(),
        schedule: "Mon".to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn collection(entries: Vec<(&str, Activity)>) -> ActivityCollection {
    ActivityCollection::from_entries(entries.into_iter().map(|(n, a)| (n.to_owned(), a)).collect())
}

fn event_for(state: &RosterState, activity: &str, email: &str) -> UnregisterEvent {
    let entry = state
        .card(activity)
        .and_then(|card| card.entries.iter().find(|e| e.email == email))
        .map(|e| e.id)
        .unwrap();
    UnregisterEvent {
        activity: activity.to_owned(),
        email: email.to_owned(),
        entry,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn roster_state_default_is_loading_and_empty() {
    let state = RosterState::default();
    assert_eq!(state.status, RosterStatus::Loading);
    assert!(state.cards.is_empty());
    assert!(state.options.is_empty());
}

// =============================================================
// render
// =============================================================

#[test]
fn render_single_activity_scenario() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Yoga", activity(Some(2), &["a@x.com"]))]));

    assert_eq!(state.status, RosterStatus::Ready);
    assert_eq!(state.cards.len(), 1);
    let card = &state.cards[0];
    assert_eq!(card.name, "Yoga");
    assert_eq!(card.badge(), "1/2");
    assert_eq!(card.entries.len(), 1);
    assert_eq!(card.entries[0].email, "a@x.com");
    assert_eq!(state.options, vec!["Yoga".to_owned()]);
}

#[test]
fn render_badge_uses_placeholder_without_capacity() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Drama", activity(None, &["a@x.com", "b@x.com"]))]));
    assert_eq!(state.cards[0].badge(), "2/?");
}

#[test]
fn render_badge_shows_declared_zero_capacity() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Closed", activity(Some(0), &[]))]));
    assert_eq!(state.cards[0].badge(), "0/0");
}

#[test]
fn render_keeps_collection_order() {
    let mut state = RosterState::default();
    state.render(&collection(vec![
        ("Zumba", activity(None, &[])),
        ("Art", activity(None, &[])),
        ("Chess", activity(None, &[])),
    ]));
    let names: Vec<&str> = state.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zumba", "Art", "Chess"]);
    assert_eq!(state.options, vec!["Zumba".to_owned(), "Art".to_owned(), "Chess".to_owned()]);
}

#[test]
fn render_replaces_previous_cards_and_options() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Old", activity(None, &["a@x.com"]))]));
    state.render(&collection(vec![("New", activity(Some(5), &[]))]));
    assert_eq!(state.cards.len(), 1);
    assert_eq!(state.cards[0].name, "New");
    assert_eq!(state.options, vec!["New".to_owned()]);
}

#[test]
fn render_clears_previous_failure() {
    let mut state = RosterState::default();
    state.fail("boom");
    state.render(&collection(vec![("Yoga", activity(None, &[]))]));
    assert_eq!(state.status, RosterStatus::Ready);
}

#[test]
fn render_entry_ids_are_unique_across_renders() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Yoga", activity(None, &["a@x.com", "b@x.com"]))]));
    let first: Vec<EntryId> = state.cards[0].entries.iter().map(|e| e.id).collect();
    state.render(&collection(vec![("Yoga", activity(None, &["a@x.com", "b@x.com"]))]));
    let second: Vec<EntryId> = state.cards[0].entries.iter().map(|e| e.id).collect();
    assert_ne!(first[0], first[1]);
    assert!(second.iter().all(|id| !first.contains(id)));
}

#[test]
fn schedule_line_prefixes_label() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Yoga", activity(None, &[]))]));
    assert_eq!(state.cards[0].schedule_line(), "Schedule: Mon");
}

// =============================================================
// fail
// =============================================================

#[test]
fn fail_drops_cards_and_records_reason() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Yoga", activity(None, &["a@x.com"]))]));
    state.fail("Failed to load activities");
    assert!(state.cards.is_empty());
    assert!(state.options.is_empty());
    assert_eq!(state.status, RosterStatus::Failed("Failed to load activities".to_owned()));
}

// =============================================================
// remove_entry
// =============================================================

#[test]
fn remove_entry_drops_one_entry_and_decrements() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Yoga", activity(Some(3), &["a@x.com", "b@x.com"]))]));
    let event = event_for(&state, "Yoga", "a@x.com");

    assert!(state.remove_entry(&event));
    let card = state.card("Yoga").unwrap();
    assert_eq!(card.badge(), "1/3");
    assert_eq!(card.entries.len(), 1);
    assert_eq!(card.entries[0].email, "b@x.com");
}

#[test]
fn remove_entry_targets_handle_not_first_matching_email() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Yoga", activity(None, &["dup@x.com", "dup@x.com"]))]));
    let second = state.cards[0].entries[1].id;
    let event = UnregisterEvent {
        activity: "Yoga".to_owned(),
        email: "dup@x.com".to_owned(),
        entry: second,
    };
    assert!(state.remove_entry(&event));
    let card = state.card("Yoga").unwrap();
    assert_eq!(card.entries.len(), 1);
    assert_ne!(card.entries[0].id, second);
}

#[test]
fn remove_entry_floors_count_at_zero() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Yoga", activity(None, &["a@x.com"]))]));
    let event = event_for(&state, "Yoga", "a@x.com");
    state.cards[0].current = 0;
    assert!(state.remove_entry(&event));
    assert_eq!(state.cards[0].current, 0);
    assert!(state.cards[0].entries.is_empty());
}

#[test]
fn remove_entry_stale_handle_is_ignored() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Yoga", activity(None, &["a@x.com"]))]));
    let stale = event_for(&state, "Yoga", "a@x.com");
    state.render(&collection(vec![("Yoga", activity(None, &["a@x.com"]))]));

    assert!(!state.remove_entry(&stale));
    assert_eq!(state.cards[0].current, 1);
    assert_eq!(state.cards[0].entries.len(), 1);
}

#[test]
fn remove_entry_unknown_activity_is_ignored() {
    let mut state = RosterState::default();
    state.render(&collection(vec![("Yoga", activity(None, &["a@x.com"]))]));
    let mut event = event_for(&state, "Yoga", "a@x.com");
    event.activity = "Chess".to_owned();
    assert!(!state.remove_entry(&event));
    assert_eq!(state.cards[0].current, 1);
}

#[test]
fn unregister_event_requires_activity_and_email() {
    let event = UnregisterEvent {
        activity: "Yoga".to_owned(),
        email: String::new(),
        entry: EntryId(0),
    };
    assert!(!event.is_actionable());
    let event = UnregisterEvent {
        activity: String::new(),
        email: "a@x.com".to_owned(),
        entry: EntryId(0),
    };
    assert!(!event.is_actionable());
    let event = UnregisterEvent {
        activity: "Yoga".to_owned(),
        email: "a@x.com".to_owned(),
        entry: EntryId(0),
    };
    assert!(event.is_actionable());
}
