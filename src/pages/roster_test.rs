use super::*;
use crate::net::types::{Activity, ActivityCollection};

fn yoga_collection() -> ActivityCollection {
    ActivityCollection::from_entries(vec![(
        "Yoga".to_owned(),
        Activity {
            description: "d".to_owned(),
            schedule: "Mon".to_owned(),
            max_participants: Some(2),
            participants: vec!["a@x.com".to_owned()],
        },
    )])
}

#[test]
fn list_content_shows_loading_before_first_read() {
    let state = RosterState::default();
    assert_eq!(list_content(&state), ListContent::Loading("Loading activities..."));
}

#[test]
fn list_content_shows_inline_error_with_reason() {
    let mut state = RosterState::default();
    state.fail("Failed to load activities");
    assert_eq!(
        list_content(&state),
        ListContent::Failed("Unable to load activities: Failed to load activities".to_owned())
    );
}

#[test]
fn list_content_shows_one_card_per_activity() {
    let mut state = RosterState::default();
    state.render(&yoga_collection());
    let ListContent::Cards(cards) = list_content(&state) else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Yoga");
    assert_eq!(cards[0].badge(), "1/2");
    assert_eq!(cards[0].entries[0].email, "a@x.com");
}

#[test]
fn list_content_ready_with_no_activities_is_empty() {
    let mut state = RosterState::default();
    state.render(&ActivityCollection::default());
    assert_eq!(list_content(&state), ListContent::Cards(Vec::new()));
}

#[test]
fn list_content_failure_after_render_drops_cards() {
    let mut state = RosterState::default();
    state.render(&yoga_collection());
    state.fail("Not Found");
    assert_eq!(
        list_content(&state),
        ListContent::Failed("Unable to load activities: Not Found".to_owned())
    );
}
