//! Rendered roster state: one card per activity plus the selection options.
//!
//! DESIGN
//! ======
//! This is what the page paints. A full render replaces everything from an
//! authoritative [`ActivityCollection`]; unregister patches a single entry in
//! place. Entries carry an [`EntryId`] that is never reused, so a stale
//! remove event from an earlier render cannot hit a newer entry.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::net::types::ActivityCollection;

/// Shown in the badge when the server declares no capacity.
pub const UNKNOWN_CAPACITY: &str = "?";

/// Handle to one rendered participant entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

/// One participant line inside a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: EntryId,
    pub email: String,
}

/// A rendered activity card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: Option<u32>,
    /// Count shown in the badge. Equal to `entries.len()` after a render and
    /// decremented (never below zero) on each successful unregister.
    pub current: usize,
    pub entries: Vec<RosterEntry>,
}

impl ActivityCard {
    /// Badge text, `current/max` with `?` for an undeclared capacity.
    #[must_use]
    pub fn badge(&self) -> String {
        match self.max_participants {
            Some(max) => format!("{}/{max}", self.current),
            None => format!("{}/{UNKNOWN_CAPACITY}", self.current),
        }
    }

    /// Schedule line as displayed under the description.
    #[must_use]
    pub fn schedule_line(&self) -> String {
        format!("Schedule: {}", self.schedule)
    }
}

/// Lifecycle of the activity list area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RosterStatus {
    /// First read still in flight.
    #[default]
    Loading,
    /// Cards reflect the last successful read (plus local unregister patches).
    Ready,
    /// The last read failed; the list area shows this reason instead of cards.
    Failed(String),
}

/// An unregister request raised from a rendered entry's remove button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnregisterEvent {
    pub activity: String,
    pub email: String,
    pub entry: EntryId,
}

impl UnregisterEvent {
    /// Both identifying fields are present.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        !self.activity.is_empty() && !self.email.is_empty()
    }
}

/// State of the whole roster area.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    pub status: RosterStatus,
    pub cards: Vec<ActivityCard>,
    /// Selection options (activity names) in display order. The placeholder
    /// option is part of the page, not of this list.
    pub options: Vec<String>,
    next_entry_id: u64,
}

impl RosterState {
    /// Replace all cards and options with `collection`, in its order.
    pub fn render(&mut self, collection: &ActivityCollection) {
        self.cards.clear();
        self.options.clear();
        for (name, activity) in collection.iter() {
            let entries: Vec<RosterEntry> = activity
                .participants
                .iter()
                .map(|email| RosterEntry {
                    id: self.allocate_entry_id(),
                    email: email.clone(),
                })
                .collect();
            self.cards.push(ActivityCard {
                name: name.to_owned(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                max_participants: activity.max_participants,
                current: entries.len(),
                entries,
            });
            self.options.push(name.to_owned());
        }
        self.status = RosterStatus::Ready;
    }

    /// Replace the list area with a load failure. Prior cards are dropped.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.cards.clear();
        self.options.clear();
        self.status = RosterStatus::Failed(reason.into());
    }

    /// Remove the entry `event` points at and decrement its card's count.
    ///
    /// Returns `false` and leaves state untouched when the card or entry is
    /// no longer rendered (e.g. a resync happened in between).
    pub fn remove_entry(&mut self, event: &UnregisterEvent) -> bool {
        let Some(card) = self.cards.iter_mut().find(|card| card.name == event.activity) else {
            return false;
        };
        let Some(index) = card
            .entries
            .iter()
            .position(|entry| entry.id == event.entry && entry.email == event.email)
        else {
            return false;
        };
        card.entries.remove(index);
        card.current = card.current.saturating_sub(1);
        true
    }

    /// Card for `name`, if rendered.
    #[must_use]
    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards.iter().find(|card| card.name == name)
    }

    fn allocate_entry_id(&mut self) -> EntryId {
        let id = EntryId(self.next_entry_id);
        self.next_entry_id += 1;
        id
    }
}
