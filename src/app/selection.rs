//! Saved and RSVP'd event ids.
//!
//! [`SelectionStore`] records the user's bookmarking and attendance intent as two
//! independent id sets. It knows nothing about the catalog: toggling an id no
//! event carries is accepted and simply never shows up in a derived view.

use std::collections::HashSet;

/// Session-scoped save/RSVP membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    saved_ids: HashSet<String>,
    rsvp_ids: HashSet<String>,
}

impl SelectionStore {
    /// Flips saved membership for `event_id`. Returns the new membership.
    pub fn toggle_saved(&mut self, event_id: &str) -> bool {
        toggle(&mut self.saved_ids, event_id)
    }

    /// Flips RSVP membership for `event_id`. Returns the new membership.
    pub fn toggle_rsvp(&mut self, event_id: &str) -> bool {
        toggle(&mut self.rsvp_ids, event_id)
    }

    #[must_use]
    pub fn is_saved(&self, event_id: &str) -> bool {
        self.saved_ids.contains(event_id)
    }

    #[must_use]
    pub fn is_rsvp(&self, event_id: &str) -> bool {
        self.rsvp_ids.contains(event_id)
    }

    #[must_use]
    pub const fn saved_ids(&self) -> &HashSet<String> {
        &self.saved_ids
    }

    #[must_use]
    pub const fn rsvp_ids(&self) -> &HashSet<String> {
        &self.rsvp_ids
    }
}

fn toggle(set: &mut HashSet<String>, event_id: &str) -> bool {
    if set.remove(event_id) {
        false
    } else {
        set.insert(event_id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_saved_is_its_own_inverse() {
        let mut store = SelectionStore::default();
        store.toggle_saved("1");
        let before = store.clone();

        assert!(store.toggle_saved("2"));
        assert!(!store.toggle_saved("2"));
        assert_eq!(store, before);

        assert!(!store.toggle_saved("1"));
        assert!(store.toggle_saved("1"));
        assert_eq!(store, before);
    }

    #[test]
    fn double_rsvp_toggle_leaves_set_unchanged() {
        let mut store = SelectionStore::default();
        store.toggle_rsvp("5");
        let before = store.rsvp_ids().clone();

        store.toggle_rsvp("3");
        store.toggle_rsvp("3");
        assert_eq!(store.rsvp_ids(), &before);
    }

    #[test]
    fn sets_are_independent() {
        let mut store = SelectionStore::default();
        store.toggle_saved("3");
        assert!(store.is_saved("3"));
        assert!(!store.is_rsvp("3"));

        store.toggle_rsvp("3");
        store.toggle_saved("3");
        assert!(!store.is_saved("3"));
        assert!(store.is_rsvp("3"));
    }

    #[test]
    fn unknown_ids_are_accepted() {
        let mut store = SelectionStore::default();
        assert!(store.toggle_saved("no-such-event"));
        assert!(store.is_saved("no-such-event"));
    }
}
