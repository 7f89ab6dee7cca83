//! Event detail drawer with deferred, staleness-guarded clear.
//!
//! Closing the drawer hides the panel at once but keeps the selected event for a
//! grace period so the slide-out animation still has content to show. The clear
//! is a one-shot timer the host runs; it carries a [`ClearToken`] naming the
//! activation it belongs to. When it fires, the selection is cleared only if that
//! activation is still current. Any later activation, even of the same event,
//! makes the token stale and the clear a no-op, with no cancellation bookkeeping.

use super::modes::DrawerPhase;
use crate::domain::Event;

/// Identity of the drawer activation a deferred clear was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClearToken(u64);

impl ClearToken {
    /// Raw activation number, for logging and host-side bookkeeping.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Drawer state: phase, selected event, and activation counter.
#[derive(Debug, Clone, Default)]
pub struct Drawer {
    phase: DrawerPhase,
    selected: Option<Event>,
    activation: u64,
}

impl Drawer {
    #[must_use]
    pub const fn phase(&self) -> DrawerPhase {
        self.phase
    }

    /// The event the drawer shows, kept through `Closing`.
    #[must_use]
    pub const fn selected(&self) -> Option<&Event> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == DrawerPhase::Open
    }

    /// Shows `event` in the drawer, replacing any current selection directly.
    pub fn activate(&mut self, event: Event) {
        self.activation += 1;
        tracing::debug!(
            event_id = %event.id,
            activation = self.activation,
            previous_phase = ?self.phase,
            "drawer activated"
        );
        self.selected = Some(event);
        self.phase = DrawerPhase::Open;
    }

    /// Hides the panel and returns the token for the deferred clear.
    ///
    /// Returns `None` if nothing is selected (there is nothing to clear later).
    pub fn close(&mut self) -> Option<ClearToken> {
        if self.selected.is_none() {
            self.phase = DrawerPhase::Closed;
            return None;
        }

        self.phase = DrawerPhase::Closing;
        Some(ClearToken(self.activation))
    }

    /// Handles an elapsed deferred clear. Returns whether the selection was cleared.
    pub fn clear_elapsed(&mut self, token: ClearToken) -> bool {
        if token.0 != self.activation || self.phase != DrawerPhase::Closing {
            tracing::debug!(
                token = token.0,
                activation = self.activation,
                phase = ?self.phase,
                "stale drawer clear ignored"
            );
            return false;
        }

        self.selected = None;
        self.phase = DrawerPhase::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn event(id: &str) -> Event {
        Catalog::sample().get(id).cloned().unwrap()
    }

    fn selected_id(drawer: &Drawer) -> Option<&str> {
        drawer.selected().map(|e| e.id.as_str())
    }

    #[test]
    fn close_retains_selection_until_clear() {
        let mut drawer = Drawer::default();
        drawer.activate(event("1"));
        assert!(drawer.is_open());

        let token = drawer.close().unwrap();
        assert_eq!(drawer.phase(), DrawerPhase::Closing);
        assert_eq!(selected_id(&drawer), Some("1"));

        assert!(drawer.clear_elapsed(token));
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
        assert_eq!(selected_id(&drawer), None);
    }

    #[test]
    fn reopening_another_event_disarms_stale_clear() {
        let mut drawer = Drawer::default();
        drawer.activate(event("1"));
        let token = drawer.close().unwrap();
        drawer.activate(event("2"));

        assert!(!drawer.clear_elapsed(token));
        assert_eq!(selected_id(&drawer), Some("2"));
        assert!(drawer.is_open());
    }

    #[test]
    fn reopening_the_same_event_disarms_stale_clear() {
        let mut drawer = Drawer::default();
        drawer.activate(event("1"));
        let token = drawer.close().unwrap();
        drawer.activate(event("1"));

        assert!(!drawer.clear_elapsed(token));
        assert_eq!(selected_id(&drawer), Some("1"));
    }

    #[test]
    fn activation_while_open_replaces_selection() {
        let mut drawer = Drawer::default();
        drawer.activate(event("1"));
        drawer.activate(event("3"));
        assert_eq!(selected_id(&drawer), Some("3"));
        assert!(drawer.is_open());
    }

    #[test]
    fn close_without_selection_arms_nothing() {
        let mut drawer = Drawer::default();
        assert_eq!(drawer.close(), None);
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
    }

    #[test]
    fn double_close_clears_once() {
        let mut drawer = Drawer::default();
        drawer.activate(event("4"));
        let first = drawer.close().unwrap();
        let second = drawer.close().unwrap();

        assert!(drawer.clear_elapsed(first));
        assert!(!drawer.clear_elapsed(second));
        assert_eq!(drawer.phase(), DrawerPhase::Closed);
    }
}
