//! View mode and drawer phase types.
//!
//! The application composes two independent state machines instead of one
//! combined enum:
//!
//! - [`ViewMode`]: which screen is shown (home feed, organizer form, my events)
//! - [`DrawerPhase`]: whether the event detail drawer is showing, closing, or gone
//!
//! The drawer can be open in either `Home` or `MyEvents`, and switching screens
//! leaves the drawer alone.
//!
//! # Example
//!
//! ```rust
//! use eventscout::app::modes::{DrawerPhase, ViewMode};
//!
//! let view = ViewMode::default();
//! assert_eq!(view, ViewMode::Home);
//! assert_eq!(DrawerPhase::default(), DrawerPhase::Closed);
//! ```

use std::fmt;

/// Top-level screen.
///
/// Transitions are unconditional: any mode may switch to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Discovery feed: search, category rail, results, popular strip, map.
    #[default]
    Home,

    /// Event submission form.
    Organizer,

    /// Events the user saved or RSVP'd to.
    MyEvents,
}

impl ViewMode {
    /// Where the profile shortcut leads from this mode.
    ///
    /// Toggles between `MyEvents` and `Home`; from `Organizer` it opens `MyEvents`.
    #[must_use]
    pub const fn profile_toggle(self) -> Self {
        match self {
            Self::MyEvents => Self::Home,
            Self::Home | Self::Organizer => Self::MyEvents,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Home => "home",
            Self::Organizer => "organizer",
            Self::MyEvents => "my-events",
        })
    }
}

/// Detail drawer lifecycle.
///
/// `Closed → Open → Closing → Closed`. Opening is immediate: the slide-in
/// animation is presentational and has no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerPhase {
    /// No panel shown, no event selected.
    #[default]
    Closed,

    /// Panel shown with the selected event.
    Open,

    /// Panel hidden and sliding out; the selected event is kept readable until
    /// the deferred clear fires.
    Closing,
}
