//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are display-ready: dates are formatted, the optimistic attendance
//! overlay is applied, labels are chosen. They contain no business logic.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by a
//! renderer (the bundled text renderer, or any other front end).

use crate::app::derive::MapView;
use crate::app::modes::ViewMode;
use crate::app::organizer::EventDraft;
use crate::domain::{Category, CategoryFilter, CityFilter};

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Content of the current screen.
    pub body: Body,

    /// Detail drawer, present while an event is selected (open or closing).
    pub drawer: Option<DrawerView>,

    /// One-off informational message.
    pub flash: Option<String>,
}

/// Screen-specific content.
#[derive(Debug, Clone)]
pub enum Body {
    Home(HomeView),
    MyEvents(MyEventsView),
    Organizer(OrganizerView),
}

/// Header bar.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Highlights the active navigation entry.
    pub view_mode: ViewMode,
    pub saved_count: usize,
    pub rsvp_count: usize,
}

/// Discovery feed.
#[derive(Debug, Clone)]
pub struct HomeView {
    pub search_query: String,
    pub category: CategoryFilter,
    pub city: CityFilter,
    /// Any filter differs from its default; offers "Clear Filters".
    pub filters_active: bool,

    /// "Upcoming Events" or "{Category} Events".
    pub results_title: String,
    pub result_count: usize,
    pub cards: Vec<EventCardView>,

    /// Shown instead of cards when nothing matches.
    pub empty_state: Option<EmptyState>,

    /// Popular strip; empty when hidden by an active category or query.
    pub popular: Vec<EventCardView>,

    /// Markers for the filtered events.
    pub map: MapView,
}

/// Saved and RSVP'd events.
#[derive(Debug, Clone)]
pub struct MyEventsView {
    pub cards: Vec<EventCardView>,
    pub empty_state: Option<EmptyState>,
}

/// Organizer submission form.
#[derive(Debug, Clone)]
pub struct OrganizerView {
    pub draft: EventDraft,
    /// The "Generate with AI" trigger is disabled while true.
    pub generating: bool,
    pub submitting: bool,
    pub notice: Option<String>,
}

/// One event card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCardView {
    pub id: String,
    pub title: String,
    pub category: Category,
    /// e.g. "Jun 3".
    pub date_label: String,
    /// e.g. "7:30 PM".
    pub time_label: String,
    pub venue: String,
    pub city: String,
    pub price_label: String,
    pub is_free: bool,
    pub is_saved: bool,
    pub is_rsvp: bool,
    /// Baseline attendance plus the user's own RSVP.
    pub going_count: u32,

    /// Character ranges of the title matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail drawer content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerView {
    pub event_id: String,
    pub title: String,
    pub category: Category,
    /// e.g. "Monday, June 3".
    pub date_label: String,
    pub time_label: String,
    pub venue: String,
    pub city: String,
    pub description: String,
    pub organizer_name: String,
    pub organizer_contact: String,
    pub price_label: String,
    pub tags: Vec<String>,
    pub is_saved: bool,
    pub is_rsvp: bool,
    pub going_count: u32,
    /// "Going" or "I'm Going".
    pub rsvp_label: &'static str,
    /// "Saved" or "Save".
    pub save_label: &'static str,
    /// The panel is sliding out; content stays until the deferred clear.
    pub closing: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No events yet").
    pub message: String,

    /// Secondary text or call to action.
    pub subtitle: String,
}
