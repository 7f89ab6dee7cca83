//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container, along with the
//! derived views it recomputes from its inputs and the UI view model it hands to
//! renderers. It is the single source of truth for all transient session state.
//!
//! # State Components
//!
//! - **Catalog**: the read-only event list
//! - **Filter**: search query, category, city
//! - **Selection**: saved and RSVP'd event ids
//! - **View Mode**: home, organizer, or my events
//! - **Drawer**: detail panel phase and selected event
//! - **Organizer**: the draft being composed
//!
//! # Example
//!
//! ```rust
//! use eventscout::app::AppState;
//! use eventscout::catalog::Catalog;
//!
//! let mut state = AppState::new(Catalog::sample());
//! state.filter.search_query = "coffee".to_string();
//! assert_eq!(state.filtered_events().len(), 1);
//! let viewmodel = state.compute_viewmodel();
//! ```

use super::derive;
use super::drawer::Drawer;
use super::modes::{DrawerPhase, ViewMode};
use super::organizer::{OrganizerForm, SubmitStatus};
use super::selection::SelectionStore;
use crate::catalog::Catalog;
use crate::domain::{CategoryFilter, Event, FilterState};
use crate::ui::viewmodel::{
    Body, DrawerView, EmptyState, EventCardView, HeaderInfo, HomeView, MyEventsView,
    OrganizerView, UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;
use std::time::Duration;

/// Grace period between closing the drawer and clearing its event.
pub const DEFAULT_DRAWER_CLOSE_GRACE: Duration = Duration::from_millis(300);

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Events for this session, in display order.
    pub catalog: Catalog,

    /// Live search, category, and city filters.
    pub filter: FilterState,

    /// Saved and RSVP'd ids.
    pub selection: SelectionStore,

    /// Current screen. Changed only by navigation events.
    pub view_mode: ViewMode,

    /// Detail drawer, independent of `view_mode`.
    pub drawer: Drawer,

    /// Organizer form. Restarted whenever the organizer screen is entered or left.
    pub organizer: OrganizerForm,

    /// One-off message shown on the next render (e.g. submission confirmation).
    pub flash: Option<String>,

    /// Delay before a closed drawer clears its event.
    pub drawer_close_grace: Duration,
}

impl AppState {
    /// Creates a fresh session over `catalog`: default filters, empty selection,
    /// home screen, drawer closed.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            selection: SelectionStore::default(),
            view_mode: ViewMode::Home,
            drawer: Drawer::default(),
            organizer: OrganizerForm::default(),
            flash: None,
            drawer_close_grace: DEFAULT_DRAWER_CLOSE_GRACE,
        }
    }

    /// Overrides the drawer close grace period.
    #[must_use]
    pub fn with_drawer_close_grace(mut self, grace: Duration) -> Self {
        self.drawer_close_grace = grace;
        self
    }

    #[must_use]
    pub fn filtered_events(&self) -> Vec<&Event> {
        derive::filtered_events(self.catalog.events(), &self.filter)
    }

    #[must_use]
    pub fn popular_events(&self) -> Vec<&Event> {
        derive::popular_events(self.catalog.events())
    }

    #[must_use]
    pub fn my_events(&self) -> Vec<&Event> {
        derive::my_events(self.catalog.events(), &self.selection)
    }

    /// The event the drawer currently shows (also while closing).
    #[must_use]
    pub const fn selected_event(&self) -> Option<&Event> {
        self.drawer.selected()
    }

    /// Attendance shown for `event`, including the user's own RSVP.
    #[must_use]
    pub fn displayed_rsvp_count(&self, event: &Event) -> u32 {
        derive::displayed_rsvp_count(event, self.selection.is_rsvp(&event.id))
    }

    /// Computes a renderable UI view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", view_mode = %self.view_mode).entered();

        let body = match self.view_mode {
            ViewMode::Home => Body::Home(self.compute_home()),
            ViewMode::MyEvents => Body::MyEvents(self.compute_my_events()),
            ViewMode::Organizer => Body::Organizer(self.compute_organizer()),
        };

        UIViewModel {
            header: HeaderInfo {
                title: "ArokaGO".to_string(),
                view_mode: self.view_mode,
                saved_count: self.selection.saved_ids().len(),
                rsvp_count: self.selection.rsvp_ids().len(),
            },
            body,
            drawer: self.compute_drawer(),
            flash: self.flash.clone(),
        }
    }

    fn compute_home(&self) -> HomeView {
        let filtered = self.filtered_events();

        let matcher = if self.filter.search_query.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let cards: Vec<EventCardView> = filtered
            .iter()
            .map(|event| self.compute_card(event, matcher.as_ref()))
            .collect();

        let popular = if derive::popular_section_visible(&self.filter) {
            self.popular_events()
                .into_iter()
                .map(|event| self.compute_card(event, None))
                .collect()
        } else {
            vec![]
        };

        let results_title = match self.filter.category {
            CategoryFilter::All => "Upcoming Events".to_string(),
            CategoryFilter::Only(category) => format!("{category} Events"),
        };

        let empty_state = cards.is_empty().then(|| EmptyState {
            message: "No events found matching your criteria.".to_string(),
            subtitle: "Clear Filters".to_string(),
        });

        HomeView {
            search_query: self.filter.search_query.clone(),
            category: self.filter.category,
            city: self.filter.city.clone(),
            filters_active: !self.filter.is_default(),
            results_title,
            result_count: cards.len(),
            cards,
            empty_state,
            popular,
            map: derive::map_view(&filtered),
        }
    }

    fn compute_my_events(&self) -> MyEventsView {
        let cards: Vec<EventCardView> = self
            .my_events()
            .into_iter()
            .map(|event| self.compute_card(event, None))
            .collect();

        let empty_state = cards.is_empty().then(|| EmptyState {
            message: "No events yet".to_string(),
            subtitle: "You haven't RSVP'd to or saved any events yet. Explore upcoming events to get started.".to_string(),
        });

        MyEventsView { cards, empty_state }
    }

    fn compute_organizer(&self) -> OrganizerView {
        OrganizerView {
            draft: self.organizer.draft.clone(),
            generating: self.organizer.is_generating(),
            submitting: self.organizer.status == SubmitStatus::Submitting,
            notice: self.organizer.notice.clone(),
        }
    }

    fn compute_card(&self, event: &Event, matcher: Option<&SkimMatcherV2>) -> EventCardView {
        let is_rsvp = self.selection.is_rsvp(&event.id);
        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            compute_highlight_ranges(&event.title, &self.filter.search_query, m)
        });

        EventCardView {
            id: event.id.clone(),
            title: event.title.clone(),
            category: event.category,
            date_label: event.start_date.format("%b %-d").to_string(),
            time_label: event.start_date.format("%-I:%M %p").to_string(),
            venue: event.location.venue.clone(),
            city: event.location.city.clone(),
            price_label: event.price_label(),
            is_free: event.is_free(),
            is_saved: self.selection.is_saved(&event.id),
            is_rsvp,
            going_count: derive::displayed_rsvp_count(event, is_rsvp),
            highlight_ranges,
        }
    }

    fn compute_drawer(&self) -> Option<DrawerView> {
        let event = self.drawer.selected()?;
        let is_saved = self.selection.is_saved(&event.id);
        let is_rsvp = self.selection.is_rsvp(&event.id);

        Some(DrawerView {
            event_id: event.id.clone(),
            title: event.title.clone(),
            category: event.category,
            date_label: event.start_date.format("%A, %B %-d").to_string(),
            time_label: event.start_date.format("%-I:%M %p").to_string(),
            venue: event.location.venue.clone(),
            city: event.location.city.clone(),
            description: event.description.clone(),
            organizer_name: event.organizer.name.clone(),
            organizer_contact: event.organizer.contact.clone(),
            price_label: event.price_label(),
            tags: event.tags.clone(),
            is_saved,
            is_rsvp,
            going_count: derive::displayed_rsvp_count(event, is_rsvp),
            rsvp_label: if is_rsvp { "Going" } else { "I'm Going" },
            save_label: if is_saved { "Saved" } else { "Save" },
            closing: self.drawer.phase() == DrawerPhase::Closing,
        })
    }
}

/// Computes character index ranges to highlight for the search query.
///
/// Uses the Skim fuzzy matcher to find matching character positions, then
/// coalesces consecutive indices into `(start, end)` ranges (exclusive end).
/// Returns nothing when the query only matched the city.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    if !text.to_lowercase().contains(&query.to_lowercase()) {
        return vec![];
    }

    let Some((_score, indices)) = matcher.fuzzy_indices(text, &query.to_lowercase()) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CityFilter};

    fn state() -> AppState {
        AppState::new(Catalog::sample())
    }

    fn home(vm: &UIViewModel) -> &HomeView {
        match &vm.body {
            Body::Home(home) => home,
            other => panic!("expected home view, got {other:?}"),
        }
    }

    #[test]
    fn home_shows_everything_by_default() {
        let vm = state().compute_viewmodel();
        let home = home(&vm);
        assert_eq!(home.result_count, 6);
        assert_eq!(home.results_title, "Upcoming Events");
        assert_eq!(home.popular.len(), 3);
        assert!(home.empty_state.is_none());
        assert!(vm.drawer.is_none());
    }

    #[test]
    fn category_hides_popular_and_retitles() {
        let mut state = state();
        state.filter.category = CategoryFilter::Only(Category::Nightlife);
        let vm = state.compute_viewmodel();
        let home = home(&vm);
        assert_eq!(home.results_title, "Nightlife Events");
        assert!(home.popular.is_empty());
        assert_eq!(home.result_count, 1);
    }

    #[test]
    fn empty_results_offer_clearing_filters() {
        let mut state = state();
        state.filter.city = CityFilter::parse("Koh Samui");
        let vm = state.compute_viewmodel();
        let home = home(&vm);
        assert_eq!(home.result_count, 0);
        assert_eq!(
            home.empty_state.as_ref().map(|e| e.message.as_str()),
            Some("No events found matching your criteria.")
        );
        assert_eq!(home.map.center, derive::DEFAULT_MAP_CENTER);
    }

    #[test]
    fn card_shows_optimistic_rsvp_count_and_free_badge() {
        let mut state = state();
        state.selection.toggle_rsvp("2");
        let vm = state.compute_viewmodel();
        let card = &home(&vm).cards[1];
        assert_eq!(card.id, "2");
        assert_eq!(card.going_count, 851);
        assert!(card.is_rsvp);
        assert!(card.is_free);
        assert_eq!(card.price_label, "Free");
        assert_eq!(state.catalog.get("2").unwrap().rsvp_count, 850);

        let other = &home(&vm).cards[0];
        assert_eq!(other.going_count, 1240);
    }

    #[test]
    fn highlights_title_matches() {
        let mut state = state();
        state.filter.search_query = "moon".to_string();
        let vm = state.compute_viewmodel();
        assert_eq!(home(&vm).cards[0].highlight_ranges, vec![(5, 9)]);
    }

    #[test]
    fn no_highlight_for_city_only_match() {
        let mut state = state();
        state.filter.search_query = "phuket".to_string();
        let vm = state.compute_viewmodel();
        let card = &home(&vm).cards[0];
        assert_eq!(card.id, "6");
        assert!(card.highlight_ranges.is_empty());
    }

    #[test]
    fn my_events_empty_state() {
        let mut state = state();
        state.view_mode = ViewMode::MyEvents;
        let vm = state.compute_viewmodel();
        let Body::MyEvents(mine) = &vm.body else {
            panic!("expected my events view");
        };
        assert!(mine.cards.is_empty());
        assert_eq!(
            mine.empty_state.as_ref().map(|e| e.message.as_str()),
            Some("No events yet")
        );
    }

    #[test]
    fn drawer_view_labels() {
        let mut state = state();
        state.drawer.activate(state.catalog.get("3").cloned().unwrap());
        state.selection.toggle_saved("3");

        let drawer = state.compute_viewmodel().drawer.unwrap();
        assert_eq!(drawer.save_label, "Saved");
        assert_eq!(drawer.rsvp_label, "I'm Going");
        assert_eq!(drawer.going_count, 45);
        assert!(!drawer.closing);
    }
}
