//! Pure view derivations over the catalog.
//!
//! Every function here is referentially transparent: the result depends only on its
//! arguments, nothing is mutated, and catalog order is always preserved. The
//! application state recomputes these whenever the inputs change.

use crate::app::selection::SelectionStore;
use crate::domain::{CategoryFilter, Event, FilterState};

/// Number of events in the popular strip.
pub const POPULAR_LIMIT: usize = 3;

/// Map center used when no event is on the map (central Bangkok).
pub const DEFAULT_MAP_CENTER: (f64, f64) = (13.7563, 100.5018);

/// Events matching all three filters, in catalog order.
///
/// - The search query matches case-insensitively as a substring of the title or
///   the city. An empty query matches everything. The query is not trimmed, so a
///   whitespace-only query only matches titles or cities containing it literally.
/// - The category filter is `All` or an exact category.
/// - The city filter is `All` or an exact, case-sensitive city name.
///
/// # Example
///
/// ```rust
/// use eventscout::app::derive::filtered_events;
/// use eventscout::catalog::Catalog;
/// use eventscout::{CityFilter, FilterState};
///
/// let catalog = Catalog::sample();
/// let filter = FilterState { city: CityFilter::parse("Bangkok"), ..Default::default() };
/// let titles: Vec<_> = filtered_events(catalog.events(), &filter)
///     .into_iter()
///     .map(|e| e.title.as_str())
///     .collect();
/// assert_eq!(titles, ["Bangkok Art Biennale", "Sunday Morning Yoga in the Park"]);
/// ```
#[must_use]
pub fn filtered_events<'a>(events: &'a [Event], filter: &FilterState) -> Vec<&'a Event> {
    let _span = tracing::debug_span!(
        "filtered_events",
        total_events = events.len(),
        query_len = filter.search_query.len(),
        category = %filter.category,
        city = %filter.city,
    )
    .entered();

    let query = filter.search_query.to_lowercase();

    let filtered: Vec<&Event> = events
        .iter()
        .filter(|event| {
            let matches_search = query.is_empty()
                || event.title.to_lowercase().contains(&query)
                || event.location.city.to_lowercase().contains(&query);

            matches_search
                && filter.category.matches(event.category)
                && filter.city.matches(&event.location.city)
        })
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filters applied");
    filtered
}

/// The first [`POPULAR_LIMIT`] events flagged popular, in catalog order.
///
/// Not a ranking by attendance: a popular event with a small `rsvp_count` early in
/// the catalog wins over a later one with a large count.
#[must_use]
pub fn popular_events(events: &[Event]) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| e.is_popular())
        .take(POPULAR_LIMIT)
        .collect()
}

/// Events the user saved or RSVP'd to, in catalog order, each at most once.
#[must_use]
pub fn my_events<'a>(events: &'a [Event], selection: &SelectionStore) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| selection.is_saved(&e.id) || selection.is_rsvp(&e.id))
        .collect()
}

/// Attendance shown on cards: the baseline count plus the user's own RSVP.
///
/// The catalog's `rsvp_count` is never incremented; the user's RSVP only exists
/// as membership in the selection store.
#[must_use]
pub fn displayed_rsvp_count(event: &Event, is_rsvp: bool) -> u32 {
    event.rsvp_count.saturating_add(u32::from(is_rsvp))
}

/// Whether the popular strip is shown on the home feed.
///
/// It is hidden as soon as a category is picked or a query is typed; the city
/// filter does not affect it.
#[must_use]
pub fn popular_section_visible(filter: &FilterState) -> bool {
    filter.category == CategoryFilter::All && filter.search_query.is_empty()
}

/// A pin on the explore map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub event_id: String,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
}

/// Map markers and the point the map recenters on.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: (f64, f64),
    pub markers: Vec<MapMarker>,
}

/// Builds the map view for a list of events.
///
/// The map centers on the first event, or [`DEFAULT_MAP_CENTER`] when empty.
#[must_use]
pub fn map_view(events: &[&Event]) -> MapView {
    let center = events
        .first()
        .map_or(DEFAULT_MAP_CENTER, |e| (e.location.lat, e.location.lng));

    let markers = events
        .iter()
        .map(|e| MapMarker {
            event_id: e.id.clone(),
            title: e.title.clone(),
            lat: e.location.lat,
            lng: e.location.lng,
        })
        .collect();

    MapView { center, markers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::{Category, CityFilter};

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    fn query(q: &str) -> FilterState {
        FilterState {
            search_query: q.to_string(),
            ..FilterState::default()
        }
    }

    #[test]
    fn default_filter_is_identity() {
        let catalog = Catalog::sample();
        let all = filtered_events(catalog.events(), &FilterState::default());
        assert_eq!(ids(&all), ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn city_filter_bangkok() {
        let catalog = Catalog::sample();
        let filter = FilterState {
            city: CityFilter::parse("Bangkok"),
            ..FilterState::default()
        };
        let titles: Vec<_> = filtered_events(catalog.events(), &filter)
            .iter()
            .map(|e| e.title.clone())
            .collect();
        assert_eq!(
            titles,
            ["Bangkok Art Biennale", "Sunday Morning Yoga in the Park"]
        );
    }

    #[test]
    fn city_filter_is_case_sensitive_but_search_is_not() {
        let catalog = Catalog::sample();
        let by_city = FilterState {
            city: CityFilter::parse("bangkok"),
            ..FilterState::default()
        };
        assert!(filtered_events(catalog.events(), &by_city).is_empty());
        assert_eq!(ids(&filtered_events(catalog.events(), &query("bangkok"))), ["2", "3"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = Catalog::sample();
        let lower = filtered_events(catalog.events(), &query("moon"));
        let upper = filtered_events(catalog.events(), &query("MOON"));
        assert_eq!(ids(&lower), ["5"]);
        assert_eq!(ids(&lower), ids(&upper));
    }

    #[test]
    fn search_matches_city_as_well_as_title() {
        let catalog = Catalog::sample();
        // "Koh Phangan" appears only as a city.
        assert_eq!(ids(&filtered_events(catalog.events(), &query("phangan"))), ["5"]);
    }

    #[test]
    fn whitespace_query_is_literal() {
        let catalog = Catalog::sample();
        // Every sample title contains a single space, none contains two.
        assert!(filtered_events(catalog.events(), &query("  ")).is_empty());
        assert_eq!(filtered_events(catalog.events(), &query(" ")).len(), 6);
    }

    #[test]
    fn filters_intersect() {
        let catalog = Catalog::sample();
        let filter = FilterState {
            search_query: "art".to_string(),
            category: CategoryFilter::Only(Category::Arts),
            city: CityFilter::parse("Bangkok"),
        };
        assert_eq!(ids(&filtered_events(catalog.events(), &filter)), ["2"]);

        let none = FilterState {
            category: CategoryFilter::Only(Category::Travel),
            ..FilterState::default()
        };
        assert!(filtered_events(catalog.events(), &none).is_empty());
    }

    #[test]
    fn filtered_is_ordered_subsequence() {
        let catalog = Catalog::sample();
        for q in ["", "a", "e", "party", "x", "Bangkok"] {
            let result = filtered_events(catalog.events(), &query(q));
            let positions: Vec<_> = result
                .iter()
                .map(|e| catalog.events().iter().position(|c| c.id == e.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {q:?}");
        }
    }

    #[test]
    fn popular_takes_first_three_in_catalog_order() {
        let catalog = Catalog::sample();
        let popular = popular_events(catalog.events());
        // Full Moon Party has the highest count but comes fourth among popular events.
        assert_eq!(ids(&popular), ["1", "2", "4"]);
        assert!(popular.iter().all(|e| e.is_popular()));
    }

    #[test]
    fn popular_returns_fewer_when_few_are_flagged() {
        let mut events = Catalog::sample().events().to_vec();
        for e in &mut events {
            e.is_popular = None;
        }
        events[5].is_popular = Some(true);
        assert_eq!(ids(&popular_events(&events)), ["6"]);
    }

    #[test]
    fn my_events_has_no_duplicates() {
        let catalog = Catalog::sample();
        let mut selection = SelectionStore::default();
        selection.toggle_saved("4");
        selection.toggle_rsvp("4");
        selection.toggle_rsvp("2");
        selection.toggle_saved("unknown");

        assert_eq!(ids(&my_events(catalog.events(), &selection)), ["2", "4"]);
    }

    #[test]
    fn rsvp_overlay_does_not_touch_the_catalog() {
        let catalog = Catalog::sample();
        let yoga = catalog.get("3").unwrap();
        assert_eq!(displayed_rsvp_count(yoga, true), 46);
        assert_eq!(displayed_rsvp_count(yoga, false), 45);
        assert_eq!(yoga.rsvp_count, 45);
    }

    #[test]
    fn popular_section_visibility() {
        assert!(popular_section_visible(&FilterState::default()));
        assert!(popular_section_visible(&FilterState {
            city: CityFilter::parse("Phuket"),
            ..FilterState::default()
        }));
        assert!(!popular_section_visible(&query("a")));
        assert!(!popular_section_visible(&FilterState {
            category: CategoryFilter::Only(Category::Food),
            ..FilterState::default()
        }));
    }

    #[test]
    fn map_centers_on_first_event() {
        let catalog = Catalog::sample();
        let events = filtered_events(catalog.events(), &query("coffee"));
        let map = map_view(&events);
        assert_eq!(map.center, (18.8, 98.968));
        assert_eq!(map.markers.len(), 1);

        assert_eq!(map_view(&[]).center, DEFAULT_MAP_CENTER);
    }
}
