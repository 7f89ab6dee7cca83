//! Composable UI component renderers.
//!
//! Each component renders one part of the interface to a `String`; the layout
//! functions here stack them into full screens.
//!
//! # Components
//!
//! - [`header`]: Title and navigation
//! - [`card`]: Event card
//! - [`drawer`]: Event detail panel
//! - [`form`]: Organizer form
//! - [`empty`]: Empty state message
//! - [`filters`]: Category rail and city options
//!
//! # Layout Modes
//!
//! - [`render_home`]: Filters + results + popular strip + map summary
//! - [`render_my_events`]: Saved and RSVP'd cards
//! - [`render_organizer`]: Submission form

mod card;
mod drawer;
mod empty;
mod filters;
mod form;
mod header;

pub use card::render_card;
pub use drawer::render_drawer;
pub use empty::render_empty_state;
pub use filters::{render_category_rail, render_city_options};
pub use header::render_header;

use crate::ui::helpers::results_label;
use crate::ui::viewmodel::{HomeView, MyEventsView, OrganizerView};

/// Renders the home feed.
#[must_use]
pub fn render_home(home: &HomeView, cols: usize) -> String {
    let search = if home.filters_active {
        format!("Search: {:?}  [Clear Filters]", home.search_query)
    } else {
        format!("Search: {:?}", home.search_query)
    };
    let mut sections = vec![
        search,
        render_city_options(&home.city),
        render_category_rail(home.category),
    ];

    sections.push(format!(
        "{}  ({})",
        home.results_title,
        results_label(home.result_count)
    ));

    if let Some(empty) = &home.empty_state {
        sections.push(render_empty_state(empty, cols));
    } else {
        sections.extend(home.cards.iter().map(render_card));
    }

    if !home.popular.is_empty() {
        sections.push("Popular Events".to_string());
        sections.extend(home.popular.iter().map(render_card));
    }

    let (lat, lng) = home.map.center;
    sections.push(format!(
        "Map: {} marker(s), centered at {lat:.4}, {lng:.4}",
        home.map.markers.len()
    ));

    sections.join("\n")
}

/// Renders the my events screen.
#[must_use]
pub fn render_my_events(mine: &MyEventsView, cols: usize) -> String {
    let mut sections = vec!["My Events: events you are attending or have saved.".to_string()];

    if let Some(empty) = &mine.empty_state {
        sections.push(render_empty_state(empty, cols));
    } else {
        sections.extend(mine.cards.iter().map(render_card));
    }

    sections.join("\n")
}

/// Renders the organizer screen.
#[must_use]
pub fn render_organizer(form: &OrganizerView) -> String {
    form::render_form(form)
}
