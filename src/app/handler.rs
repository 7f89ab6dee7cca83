//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and host
//! callbacks, translating them into state changes and action sequences. It is the
//! only place application state is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host (user input, timer and generator callbacks)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` fields and component methods
//! 4. Actions are collected and returned for the host to execute
//!
//! # Event Types
//!
//! - **Filters**: `SetSearchQuery`, `SelectCategory`, `SelectCity`, `ClearFilters`
//! - **Navigation**: `Navigate`, `ToggleProfile`
//! - **Drawer**: `ActivateEvent`, `CloseDrawer`, `DrawerClearElapsed`
//! - **Selection**: `ToggleSaved`, `ToggleRsvp`
//! - **Organizer**: `UpdateDraft`, `RequestDescription`, `DescriptionGenerated`,
//!   `SubmitDraft`, `SubmissionAccepted`, `CancelOrganizer`
//!
//! # Example
//!
//! ```rust
//! use eventscout::app::{handle_event, AppState, Event};
//! use eventscout::catalog::Catalog;
//!
//! let mut state = AppState::new(Catalog::sample());
//! let (render, actions) = handle_event(&mut state, &Event::ToggleRsvp { event_id: "3".into() });
//! assert!(render);
//! assert!(actions.is_empty());
//! assert!(state.selection.is_rsvp("3"));
//! ```

use super::drawer::ClearToken;
use super::modes::ViewMode;
use super::organizer::{DraftField, RequestToken, SubmitStatus};
use crate::app::{Action, AppState};
use crate::domain::{CategoryFilter, CityFilter};

/// Events triggered by user input or host callbacks.
///
/// Each event represents a discrete occurrence. The handler processes them
/// sequentially, so every transition is a deterministic function of the current
/// state and the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the search query.
    SetSearchQuery(String),
    /// Picks a category on the rail (or `All`).
    SelectCategory(CategoryFilter),
    /// Picks a city in the dropdown (or `All`).
    SelectCity(CityFilter),
    /// Resets query, category, and city.
    ClearFilters,

    /// Switches to a screen.
    Navigate(ViewMode),
    /// Profile shortcut: toggles between my events and home.
    ToggleProfile,

    /// Opens the drawer on an event (card or map marker activation).
    ActivateEvent {
        event_id: String,
    },
    /// Closes the drawer (close button or backdrop).
    CloseDrawer,
    /// The deferred clear armed by a close has elapsed.
    DrawerClearElapsed(ClearToken),

    /// Flips saved membership.
    ToggleSaved {
        event_id: String,
    },
    /// Flips RSVP membership.
    ToggleRsvp {
        event_id: String,
    },

    /// Writes a value into a draft field.
    UpdateDraft {
        field: DraftField,
        value: String,
    },
    /// "Generate with AI" on the description field.
    RequestDescription,
    /// The generator answered a request.
    DescriptionGenerated {
        request: RequestToken,
        text: String,
    },
    /// Submits the draft.
    SubmitDraft,
    /// The moderation queue accepted the submitted draft.
    SubmissionAccepted {
        ticket: u64,
    },
    /// Leaves the organizer form without submitting.
    CancelOrganizer,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(render, actions)`: whether the visible state changed, and the side effects
/// the host must run in order. No event is an error; unknown ids and events that
/// do not apply in the current mode are logged and ignored.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetSearchQuery(query) => {
            if &state.filter.search_query == query {
                return (false, vec![]);
            }
            state.filter.search_query.clone_from(query);
            tracing::trace!(query = %query, "search query updated");
            (true, vec![])
        }
        Event::SelectCategory(category) => {
            state.filter.category = *category;
            (true, vec![])
        }
        Event::SelectCity(city) => {
            state.filter.city = city.clone();
            (true, vec![])
        }
        Event::ClearFilters => {
            state.filter.clear();
            (true, vec![])
        }
        Event::Navigate(mode) => {
            navigate(state, *mode);
            (true, vec![])
        }
        Event::ToggleProfile => {
            let target = state.view_mode.profile_toggle();
            navigate(state, target);
            (true, vec![])
        }
        Event::ActivateEvent { event_id } => {
            if state.view_mode == ViewMode::Organizer {
                tracing::debug!(event_id = %event_id, "no event list on organizer screen");
                return (false, vec![]);
            }

            let Some(event) = state.catalog.get(event_id).cloned() else {
                tracing::debug!(event_id = %event_id, "activated unknown event");
                return (false, vec![]);
            };

            state.drawer.activate(event);
            (true, vec![])
        }
        Event::CloseDrawer => {
            let Some(token) = state.drawer.close() else {
                return (false, vec![]);
            };

            tracing::debug!(
                token = token.get(),
                delay_ms = u64::try_from(state.drawer_close_grace.as_millis()).unwrap_or(u64::MAX),
                "drawer closing, clear scheduled"
            );

            (
                true,
                vec![Action::ScheduleDrawerClear {
                    token,
                    delay: state.drawer_close_grace,
                }],
            )
        }
        Event::DrawerClearElapsed(token) => (state.drawer.clear_elapsed(*token), vec![]),
        Event::ToggleSaved { event_id } => {
            let saved = state.selection.toggle_saved(event_id);
            tracing::debug!(event_id = %event_id, saved, "saved toggled");
            (true, vec![])
        }
        Event::ToggleRsvp { event_id } => {
            let going = state.selection.toggle_rsvp(event_id);
            tracing::debug!(event_id = %event_id, going, "rsvp toggled");
            (true, vec![])
        }
        Event::UpdateDraft { field, value } => {
            if state.view_mode != ViewMode::Organizer {
                return (false, vec![]);
            }

            if let Err(e) = state.organizer.draft.set(*field, value) {
                state.organizer.notice = Some(e.to_string());
            }
            (true, vec![])
        }
        Event::RequestDescription => {
            if state.view_mode != ViewMode::Organizer {
                return (false, vec![]);
            }

            let Some(request) = state.organizer.begin_description_request() else {
                return (true, vec![]);
            };

            let draft = &state.organizer.draft;
            tracing::debug!(title = %draft.title, category = %draft.category, "requesting description");

            (
                true,
                vec![Action::GenerateDescription {
                    request,
                    title: draft.title.clone(),
                    category: draft.category,
                    location: draft.location_text(),
                }],
            )
        }
        Event::DescriptionGenerated { request, text } => {
            let updated = state.organizer.complete_description_request(*request, text);
            (updated, vec![])
        }
        Event::SubmitDraft => {
            if state.view_mode != ViewMode::Organizer {
                return (false, vec![]);
            }

            match state.organizer.begin_submit() {
                Some(draft) => {
                    tracing::debug!(title = %draft.title, "submitting draft for moderation");
                    (true, vec![Action::SubmitForModeration(draft)])
                }
                None => (true, vec![]),
            }
        }
        Event::SubmissionAccepted { ticket } => {
            if state.organizer.status != SubmitStatus::Submitting {
                tracing::debug!(ticket, "acknowledgement without pending submission");
                return (false, vec![]);
            }

            tracing::info!(ticket, "event submitted for moderation");
            navigate(state, ViewMode::Home);
            state.flash = Some(format!(
                "Event submitted! Our team will review it shortly (ticket #{ticket})."
            ));
            (true, vec![])
        }
        Event::CancelOrganizer => {
            if state.view_mode != ViewMode::Organizer {
                return (false, vec![]);
            }
            navigate(state, ViewMode::Home);
            (true, vec![])
        }
    }
}

/// Switches screens and dismisses any flash message. Entering or leaving the
/// organizer screen discards the draft.
fn navigate(state: &mut AppState, mode: ViewMode) {
    let previous = state.view_mode;
    if previous != mode && (previous == ViewMode::Organizer || mode == ViewMode::Organizer) {
        state.organizer.restart();
    }

    tracing::debug!(from = %previous, to = %mode, "navigating");
    state.flash = None;
    state.view_mode = mode;
}
