//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (terminal shell, tests, any other front end)
//! and the domain/catalog layers. It implements the event-driven architecture
//! behind the discovery UI.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────── Timer / Generator Results ─┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`derive`]: Pure filtered / popular / my-events derivations
//! - [`drawer`]: Detail drawer with identity-guarded deferred clear
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: View mode and drawer phase types
//! - [`organizer`]: Event submission draft and description request bookkeeping
//! - [`selection`]: Saved and RSVP'd id sets
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod derive;
pub mod drawer;
pub mod handler;
pub mod modes;
pub mod organizer;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use drawer::{ClearToken, Drawer};
pub use handler::{handle_event, Event};
pub use modes::{DrawerPhase, ViewMode};
pub use organizer::{DraftField, EventDraft, OrganizerForm, RequestToken};
pub use selection::SelectionStore;
pub use state::AppState;
