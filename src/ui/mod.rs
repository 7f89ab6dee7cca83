//! User interface layer.
//!
//! Transforms view models into text through composable rendering components.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, labels)

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{
    Body, DrawerView, EmptyState, EventCardView, HeaderInfo, HomeView, MyEventsView,
    OrganizerView, UIViewModel,
};
