//! Domain layer for eventscout.
//!
//! This module contains the core domain types, independent of how the host renders
//! them or drives the application.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: Event record, category enumeration, location and organizer
//! - [`filter`]: Search, category, and city filter state

pub mod error;
pub mod event;
pub mod filter;

pub use error::{EventScoutError, Result};
pub use event::{Category, Event, Location, Organizer};
pub use filter::{CategoryFilter, CityFilter, FilterState, CITIES};
