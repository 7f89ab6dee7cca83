//! Read-only event catalog.
//!
//! The [`Catalog`] is the session's source of truth: an ordered collection of
//! [`Event`]s with unique ids. It is built once (from the bundled sample or a JSON
//! file) and never mutated afterwards. Derivations preserve catalog order, so the
//! order events are loaded in is the order they are shown in.
//!
//! # Sources
//!
//! - [`Catalog::sample`] / [`Catalog::sample_at`]: six built-in events
//! - [`Catalog::from_json_file`]: a JSON array of camelCase events

mod json;
mod sample;

use crate::domain::{Event, EventScoutError, Result};
use std::collections::HashSet;

/// Ordered, id-unique event collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Builds a catalog, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EventScoutError::Catalog`] if two events share an id or an
    /// event has a negative (or non-finite) price.
    pub fn new(events: Vec<Event>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(EventScoutError::Catalog(format!(
                    "duplicate event id {:?}",
                    event.id
                )));
            }
            if !event.price.is_finite() || event.price < 0.0 {
                return Err(EventScoutError::Catalog(format!(
                    "event {:?} has invalid price {}",
                    event.id, event.price
                )));
            }
        }

        tracing::debug!(event_count = events.len(), "catalog loaded");
        Ok(Self { events })
    }

    /// All events in catalog order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
