//! JSON catalog file loading.
//!
//! A catalog file is a JSON array of events in their camelCase wire form. The file
//! is read once at startup; nothing is ever written back.

use super::Catalog;
use crate::domain::{Event, Result};
use std::fs;
use std::path::Path;

impl Catalog {
    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if the document is not an array of events, or a
    /// catalog error if the events break catalog invariants.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        Self::new(events)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise as
    /// [`Catalog::from_json_str`].
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("load_catalog", path = %path.display()).entered();

        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
