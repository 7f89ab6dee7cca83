//! Eventscout: the client core of an events-discovery app.
//!
//! Eventscout provides:
//! - A catalog of upcoming events with search, category and city filtering
//! - Saved and RSVP'd event tracking with an optimistic attendance count
//! - A detail drawer whose contents survive its slide-out animation
//! - An organizer form with generated descriptions and a moderation queue

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shell (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Generator     │
//! │ (ui/)         │   │ (catalog/)    │   │ (generator/)  │
//! │ - Rendering   │   │ - Sample data │   │ - Gemini HTTP │
//! │ - Components  │   │ - JSON I/O    │   │ - Fallbacks   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Event, category and filter model (domain/)       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber on stderr                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`catalog`]: Validated event collection (bundled sample or JSON file)
//! - [`domain`]: Core domain types (Event, Category, filters, errors)
//! - [`generator`]: Event description generation with fixed fallbacks
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`submission`]: Moderation queue for organizer submissions
//! - [`ui`]: Text rendering of view models
//! - [`observability`]: Tracing initialization
//!
//! # Configuration
//!
//! Read from `<config dir>/eventscout/config.toml`; every key is optional:
//!
//! ```toml
//! catalog_file = "/path/to/events.json"
//! drawer_close_grace_ms = 300
//! trace_level = "debug"
//!
//! [generator]
//! api_key = "..."
//! model = "gemini-3-flash-preview"
//! ```
//!
//! # Example
//!
//! ```rust
//! use eventscout::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//!
//! handle_event(&mut state, &Event::ActivateEvent { event_id: "1".into() });
//! let (_, actions) = handle_event(&mut state, &Event::CloseDrawer);
//!
//! // The host runs the timer and reports back.
//! if let [Action::ScheduleDrawerClear { token, .. }] = actions.as_slice() {
//!     handle_event(&mut state, &Event::DrawerClearElapsed(*token));
//! }
//! assert!(state.selected_event().is_none());
//! # Ok::<(), eventscout::EventScoutError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Side Effects as Actions
//!
//! `handle_event` never sleeps or performs I/O. Timers, description generation
//! and submissions are returned as [`Action`]s; their results come back as
//! [`Event`]s carrying the token they were issued with, so late results for a
//! superseded drawer or draft are recognized and dropped.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - The optimistic attendance count exists only in the view model
//! - Pre-computes search match highlighting

pub mod app;
pub mod catalog;
pub mod domain;
pub mod generator;
pub mod infrastructure;
pub mod observability;
pub mod submission;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, ViewMode};
pub use catalog::Catalog;
pub use domain::{Category, CategoryFilter, CityFilter, EventScoutError, FilterState, Result};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

const DEFAULT_DRAWER_CLOSE_GRACE_MS: u64 = 300;

/// Application configuration.
///
/// Loaded from a TOML file with [`Config::load`] or [`Config::from_file`], or
/// built from flat string pairs with [`Config::from_map`]. Missing keys take
/// their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog to load instead of the bundled sample events.
    pub catalog_file: Option<PathBuf>,

    /// How long the drawer keeps its content after closing. Default: 300
    pub drawer_close_grace_ms: u64,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. `RUST_LOG` takes
    /// precedence. Default: `"info"`
    pub trace_level: Option<String>,

    pub generator: GeneratorConfig,
}

/// Description generator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// API key. When unset, `GEMINI_API_KEY` and then `API_KEY` are consulted.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            drawer_close_grace_ms: DEFAULT_DRAWER_CLOSE_GRACE_MS,
            trace_level: None,
            generator: GeneratorConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: generator::gemini::DEFAULT_MODEL.to_string(),
            base_url: generator::gemini::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from flat key/value pairs.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_file`: String → `Option<PathBuf>` (empty values ignored)
    /// - `drawer_close_grace_ms`: String → `u64` (falls back to 300 on parse error)
    /// - `trace_level`: String → `Option<String>`
    /// - `api_key`, `model`, `base_url`: generator settings
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use eventscout::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("drawer_close_grace_ms".to_string(), "150".to_string());
    /// map.insert("model".to_string(), "gemini-2.0-flash".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.drawer_close_grace_ms, 150);
    /// assert_eq!(config.generator.model, "gemini-2.0-flash");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let drawer_close_grace_ms = config
            .get("drawer_close_grace_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.drawer_close_grace_ms);

        Self {
            catalog_file: non_empty("catalog_file").map(PathBuf::from),
            drawer_close_grace_ms,
            trace_level: non_empty("trace_level"),
            generator: GeneratorConfig {
                api_key: non_empty("api_key"),
                model: non_empty("model").unwrap_or(defaults.generator.model),
                base_url: non_empty("base_url").unwrap_or(defaults.generator.base_url),
            },
        }
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`EventScoutError::Io`] if the file cannot be read and
    /// [`EventScoutError::Toml`] if it is not valid configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("config_from_file", path = %path.display()).entered();

        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads the configuration file from the default location, or defaults when
    /// there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match infrastructure::default_config_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    #[must_use]
    pub const fn drawer_close_grace(&self) -> Duration {
        Duration::from_millis(self.drawer_close_grace_ms)
    }
}

/// Initializes application state from configuration.
///
/// Loads the configured catalog file, or the bundled sample events when none is
/// set, and applies the drawer close grace period.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be read or violates catalog
/// invariants (duplicate ids, invalid prices).
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing eventscout");

    let catalog = match &config.catalog_file {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::sample(),
    };

    tracing::info!(events = catalog.len(), "catalog loaded");
    Ok(AppState::new(catalog).with_drawer_close_grace(config.drawer_close_grace()))
}
