//! Error types for eventscout.
//!
//! This module defines the centralized error type [`EventScoutError`] and a type alias
//! [`Result`] used at the edges of the crate: loading configuration and catalog files.
//! The core (derivations, selection toggles, view transitions) is total and never
//! produces these errors.

use thiserror::Error;

/// The main error type for eventscout operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]` for
/// automatic conversion.
///
/// # Examples
///
/// ```
/// use eventscout::EventScoutError;
///
/// fn validate_config() -> Result<(), EventScoutError> {
///     Err(EventScoutError::Config("drawer_close_grace_ms must be a number".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum EventScoutError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The event catalog violates an invariant (duplicate id, negative price).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A catalog file could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be decoded.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized `Result` type for eventscout operations.
pub type Result<T> = std::result::Result<T, EventScoutError>;
