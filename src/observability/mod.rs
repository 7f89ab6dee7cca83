//! Tracing-based observability.
//!
//! Log events and spans are emitted with `tracing` macros throughout the crate and
//! written as formatted lines to stderr, keeping stdout free for the rendered UI.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in the program lifecycle:
//!
//! ```rust
//! use eventscout::observability::init_tracing;
//! use eventscout::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("eventscout started");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
