//! Infrastructure layer for filesystem and environment interactions.
//!
//! Locates per-user configuration on each platform.

pub mod paths;

pub use paths::{config_dir, default_config_path};
