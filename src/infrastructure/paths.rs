//! Platform configuration paths.

use std::path::PathBuf;

const APP_DIR: &str = "eventscout";
const CONFIG_FILE: &str = "config.toml";

/// Returns the eventscout configuration directory.
///
/// Resolves to `$XDG_CONFIG_HOME/eventscout` (usually `~/.config/eventscout`) on
/// Linux, `~/Library/Application Support/eventscout` on macOS and
/// `%APPDATA%\eventscout` on Windows. `None` when the platform has no home
/// directory.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Returns the path of the default configuration file, `config.toml` inside
/// [`config_dir`].
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}
