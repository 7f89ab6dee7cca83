//! Header component renderer.
//!
//! Renders the title bar with the navigation entries, marking the active one.

use crate::app::modes::ViewMode;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header: centered title, then the navigation line.
///
/// # Layout
///
/// ```text
///                                    ArokaGO
/// [Discover]  Host an Event  My Events (1 saved, 0 going)
/// ```
#[must_use]
pub fn render_header(header: &HeaderInfo, cols: usize) -> String {
    let title_len = header.title.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    let entry = |mode: ViewMode, label: &str| {
        if header.view_mode == mode {
            format!("[{label}]")
        } else {
            label.to_string()
        }
    };

    format!(
        "{}{}\n{}  {}  {} ({} saved, {} going)",
        " ".repeat(padding),
        header.title,
        entry(ViewMode::Home, "Discover"),
        entry(ViewMode::Organizer, "Host an Event"),
        entry(ViewMode::MyEvents, "My Events"),
        header.saved_count,
        header.rsvp_count,
    )
}
