//! Empty state component renderer.
//!
//! Renders the message shown when a list has nothing to show: no filter matches
//! on the home feed, or nothing saved yet on my events.

use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line empty state message.
#[must_use]
pub fn render_empty_state(empty: &EmptyState, cols: usize) -> String {
    [&empty.message, &empty.subtitle]
        .iter()
        .map(|line| {
            let padding = cols.saturating_sub(line.chars().count()) / 2;
            format!("{}{line}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
