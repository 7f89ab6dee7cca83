//! Top-level rendering coordinator.
//!
//! Turns a [`UIViewModel`] into text by delegating to the screen layouts in
//! [`components`](crate::ui::components). The output is plain text with ANSI
//! emphasis on search matches; it does not clear the screen or move the cursor.
//!
//! # Example
//!
//! ```rust
//! use eventscout::app::AppState;
//! use eventscout::catalog::Catalog;
//! use eventscout::ui::render;
//!
//! let state = AppState::new(Catalog::sample());
//! let screen = render(&state.compute_viewmodel(), 80);
//! assert!(screen.contains("Upcoming Events"));
//! ```

use crate::ui::components;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Renders a view model at `cols` columns wide.
#[must_use]
pub fn render(vm: &UIViewModel, cols: usize) -> String {
    let mut sections = vec![components::render_header(&vm.header, cols)];

    if let Some(flash) = &vm.flash {
        sections.push(format!("* {flash}"));
    }

    sections.push(match &vm.body {
        Body::Home(home) => components::render_home(home, cols),
        Body::MyEvents(mine) => components::render_my_events(mine, cols),
        Body::Organizer(form) => components::render_organizer(form),
    });

    if let Some(drawer) = &vm.drawer {
        sections.push(components::render_drawer(drawer, cols));
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}
