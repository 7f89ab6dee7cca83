//! Detail drawer component renderer.

use crate::ui::viewmodel::DrawerView;

/// Renders the drawer panel. A closing drawer renders as a single fading line,
/// since its content is kept only for the slide-out.
#[must_use]
pub fn render_drawer(drawer: &DrawerView, cols: usize) -> String {
    if drawer.closing {
        return format!("(closing {})", drawer.title);
    }

    let rule = "─".repeat(cols.min(60));
    let mut lines = vec![
        rule.clone(),
        format!("{}  [{}]", drawer.title, drawer.category),
        format!("{} at {}", drawer.date_label, drawer.time_label),
        format!("{}, {}", drawer.venue, drawer.city),
        format!("{}  •  {} going", drawer.price_label, drawer.going_count),
        String::new(),
        drawer.description.clone(),
        String::new(),
        format!("Organizer: {} <{}>", drawer.organizer_name, drawer.organizer_contact),
    ];

    if !drawer.tags.is_empty() {
        lines.push(format!("Tags: {}", drawer.tags.join(", ")));
    }

    lines.push(format!("[{}]  [{}]", drawer.rsvp_label, drawer.save_label));
    lines.push(rule);
    lines.join("\n")
}
