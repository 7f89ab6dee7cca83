//! Event card component renderer.

use crate::ui::helpers::{highlight, status_markers};
use crate::ui::viewmodel::EventCardView;

/// Renders one card as two lines.
///
/// ```text
/// #2   Bangkok Art Biennale ♥ ✓  [Arts] Free
///      Jun 3 • 9:00 AM  BACC, Bangkok  851 going  (Going)
/// ```
#[must_use]
pub fn render_card(card: &EventCardView) -> String {
    let rsvp = if card.is_rsvp { "Going" } else { "RSVP" };
    format!(
        "#{id:<3} {title}{markers}  [{category}] {price}\n     {date} • {time}  {venue}, {city}  {going} going  ({rsvp})",
        id = card.id,
        title = highlight(&card.title, &card.highlight_ranges),
        markers = status_markers(card.is_saved, card.is_rsvp),
        category = card.category,
        price = card.price_label,
        date = card.date_label,
        time = card.time_label,
        venue = card.venue,
        city = card.city,
        going = card.going_count,
    )
}
