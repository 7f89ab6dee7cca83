//! Shared rendering utilities.
//!
//! Text-level helpers used by several components: search match highlighting and
//! small label formatters.

const HIGHLIGHT_START: &str = "\u{1b}[1;4m";
const RESET: &str = "\u{1b}[0m";

/// Renders `text` with the given character ranges emphasized (bold, underlined).
///
/// Ranges are `(start, end)` character indices with exclusive end, as produced by
/// the view model. Operates on characters, not bytes, so multi-byte titles are
/// safe.
///
/// # Example
///
/// ```rust
/// use eventscout::ui::helpers::highlight;
///
/// assert_eq!(highlight("Full Moon Party", &[(5, 9)]), "Full \u{1b}[1;4mMoon\u{1b}[0m Party");
/// assert_eq!(highlight("Full Moon Party", &[]), "Full Moon Party");
/// ```
#[must_use]
pub fn highlight(text: &str, ranges: &[(usize, usize)]) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + ranges.len() * 12);
    let mut in_range = false;

    for (idx, ch) in text.chars().enumerate() {
        let should_highlight = ranges.iter().any(|&(start, end)| idx >= start && idx < end);
        if should_highlight && !in_range {
            out.push_str(HIGHLIGHT_START);
            in_range = true;
        } else if !should_highlight && in_range {
            out.push_str(RESET);
            in_range = false;
        }
        out.push(ch);
    }

    if in_range {
        out.push_str(RESET);
    }
    out
}

/// "1 result" / "3 results".
#[must_use]
pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}

/// Status markers shown on a card: saved heart and going check.
#[must_use]
pub fn status_markers(is_saved: bool, is_rsvp: bool) -> String {
    let mut markers = String::new();
    if is_saved {
        markers.push_str(" ♥");
    }
    if is_rsvp {
        markers.push_str(" ✓");
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_at_end_is_closed() {
        assert_eq!(highlight("Yoga", &[(2, 4)]), "Yo\u{1b}[1;4mga\u{1b}[0m");
    }

    #[test]
    fn highlight_multibyte() {
        assert_eq!(highlight("Café Week", &[(3, 4)]), "Caf\u{1b}[1;4mé\u{1b}[0m Week");
    }

    #[test]
    fn labels() {
        assert_eq!(results_label(1), "1 result");
        assert_eq!(results_label(0), "0 results");
        assert_eq!(status_markers(true, true), " ♥ ✓");
        assert_eq!(status_markers(false, false), "");
    }
}
