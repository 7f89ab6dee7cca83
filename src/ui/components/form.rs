//! Organizer form component renderer.

use crate::ui::viewmodel::OrganizerView;

/// Renders the draft fields and form status.
#[must_use]
pub fn render_form(form: &OrganizerView) -> String {
    let draft = &form.draft;
    let field = |name: &str, value: &str| {
        if value.is_empty() {
            format!("  {name:<14} —")
        } else {
            format!("  {name:<14} {value}")
        }
    };

    let generate = if form.generating {
        "Generating..."
    } else {
        "Generate with AI"
    };
    let submit = if form.submitting {
        "Submitting..."
    } else {
        "Submit Event"
    };

    let mut lines = vec![
        "Host an Event".to_string(),
        field("title", &draft.title),
        field("category", draft.category.label()),
        field("date", &draft.date),
        field("city", &draft.city),
        field("venue", &draft.venue),
        field("description", &draft.description),
        field("organizerName", &draft.organizer_name),
        field("contact", &draft.contact),
        format!("  [{generate}]  [Cancel]  [{submit}]"),
    ];

    if let Some(notice) = &form.notice {
        lines.push(format!("  ! {notice}"));
    }

    lines.join("\n")
}
