//! Event description generation.
//!
//! Wraps a generative text service behind a single call that always yields a
//! usable string. Every failure mode maps to a fixed fallback text, so callers
//! never see an error.
//!
//! # Modules
//!
//! - [`gemini`]: Gemini `generateContent` client

pub mod gemini;

pub use gemini::GeminiClient;

use crate::domain::Category;

/// Returned without any network call when no API key is configured.
pub const MISSING_KEY_DESCRIPTION: &str = "This is a placeholder description because the API Key is missing. Please configure your API Key to use AI generation.";

/// Returned when the request fails or the response cannot be read.
pub const FAILED_DESCRIPTION: &str = "Join us for this amazing event! (AI generation failed)";

/// Returned when the service answers with no text.
pub const EMPTY_DESCRIPTION: &str = "Join us for this amazing event!";

/// Builds the generation prompt.
///
/// # Example
///
/// ```rust
/// use eventscout::domain::Category;
/// use eventscout::generator::build_prompt;
///
/// let prompt = build_prompt("Jazz Night", Category::Music, "Blue Note, Bangkok");
/// assert!(prompt.contains("titled \"Jazz Night\""));
/// assert!(prompt.contains("The category is \"Music\""));
/// ```
#[must_use]
pub fn build_prompt(title: &str, category: Category, location: &str) -> String {
    format!(
        "Write a captivating, short (2-3 sentences) event description for an event titled \"{title}\". The category is \"{category}\" and it is happening in \"{location}\". The tone should be exciting and inviting."
    )
}

/// Pulls the generated text out of a `generateContent` response body.
///
/// Returns `None` when the body has no text part at all, and an empty string when
/// the text part is blank.
#[must_use]
pub fn extract_text(body: &serde_json::Value) -> Option<String> {
    body.get("candidates")
        .and_then(|candidates| candidates.as_array())
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
                .collect::<String>()
        })
        .map(|text| text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_mentions_all_inputs() {
        let prompt = build_prompt("Full Moon Party", Category::Nightlife, "Haad Rin Beach, Koh Phangan");
        assert_eq!(
            prompt,
            "Write a captivating, short (2-3 sentences) event description for an event titled \"Full Moon Party\". The category is \"Nightlife\" and it is happening in \"Haad Rin Beach, Koh Phangan\". The tone should be exciting and inviting."
        );
    }

    #[test]
    fn extracts_and_trims_first_candidate() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "  Dance all night.\n" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        });
        assert_eq!(extract_text(&body).as_deref(), Some("Dance all night."));
    }

    #[test]
    fn joins_multiple_parts() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "Eat. " }, { "text": "Cook." }] } }]
        });
        assert_eq!(extract_text(&body).as_deref(), Some("Eat. Cook."));
    }

    #[test]
    fn blank_text_is_empty_string() {
        let body = json!({ "candidates": [{ "content": { "parts": [{ "text": "   " }] } }] });
        assert_eq!(extract_text(&body).as_deref(), Some(""));
    }

    #[test]
    fn malformed_body_has_no_text() {
        assert_eq!(extract_text(&json!({ "error": { "code": 400 } })), None);
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);
    }
}
