//! Organizer submission form state.
//!
//! [`OrganizerForm`] holds the draft event an organizer is composing, plus the
//! bookkeeping for the AI description request and the submission status. A fresh
//! form is created every time the organizer screen is entered; leaving it discards
//! the draft.

use crate::domain::event::UnknownCategory;
use crate::domain::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notice shown when a description is requested before title and city are set.
pub const MISSING_TITLE_OR_CITY: &str = "Please enter a Title and City first.";

/// The record an organizer submits for moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub category: Category,
    pub city: String,
    pub venue: String,
    /// Local date and time as typed into the form, uninterpreted.
    pub date: String,
    pub description: String,
    pub organizer_name: String,
    pub contact: String,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: Category::Music,
            city: "Bangkok".to_string(),
            venue: String::new(),
            date: String::new(),
            description: String::new(),
            organizer_name: String::new(),
            contact: String::new(),
        }
    }
}

impl EventDraft {
    /// Location text passed to the description generator: `"{venue}, {city}"`.
    #[must_use]
    pub fn location_text(&self) -> String {
        format!("{}, {}", self.venue, self.city)
    }

    /// Required fields that are blank, in form order.
    ///
    /// Category and city always carry a dropdown value and are not checked.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<DraftField> {
        [
            (DraftField::Title, &self.title),
            (DraftField::Date, &self.date),
            (DraftField::Venue, &self.venue),
            (DraftField::Description, &self.description),
            (DraftField::OrganizerName, &self.organizer_name),
            (DraftField::Contact, &self.contact),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Writes `value` into `field`.
    ///
    /// # Errors
    ///
    /// Returns an error for a category value that names no category.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<(), UnknownCategory> {
        match field {
            DraftField::Title => self.title = value.to_string(),
            DraftField::Category => self.category = value.parse()?,
            DraftField::City => self.city = value.to_string(),
            DraftField::Venue => self.venue = value.to_string(),
            DraftField::Date => self.date = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::OrganizerName => self.organizer_name = value.to_string(),
            DraftField::Contact => self.contact = value.to_string(),
        }
        Ok(())
    }
}

/// Draft form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Category,
    City,
    Venue,
    Date,
    Description,
    OrganizerName,
    Contact,
}

impl DraftField {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::City => "city",
            Self::Venue => "venue",
            Self::Date => "date",
            Self::Description => "description",
            Self::OrganizerName => "organizerName",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "category" => Ok(Self::Category),
            "city" => Ok(Self::City),
            "venue" => Ok(Self::Venue),
            "date" => Ok(Self::Date),
            "description" => Ok(Self::Description),
            "organizername" | "organizer" => Ok(Self::OrganizerName),
            "contact" => Ok(Self::Contact),
            other => Err(format!("unknown draft field: {other}")),
        }
    }
}

/// Identity of one description generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(pub(crate) u64);

/// Submission progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Editing,
    /// Handed to the host, waiting for the moderation queue to accept it.
    Submitting,
}

/// Organizer screen state.
#[derive(Debug, Clone, Default)]
pub struct OrganizerForm {
    pub draft: EventDraft,
    pub status: SubmitStatus,
    /// Informational message for the organizer (never blocking).
    pub notice: Option<String>,
    pending_description: Option<RequestToken>,
    next_request: u64,
}

impl OrganizerForm {
    /// Discards the draft and starts over.
    ///
    /// The request counter survives, so a description still in flight for the
    /// discarded draft can never match a request made for the new one.
    pub fn restart(&mut self) {
        *self = Self {
            next_request: self.next_request,
            ..Self::default()
        };
    }

    /// Whether a description request is in flight.
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.pending_description.is_some()
    }

    /// Starts a description request if the draft allows one.
    ///
    /// Returns `None` and leaves state untouched while a request is pending.
    /// Returns `None` and sets a notice when title or city is empty.
    pub fn begin_description_request(&mut self) -> Option<RequestToken> {
        if self.pending_description.is_some() {
            tracing::debug!("description request already pending, ignoring");
            return None;
        }

        if self.draft.title.is_empty() || self.draft.city.is_empty() {
            self.notice = Some(MISSING_TITLE_OR_CITY.to_string());
            return None;
        }

        self.next_request += 1;
        let token = RequestToken(self.next_request);
        self.pending_description = Some(token);
        self.notice = None;
        Some(token)
    }

    /// Accepts a generated description if it answers the pending request.
    ///
    /// Returns whether the draft was updated.
    pub fn complete_description_request(&mut self, token: RequestToken, text: &str) -> bool {
        if self.pending_description != Some(token) {
            tracing::debug!(request = token.0, "dropping description for stale request");
            return false;
        }

        self.pending_description = None;
        self.draft.description = text.to_string();
        true
    }

    /// Moves to `Submitting` if the draft is complete, otherwise sets a notice.
    ///
    /// Returns the draft to hand to the moderation queue.
    pub fn begin_submit(&mut self) -> Option<EventDraft> {
        if self.status == SubmitStatus::Submitting {
            return None;
        }

        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(|f| f.name()).collect();
            self.notice = Some(format!("Please fill in: {}", names.join(", ")));
            return None;
        }

        self.status = SubmitStatus::Submitting;
        self.notice = None;
        Some(self.draft.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> EventDraft {
        EventDraft {
            title: "Sunset Yoga by the Beach".into(),
            venue: "Patong Beach".into(),
            city: "Phuket".into(),
            date: "2024-12-01T17:30".into(),
            description: "Stretch as the sun goes down.".into(),
            organizer_name: "Beach Yogis".into(),
            contact: "hi@beachyogis.th".into(),
            ..EventDraft::default()
        }
    }

    #[test]
    fn defaults_match_the_form() {
        let draft = EventDraft::default();
        assert_eq!(draft.category, Category::Music);
        assert_eq!(draft.city, "Bangkok");
    }

    #[test]
    fn description_requires_title() {
        let mut form = OrganizerForm::default();
        assert_eq!(form.begin_description_request(), None);
        assert_eq!(form.notice.as_deref(), Some(MISSING_TITLE_OR_CITY));
    }

    #[test]
    fn description_requests_are_not_reentrant() {
        let mut form = OrganizerForm::default();
        form.draft.title = "Jazz Night".into();

        let first = form.begin_description_request().unwrap();
        assert!(form.is_generating());
        assert_eq!(form.begin_description_request(), None);

        assert!(form.complete_description_request(first, "Smooth."));
        assert_eq!(form.draft.description, "Smooth.");
        assert!(!form.is_generating());
        assert!(form.begin_description_request().is_some());
    }

    #[test]
    fn stale_description_is_dropped() {
        let mut form = OrganizerForm::default();
        form.draft.title = "Jazz Night".into();
        let stale = form.begin_description_request().unwrap();

        form.restart();
        form.draft.title = "Jazz Night".into();
        let current = form.begin_description_request().unwrap();
        assert_ne!(stale, current);

        assert!(!form.complete_description_request(stale, "late"));
        assert!(form.draft.description.is_empty());
        assert!(form.is_generating());
    }

    #[test]
    fn submit_reports_missing_fields() {
        let mut form = OrganizerForm::default();
        form.draft.title = "Jazz Night".into();

        assert_eq!(form.begin_submit(), None);
        assert_eq!(
            form.notice.as_deref(),
            Some("Please fill in: date, venue, description, organizerName, contact")
        );
        assert_eq!(form.status, SubmitStatus::Editing);
    }

    #[test]
    fn submit_complete_draft() {
        let mut form = OrganizerForm {
            draft: complete_draft(),
            ..OrganizerForm::default()
        };

        assert_eq!(form.begin_submit(), Some(complete_draft()));
        assert_eq!(form.status, SubmitStatus::Submitting);
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn set_fields_by_name() {
        let mut draft = EventDraft::default();
        draft.set("organizer".parse().unwrap(), "Chef Somchai").unwrap();
        draft.set(DraftField::Category, "workshops").unwrap();
        assert_eq!(draft.organizer_name, "Chef Somchai");
        assert_eq!(draft.category, Category::Workshops);
        assert!(draft.set(DraftField::Category, "Opera").is_err());
        assert_eq!(draft.location_text(), ", Bangkok");
    }
}
