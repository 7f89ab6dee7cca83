//! Actions representing side effects to be executed by the host.
//!
//! This module defines the [`Action`] type: commands produced by the event handler
//! that the host runs outside the state machine. Timers, the description
//! generation call, and handing drafts to the moderation queue all happen here;
//! their outcomes come back as [`Event`](crate::app::Event)s.
//!
//! # Example
//!
//! ```rust
//! use eventscout::app::{handle_event, Action, AppState, Event};
//! use eventscout::catalog::Catalog;
//!
//! let mut state = AppState::new(Catalog::sample());
//! handle_event(&mut state, &Event::ActivateEvent { event_id: "2".into() });
//! let (_, actions) = handle_event(&mut state, &Event::CloseDrawer);
//! assert!(matches!(actions[0], Action::ScheduleDrawerClear { .. }));
//! ```

use super::drawer::ClearToken;
use super::organizer::{EventDraft, RequestToken};
use crate::domain::Category;
use std::time::Duration;

/// Commands representing side effects to be executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arms the one-shot drawer clear timer.
    ///
    /// After `delay`, the host sends back
    /// [`Event::DrawerClearElapsed`](crate::app::Event::DrawerClearElapsed) with
    /// the same token. The timer is never cancelled; stale tokens are ignored.
    ScheduleDrawerClear {
        token: ClearToken,
        delay: Duration,
    },

    /// Asks the description generator for a draft description.
    ///
    /// The host answers with
    /// [`Event::DescriptionGenerated`](crate::app::Event::DescriptionGenerated).
    /// The generator always produces text, so there is no failure event.
    GenerateDescription {
        request: RequestToken,
        title: String,
        category: Category,
        location: String,
    },

    /// Hands a complete draft to the moderation queue.
    ///
    /// The host answers with
    /// [`Event::SubmissionAccepted`](crate::app::Event::SubmissionAccepted).
    SubmitForModeration(EventDraft),
}
