//! Moderation queue for organizer submissions.
//!
//! Submitted drafts wait here for review. The queue lives for the session only;
//! nothing is persisted.

use std::collections::VecDeque;

use crate::app::EventDraft;

/// A draft accepted for review, with its ticket number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub draft: EventDraft,
}

/// First-in first-out queue of submissions awaiting moderation.
#[derive(Debug, Default)]
pub struct ModerationQueue {
    pending: VecDeque<Submission>,
    next_ticket: u64,
}

impl ModerationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a draft and returns its ticket. Tickets start at 1 and increase.
    pub fn submit(&mut self, draft: EventDraft) -> u64 {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        tracing::debug!(ticket, title = %draft.title, queued = self.pending.len() + 1, "draft queued for moderation");
        self.pending.push_back(Submission { ticket, draft });
        ticket
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Submissions in arrival order.
    pub fn pending(&self) -> impl Iterator<Item = &Submission> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            ..EventDraft::default()
        }
    }

    #[test]
    fn tickets_increase_and_order_is_fifo() {
        let mut queue = ModerationQueue::new();
        assert!(queue.is_empty());

        assert_eq!(queue.submit(draft("A")), 1);
        assert_eq!(queue.submit(draft("B")), 2);
        assert_eq!(queue.len(), 2);

        let titles: Vec<_> = queue.pending().map(|s| s.draft.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        let tickets: Vec<_> = queue.pending().map(|s| s.ticket).collect();
        assert_eq!(tickets, [1, 2]);
    }
}
