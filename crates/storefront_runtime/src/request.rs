//! Generation tagging for overlapping async fetches.
//!
//! Each fetch takes a [`RequestTicket`] before it starts. When it completes, the result is applied
//! only if no newer ticket was issued in the meantime, so a slow response for an old tab can
//! never overwrite the current one.

use std::{cell::Cell, rc::Rc};

/// Identifier of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Issues tickets and answers whether a ticket is still the latest. Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Rc<Cell<u64>>,
}

impl RequestTracker {
    /// Creates a tracker with no requests issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestTicket(next)
    }

    /// Returns whether `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Supersedes every outstanding ticket without starting a request.
    pub fn invalidate(&self) {
        let _ = self.begin();
    }
}

/// Result of a single-record lookup as seen by a page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T> {
    /// Fetch in flight.
    #[default]
    Loading,
    /// The record does not exist or could not be read.
    Missing,
    /// The record.
    Ready(T),
}

impl<T> Loadable<T> {
    /// Wraps a lookup result.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Self::Ready)
    }

    /// The record, once loaded.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_map_to_missing_or_ready() {
        assert_eq!(Loadable::<u8>::default(), Loadable::Loading);
        assert_eq!(Loadable::<u8>::from_option(None), Loadable::Missing);
        assert_eq!(Loadable::from_option(Some(3)).ready(), Some(&3));
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let tracker = RequestTracker::new();
        let featured = tracker.begin();
        let bestseller = tracker.begin();
        assert!(!tracker.is_current(featured));
        assert!(tracker.is_current(bestseller));
    }

    #[test]
    fn clones_share_generations() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.clone().invalidate();
        assert!(!tracker.is_current(ticket));
    }

    #[test]
    fn out_of_order_completion_keeps_newest_result() {
        let tracker = RequestTracker::new();
        let mut shown: Option<&str> = None;
        let slow = tracker.begin();
        let fast = tracker.begin();

        for (ticket, result) in [(fast, "new"), (slow, "featured")] {
            if tracker.is_current(ticket) {
                shown = Some(result);
            }
        }
        assert_eq!(shown, Some("new"));
    }
}
