//! Identity gate for in-flight assistant requests.
//!
//! Suggestion requests carry the agenda item they were issued for. By the
//! time a response lands, the operator may have navigated away or fired a
//! newer request for the same item; the gate lets the handler tell whether
//! a response is still the one the screen is waiting for.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Ticket issued when a suggestion request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTicket {
    /// The agenda item the request was issued for.
    pub item_index: usize,
    /// Monotonic sequence number; only the newest per item applies.
    seq: u64,
}

/// Tracks the newest suggestion request per agenda item.
#[derive(Debug, Default)]
pub struct SuggestionGate {
    counter: AtomicU64,
    latest: Mutex<HashMap<usize, u64>>,
}

impl SuggestionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new request for an item, superseding any older one.
    pub fn issue(&self, item_index: usize) -> SuggestionTicket {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.latest.lock().unwrap().insert(item_index, seq);
        SuggestionTicket { item_index, seq }
    }

    /// Returns true if the ticketed response should be applied: the
    /// operator is still on that item and no newer request superseded it.
    pub fn should_apply(&self, ticket: &SuggestionTicket, current_index: usize) -> bool {
        if ticket.item_index != current_index {
            return false;
        }
        self.latest.lock().unwrap().get(&ticket.item_index) == Some(&ticket.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_applies_on_same_item() {
        let gate = SuggestionGate::new();
        let ticket = gate.issue(2);
        assert!(gate.should_apply(&ticket, 2));
    }

    #[test]
    fn ticket_is_stale_after_navigation() {
        let gate = SuggestionGate::new();
        let ticket = gate.issue(2);
        assert!(!gate.should_apply(&ticket, 3));
    }

    #[test]
    fn newer_request_supersedes_older_one() {
        let gate = SuggestionGate::new();
        let first = gate.issue(2);
        let second = gate.issue(2);

        assert!(!gate.should_apply(&first, 2));
        assert!(gate.should_apply(&second, 2));
    }

    #[test]
    fn requests_for_different_items_do_not_interfere() {
        let gate = SuggestionGate::new();
        let for_item_one = gate.issue(1);
        let _for_item_two = gate.issue(2);

        assert!(gate.should_apply(&for_item_one, 1));
    }
}
