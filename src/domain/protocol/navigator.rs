//! Bounds-checked movement across the ordered agenda.
//!
//! Moving past either end of the agenda is a clamped no-op, never an
//! error; callers can distinguish it from an actual move through the
//! returned outcome.

use serde::{Deserialize, Serialize};

/// Direction of agenda navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Previous,
    Next,
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The pointer moved to the given index.
    Moved(usize),
    /// Already at the first/last item; the pointer stayed put.
    Boundary,
}

impl NavigationOutcome {
    /// Returns true if the pointer actually moved.
    pub fn moved(&self) -> bool {
        matches!(self, NavigationOutcome::Moved(_))
    }
}

/// Computes one navigation step over an agenda of `len` items.
///
/// `current` must already satisfy `current < len`; the result does too.
pub fn step(current: usize, len: usize, direction: Direction) -> NavigationOutcome {
    match direction {
        Direction::Next if current + 1 < len => NavigationOutcome::Moved(current + 1),
        Direction::Previous if current > 0 => NavigationOutcome::Moved(current - 1),
        _ => NavigationOutcome::Boundary,
    }
}
