//! SessionStatus enum for tracking lifecycle of protocol sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a live protocol session.
///
/// The observed behavior in the portal allowed jumping straight from
/// Preparing to Completed; the documented machine below is the stricter
/// version and only adjacent transitions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Preparing,
    Running,
    Paused,
    Completed,
}

impl SessionStatus {
    /// Returns true if item records may still be modified.
    ///
    /// Completed is terminal; the core never reopens a finished meeting.
    pub fn is_mutable(&self) -> bool {
        !matches!(self, SessionStatus::Completed)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Preparing, Running)
                | (Running, Paused)
                | (Paused, Running)
                | (Running, Completed)
                | (Paused, Completed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Preparing => vec![Running],
            Running => vec![Paused, Completed],
            Paused => vec![Running, Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Preparing => "Preparing",
            SessionStatus::Running => "Running",
            SessionStatus::Paused => "Paused",
            SessionStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
