//! DecisionResult enum - the derived outcome of a voted agenda item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binding outcome derived from an item's vote tally.
///
/// Items that do not require voting never carry anything other than
/// `NoVote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionResult {
    #[default]
    NoVote,
    Approved,
    Rejected,
    Deferred,
}

impl DecisionResult {
    /// Returns true if a binding decision was reached (approved or rejected).
    pub fn is_decided(&self) -> bool {
        matches!(self, DecisionResult::Approved | DecisionResult::Rejected)
    }
}

impl fmt::Display for DecisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionResult::NoVote => "NoVote",
            DecisionResult::Approved => "Approved",
            DecisionResult::Rejected => "Rejected",
            DecisionResult::Deferred => "Deferred",
        };
        write!(f, "{}", s)
    }
}
