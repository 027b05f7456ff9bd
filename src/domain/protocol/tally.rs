//! Vote tallying and decision derivation.
//!
//! The tally engine prioritizes capturing what was announced live over
//! blocking on arithmetic mismatches: a ballot whose sum does not match
//! the eligible voter count is still saved, flagged `is_valid=false`, and
//! reconciliation is left to the operator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionResult, VoterCount};
use crate::domain::protocol::item::VotingResult;

/// Raw vote counts announced by the chairperson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ballot {
    pub votes_for: u32,
    pub votes_against: u32,
    pub abstentions: u32,
}

impl Ballot {
    /// Creates a ballot from already-parsed counts.
    pub fn new(votes_for: u32, votes_against: u32, abstentions: u32) -> Self {
        Self {
            votes_for,
            votes_against,
            abstentions,
        }
    }

    /// Creates a ballot from raw operator input.
    ///
    /// Unparseable or missing entries are treated as 0 before computation.
    pub fn from_raw(votes_for: &str, votes_against: &str, abstentions: &str) -> Self {
        fn parse(raw: &str) -> u32 {
            raw.trim().parse().unwrap_or(0)
        }
        Self {
            votes_for: parse(votes_for),
            votes_against: parse(votes_against),
            abstentions: parse(abstentions),
        }
    }

    /// Sum of all counted votes; saturates instead of overflowing on
    /// absurd operator input.
    pub fn total(&self) -> u32 {
        self.votes_for
            .saturating_add(self.votes_against)
            .saturating_add(self.abstentions)
    }

    /// Returns true if no vote was cast at all.
    pub fn is_blank(&self) -> bool {
        self.total() == 0
    }
}

/// Result of recording a ballot, surfaced to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    /// TOP number of the voted item.
    pub top_number: u32,
    /// Derived decision outcome.
    pub decision: DecisionResult,
    /// Whether the ballot reconciled against the eligible voter count.
    pub is_valid: bool,
    /// Eligible voters at save time.
    pub expected_voters: u32,
    /// Votes actually counted.
    pub counted_votes: u32,
}

impl VoteOutcome {
    /// Returns true if the operator should be warned about a mismatch.
    pub fn needs_reconciliation(&self) -> bool {
        !self.is_valid
    }
}

/// Tallies a ballot against the item's eligible voter count.
///
/// Decision derivation:
/// - `NoVote` when the item does not require voting, the ballot is blank,
///   or only abstentions were cast
/// - `Approved` when for > against
/// - `Rejected` when against > for
/// - `Deferred` on a genuine tie (for == against, both > 0)
pub fn tally(
    ballot: &Ballot,
    current_voters: VoterCount,
    requires_voting: bool,
) -> (VotingResult, DecisionResult) {
    let is_valid = ballot.total() == current_voters.get();

    let decision = if !requires_voting || ballot.is_blank() {
        DecisionResult::NoVote
    } else if ballot.votes_for > ballot.votes_against {
        DecisionResult::Approved
    } else if ballot.votes_against > ballot.votes_for {
        DecisionResult::Rejected
    } else if ballot.votes_for > 0 {
        DecisionResult::Deferred
    } else {
        // Abstentions only: nobody took a position, so nothing was deferred.
        DecisionResult::NoVote
    };

    let result = VotingResult {
        votes_for: ballot.votes_for,
        votes_against: ballot.votes_against,
        abstentions: ballot.abstentions,
        total_voters: current_voters.get(),
        is_valid,
    };

    (result, decision)
}
