//! ItemRecord - the mutable per-agenda-item record of a session.
//!
//! One record exists per agenda point (TOP). The set of records is fixed
//! at session creation; only their content changes during the meeting.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionResult, ItemId, Timestamp, VoterCount};
use crate::domain::protocol::template::AgendaTemplateItem;

/// Saved vote tally for an agenda item.
///
/// `total_voters` captures the item's `current_voters` at the moment of
/// the save, not the session total. `is_valid` is informational only; an
/// arithmetic mismatch never blocks the save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingResult {
    pub votes_for: u32,
    pub votes_against: u32,
    pub abstentions: u32,
    pub total_voters: u32,
    pub is_valid: bool,
}

impl VotingResult {
    /// Sum of all counted votes; saturates instead of overflowing on
    /// absurd operator input.
    pub fn counted(&self) -> u32 {
        self.votes_for
            .saturating_add(self.votes_against)
            .saturating_add(self.abstentions)
    }
}

/// Partial update for an item's free-text fields.
///
/// `None` fields leave the record untouched; content is not validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub discussion: Option<String>,
    pub keywords: Option<String>,
    pub decision: Option<String>,
    pub description: Option<String>,
}

impl ItemUpdate {
    /// Creates an empty update (applies no changes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the discussion notes.
    pub fn with_discussion(mut self, discussion: impl Into<String>) -> Self {
        self.discussion = Some(discussion.into());
        self
    }

    /// Sets the keywords.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Sets the decision text.
    pub fn with_decision(mut self, decision: impl Into<String>) -> Self {
        self.decision = Some(decision.into());
        self
    }

    /// Sets the item description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Mutable record of one agenda point within a running session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Unique identifier for this record.
    id: ItemId,

    /// 1-based position within the agenda (TOP number).
    top_number: u32,

    /// Item title, from the template.
    title: String,

    /// Item description; may be edited during the meeting.
    description: String,

    /// Whether a formal vote is required.
    requires_voting: bool,

    /// Planned duration in minutes, carried from the template.
    duration_minutes: Option<u32>,

    /// Free-text discussion notes.
    discussion: String,

    /// Free-text keywords gathered during discussion.
    keywords: String,

    /// Free-text binding decision wording.
    decision: String,

    /// Eligible voters for this item; defaults to the session total and
    /// may diverge when attendance changes between items.
    current_voters: VoterCount,

    /// Completion flag; monotonic, the core exposes no unmark.
    is_completed: bool,

    /// Last saved vote tally, if any.
    voting_result: Option<VotingResult>,

    /// Derived decision outcome.
    decision_result: DecisionResult,

    /// When treatment of this item started.
    item_start_time: Option<Timestamp>,

    /// When the last vote for this item was recorded.
    item_end_time: Option<Timestamp>,
}

impl ItemRecord {
    /// Builds a fresh record from a planned agenda entry.
    pub fn from_template_entry(
        entry: &AgendaTemplateItem,
        top_number: u32,
        voters: VoterCount,
    ) -> Self {
        Self {
            id: ItemId::new(),
            top_number,
            title: entry.title.clone(),
            description: entry.description.clone(),
            requires_voting: entry.requires_voting,
            duration_minutes: entry.duration_minutes,
            discussion: String::new(),
            keywords: String::new(),
            decision: String::new(),
            current_voters: voters,
            is_completed: false,
            voting_result: None,
            decision_result: DecisionResult::NoVote,
            item_start_time: None,
            item_end_time: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn top_number(&self) -> u32 {
        self.top_number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn requires_voting(&self) -> bool {
        self.requires_voting
    }

    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
    }

    pub fn discussion(&self) -> &str {
        &self.discussion
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn decision(&self) -> &str {
        &self.decision
    }

    pub fn current_voters(&self) -> VoterCount {
        self.current_voters
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn voting_result(&self) -> Option<&VotingResult> {
        self.voting_result.as_ref()
    }

    pub fn decision_result(&self) -> DecisionResult {
        self.decision_result
    }

    pub fn item_start_time(&self) -> Option<&Timestamp> {
        self.item_start_time.as_ref()
    }

    pub fn item_end_time(&self) -> Option<&Timestamp> {
        self.item_end_time.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations (invoked through the session aggregate)
    // ─────────────────────────────────────────────────────────────────────

    /// Merges the given partial fields into the record.
    pub(crate) fn apply_update(&mut self, update: &ItemUpdate) {
        if let Some(discussion) = &update.discussion {
            self.discussion = discussion.clone();
        }
        if let Some(keywords) = &update.keywords {
            self.keywords = keywords.clone();
        }
        if let Some(decision) = &update.decision {
            self.decision = decision.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
    }

    /// Overwrites the per-item voter count.
    ///
    /// A previously saved voting result is left in place; its `is_valid`
    /// flag is only recomputed by the next vote save.
    pub(crate) fn set_current_voters(&mut self, voters: VoterCount) {
        self.current_voters = voters;
    }

    /// Marks the item as completed. Idempotent.
    pub(crate) fn mark_completed(&mut self) {
        self.is_completed = true;
    }

    /// Stores a freshly tallied vote, overwriting any prior result.
    pub(crate) fn record_result(
        &mut self,
        result: VotingResult,
        decision: DecisionResult,
        at: Timestamp,
    ) {
        self.voting_result = Some(result);
        self.decision_result = decision;
        self.item_end_time = Some(at);
    }

    /// Stamps the start of treatment, first call wins.
    pub(crate) fn start(&mut self, at: Timestamp) {
        if self.item_start_time.is_none() {
            self.item_start_time = Some(at);
        }
    }
}
