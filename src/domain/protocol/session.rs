//! ProtocolSession aggregate - the live state of one assembly meeting.
//!
//! The session owns its item records and is the single source of truth
//! for the item at `current_item_index`; any edit buffer kept by a caller
//! must be resynchronized from it after every navigation. Every operation
//! is total: it either mutates validly or leaves the session unchanged
//! and reports the condition.
//!
//! # Invariants
//!
//! - `items` is fixed in length and order after creation
//! - `0 <= current_item_index < items.len()` at all times
//! - item completion flags are monotonic
//! - `Completed` is terminal; no item mutation is accepted afterwards

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, MeetingId, MeetingType, SessionId, SessionStatus, StateMachine,
    Timestamp, VoterCount,
};
use crate::domain::protocol::item::{ItemRecord, ItemUpdate};
use crate::domain::protocol::navigator::{step, Direction, NavigationOutcome};
use crate::domain::protocol::tally::{tally, Ballot, VoteOutcome};
use crate::domain::protocol::template::{AgendaTemplate, SessionConfig};

/// Engine capabilities for a session.
///
/// The portal historically ran two near-identical engine copies differing
/// only in per-item voter handling; a capability flag replaces that fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCapabilities {
    /// Whether `set_current_voters` may diverge an item from the session
    /// total. When disabled every tally reconciles against the total
    /// fixed at creation.
    pub per_item_voter_override: bool,
}

impl Default for SessionCapabilities {
    fn default() -> Self {
        Self {
            per_item_voter_override: true,
        }
    }
}

/// Live protocol session for one owners' assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolSession {
    /// Unique identifier for this session.
    id: SessionId,

    /// The planned meeting this session was created from.
    meeting_ref: MeetingId,

    /// Meeting title, from the template.
    title: String,

    /// Scheduled date of the meeting.
    date: Timestamp,

    /// Venue, if known.
    location: Option<String>,

    /// Kind of assembly.
    meeting_type: MeetingType,

    /// Person chairing the assembly.
    chairperson: String,

    /// Person keeping the minutes.
    secretary: String,

    /// Nominal eligible voters for the whole meeting, fixed at creation.
    total_voters: VoterCount,

    /// Lifecycle status.
    status: SessionStatus,

    /// Stamped on first entry into Running.
    start_time: Option<Timestamp>,

    /// Stamped on entry into Completed.
    end_time: Option<Timestamp>,

    /// Pointer into `items`; always in bounds.
    current_item_index: usize,

    /// Ordered item records, one per agenda point.
    items: Vec<ItemRecord>,

    /// Engine capabilities for this session.
    capabilities: SessionCapabilities,
}

impl ProtocolSession {
    /// Creates a session from a planned agenda plus operator bootstrap data.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if chairperson or secretary is blank
    /// - `OutOfRange` if `total_voters` is not positive
    /// - `ValidationFailed` if the agenda has no items (an empty agenda
    ///   could not satisfy the index invariant)
    pub fn from_template(
        template: &AgendaTemplate,
        config: &SessionConfig,
        capabilities: SessionCapabilities,
    ) -> Result<Self, DomainError> {
        Self::validate_role("chairperson", &config.chairperson)?;
        Self::validate_role("secretary", &config.secretary)?;
        let total_voters = VoterCount::new(config.total_voters)?;

        if template.agenda.is_empty() {
            return Err(DomainError::validation(
                "agenda",
                "Agenda template must contain at least one item",
            ));
        }

        let mut entries: Vec<_> = template.agenda.iter().collect();
        entries.sort_by_key(|entry| entry.order);

        let items = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ItemRecord::from_template_entry(entry, i as u32 + 1, total_voters))
            .collect();

        Ok(Self {
            id: SessionId::new(),
            meeting_ref: template.meeting_id,
            title: template.title.clone(),
            date: template.date,
            location: template.location.clone(),
            meeting_type: template.meeting_type,
            chairperson: config.chairperson.trim().to_string(),
            secretary: config.secretary.trim().to_string(),
            total_voters,
            status: SessionStatus::Preparing,
            start_time: None,
            end_time: None,
            current_item_index: 0,
            items,
            capabilities,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn meeting_ref(&self) -> &MeetingId {
        &self.meeting_ref
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &Timestamp {
        &self.date
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn meeting_type(&self) -> MeetingType {
        self.meeting_type
    }

    pub fn chairperson(&self) -> &str {
        &self.chairperson
    }

    pub fn secretary(&self) -> &str {
        &self.secretary
    }

    pub fn total_voters(&self) -> VoterCount {
        self.total_voters
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn start_time(&self) -> Option<&Timestamp> {
        self.start_time.as_ref()
    }

    pub fn end_time(&self) -> Option<&Timestamp> {
        self.end_time.as_ref()
    }

    pub fn current_item_index(&self) -> usize {
        self.current_item_index
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    /// Returns the item record at `current_item_index`.
    pub fn current_item(&self) -> &ItemRecord {
        &self.items[self.current_item_index]
    }

    /// Returns the item record at the given index, if in bounds.
    pub fn item(&self, index: usize) -> Option<&ItemRecord> {
        self.items.get(index)
    }

    pub fn capabilities(&self) -> SessionCapabilities {
        self.capabilities
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Transitions the session to a new status.
    ///
    /// First entry into `Running` stamps `start_time` (only if unset) and
    /// opens the current item; entering `Completed` stamps `end_time`.
    /// An unreconciled vote (`is_valid=false`) does not block completion.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` for any transition outside the machine
    pub fn set_status(&mut self, target: SessionStatus) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;

        match target {
            SessionStatus::Running => {
                let now = Timestamp::now();
                if self.start_time.is_none() {
                    self.start_time = Some(now);
                }
                self.items[self.current_item_index].start(now);
            }
            SessionStatus::Completed => {
                self.end_time = Some(Timestamp::now());
            }
            _ => {}
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    /// Moves the item pointer one step, clamped to the agenda bounds.
    ///
    /// A boundary move leaves the session untouched. Moving onto an item
    /// while the session is running opens it (stamps its start time).
    pub fn navigate(&mut self, direction: Direction) -> NavigationOutcome {
        let outcome = step(self.current_item_index, self.items.len(), direction);
        if let NavigationOutcome::Moved(index) = outcome {
            self.current_item_index = index;
            if self.status == SessionStatus::Running {
                self.items[index].start(Timestamp::now());
            }
        }
        outcome
    }

    // ─────────────────────────────────────────────────────────────────────
    // Item record management
    // ─────────────────────────────────────────────────────────────────────

    /// Merges partial free-text fields into the item at `index`.
    ///
    /// Content is not validated; other items are untouched.
    pub fn update_item(&mut self, index: usize, update: &ItemUpdate) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.item_mut(index)?.apply_update(update);
        Ok(())
    }

    /// Overrides the eligible voter count for one item.
    ///
    /// # Errors
    ///
    /// - `OverrideDisabled` when the capability is off for this session
    /// - `OutOfRange` for a non-positive count (item unchanged)
    pub fn set_current_voters(&mut self, index: usize, count: i32) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        if !self.capabilities.per_item_voter_override {
            return Err(DomainError::new(
                ErrorCode::OverrideDisabled,
                "Per-item voter overrides are disabled for this session",
            ));
        }
        let voters = VoterCount::new(count)?;
        self.item_mut(index)?.set_current_voters(voters);
        Ok(())
    }

    /// Marks the item at `index` as completed. Idempotent; no unmark.
    pub fn mark_completed(&mut self, index: usize) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.item_mut(index)?.mark_completed();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Voting
    // ─────────────────────────────────────────────────────────────────────

    /// Records a ballot for the item at `index`.
    ///
    /// The tally runs against the item's current voter count; the save
    /// always succeeds and overwrites any prior result, even when the
    /// ballot does not reconcile. Stamps the item's end time.
    pub fn record_vote(&mut self, index: usize, ballot: Ballot) -> Result<VoteOutcome, DomainError> {
        self.ensure_mutable()?;
        let item = self.item_mut(index)?;

        let (result, decision) = tally(&ballot, item.current_voters(), item.requires_voting());
        let outcome = VoteOutcome {
            top_number: item.top_number(),
            decision,
            is_valid: result.is_valid,
            expected_voters: result.total_voters,
            counted_votes: ballot.total(),
        };
        item.record_result(result, decision, Timestamp::now());
        Ok(outcome)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SessionCompleted,
                "Cannot modify items of a completed session",
            ))
        }
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut ItemRecord, DomainError> {
        let len = self.items.len();
        self.items.get_mut(index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ItemNotFound,
                format!("No agenda item at index {} (agenda has {} items)", index, len),
            )
        })
    }

    fn validate_role(field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyField,
                format!("Field '{}' cannot be empty", field),
            )
            .with_detail("field", field));
        }
        Ok(())
    }
}
