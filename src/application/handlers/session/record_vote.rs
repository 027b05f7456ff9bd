//! RecordVoteHandler - tallies a ballot and saves the result.
//!
//! A ballot that does not reconcile against the eligible voter count is
//! still saved; the mismatch is logged and surfaced through the returned
//! outcome so the operator can fix it on the spot or later.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::handlers::session::SessionCommandError;
use crate::domain::foundation::SessionId;
use crate::domain::protocol::{Ballot, ProtocolSession, VoteOutcome};
use crate::ports::SessionStore;

/// Command to record a ballot for one agenda item.
#[derive(Debug, Clone)]
pub struct RecordVoteCommand {
    pub session_id: SessionId,
    /// Zero-based index into the agenda.
    pub item_index: usize,
    pub ballot: Ballot,
}

/// Result of recording a ballot.
#[derive(Debug)]
pub struct RecordVoteResult {
    /// Tally summary, including the reconciliation flag.
    pub outcome: VoteOutcome,
    pub session: ProtocolSession,
}

/// Handler for vote recording.
pub struct RecordVoteHandler {
    store: Arc<dyn SessionStore>,
}

impl RecordVoteHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RecordVoteCommand,
    ) -> Result<RecordVoteResult, SessionCommandError> {
        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionCommandError::SessionNotFound(cmd.session_id))?;

        let outcome = session.record_vote(cmd.item_index, cmd.ballot)?;

        self.store.save(&session).await?;

        if outcome.needs_reconciliation() {
            warn!(
                session_id = %session.id(),
                top_number = outcome.top_number,
                counted = outcome.counted_votes,
                expected = outcome.expected_voters,
                "Ballot does not reconcile against eligible voters"
            );
        } else {
            info!(
                session_id = %session.id(),
                top_number = outcome.top_number,
                decision = ?outcome.decision,
                "Vote recorded"
            );
        }

        Ok(RecordVoteResult { outcome, session })
    }
}
