//! Command handlers for the session lifecycle and item records.
//!
//! Every handler follows the same load-mutate-save cycle against the
//! [`SessionStore`](crate::ports::SessionStore) port and returns the
//! updated session snapshot, so the caller never works from stale state.

use crate::domain::foundation::{DomainError, SessionId};

pub mod create_session;
pub mod mark_item_completed;
pub mod navigate;
pub mod record_vote;
pub mod set_current_voters;
pub mod set_status;
pub mod update_item;

pub use create_session::{CreateSessionCommand, CreateSessionHandler, CreateSessionResult};
pub use mark_item_completed::{
    MarkItemCompletedCommand, MarkItemCompletedHandler, MarkItemCompletedResult,
};
pub use navigate::{NavigateCommand, NavigateHandler, NavigateResult};
pub use record_vote::{RecordVoteCommand, RecordVoteHandler, RecordVoteResult};
pub use set_current_voters::{
    SetCurrentVotersCommand, SetCurrentVotersHandler, SetCurrentVotersResult,
};
pub use set_status::{SetStatusCommand, SetStatusHandler, SetStatusResult};
pub use update_item::{UpdateItemCommand, UpdateItemHandler, UpdateItemResult};

/// Error type shared by the session command handlers.
#[derive(Debug, Clone)]
pub enum SessionCommandError {
    /// Session not found in the store.
    SessionNotFound(SessionId),
    /// Domain error (validation, state machine, storage).
    Domain(DomainError),
}

impl std::fmt::Display for SessionCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionCommandError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
            SessionCommandError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SessionCommandError {}

impl From<DomainError> for SessionCommandError {
    fn from(err: DomainError) -> Self {
        SessionCommandError::Domain(err)
    }
}
