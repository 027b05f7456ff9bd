//! MarkItemCompletedHandler - flags an agenda item as dealt with.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::session::SessionCommandError;
use crate::domain::foundation::SessionId;
use crate::domain::protocol::ProtocolSession;
use crate::ports::SessionStore;

/// Command to mark an agenda item as completed.
#[derive(Debug, Clone)]
pub struct MarkItemCompletedCommand {
    pub session_id: SessionId,
    /// Zero-based index into the agenda.
    pub item_index: usize,
}

/// Result of marking an item completed.
#[derive(Debug)]
pub struct MarkItemCompletedResult {
    pub session: ProtocolSession,
}

/// Handler for item completion.
pub struct MarkItemCompletedHandler {
    store: Arc<dyn SessionStore>,
}

impl MarkItemCompletedHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: MarkItemCompletedCommand,
    ) -> Result<MarkItemCompletedResult, SessionCommandError> {
        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionCommandError::SessionNotFound(cmd.session_id))?;

        session.mark_completed(cmd.item_index)?;

        self.store.save(&session).await?;

        debug!(
            session_id = %session.id(),
            item_index = cmd.item_index,
            "Item marked completed"
        );

        Ok(MarkItemCompletedResult { session })
    }
}
