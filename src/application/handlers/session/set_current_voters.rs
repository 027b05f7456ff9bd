//! SetCurrentVotersHandler - per-item override of the eligible voter count.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::session::SessionCommandError;
use crate::domain::foundation::SessionId;
use crate::domain::protocol::ProtocolSession;
use crate::ports::SessionStore;

/// Command to override the voter count for one agenda item.
#[derive(Debug, Clone)]
pub struct SetCurrentVotersCommand {
    pub session_id: SessionId,
    /// Zero-based index into the agenda.
    pub item_index: usize,
    /// Raw operator input; validated by the domain.
    pub count: i32,
}

/// Result of a successful override.
#[derive(Debug)]
pub struct SetCurrentVotersResult {
    pub session: ProtocolSession,
}

/// Handler for per-item voter overrides.
pub struct SetCurrentVotersHandler {
    store: Arc<dyn SessionStore>,
}

impl SetCurrentVotersHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SetCurrentVotersCommand,
    ) -> Result<SetCurrentVotersResult, SessionCommandError> {
        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionCommandError::SessionNotFound(cmd.session_id))?;

        session.set_current_voters(cmd.item_index, cmd.count)?;

        self.store.save(&session).await?;

        info!(
            session_id = %session.id(),
            item_index = cmd.item_index,
            voters = cmd.count,
            "Per-item voter count overridden"
        );

        Ok(SetCurrentVotersResult { session })
    }
}
