//! UpdateItemHandler - merges operator edits into an item record.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::session::SessionCommandError;
use crate::domain::foundation::SessionId;
use crate::domain::protocol::{ItemUpdate, ProtocolSession};
use crate::ports::SessionStore;

/// Command to update an item's free-text fields.
#[derive(Debug, Clone)]
pub struct UpdateItemCommand {
    pub session_id: SessionId,
    /// Zero-based index into the agenda.
    pub item_index: usize,
    pub update: ItemUpdate,
}

/// Result of a successful item update.
#[derive(Debug)]
pub struct UpdateItemResult {
    pub session: ProtocolSession,
}

/// Handler for item record updates.
pub struct UpdateItemHandler {
    store: Arc<dyn SessionStore>,
}

impl UpdateItemHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateItemCommand,
    ) -> Result<UpdateItemResult, SessionCommandError> {
        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionCommandError::SessionNotFound(cmd.session_id))?;

        session.update_item(cmd.item_index, &cmd.update)?;

        self.store.save(&session).await?;

        debug!(
            session_id = %session.id(),
            item_index = cmd.item_index,
            "Item record updated"
        );

        Ok(UpdateItemResult { session })
    }
}
