//! SetStatusHandler - drives the session lifecycle state machine.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::session::SessionCommandError;
use crate::domain::foundation::{SessionId, SessionStatus};
use crate::domain::protocol::ProtocolSession;
use crate::ports::SessionStore;

/// Command to transition a session to a new lifecycle status.
#[derive(Debug, Clone)]
pub struct SetStatusCommand {
    pub session_id: SessionId,
    pub target: SessionStatus,
}

/// Result of a successful transition.
#[derive(Debug)]
pub struct SetStatusResult {
    /// The updated session snapshot.
    pub session: ProtocolSession,
}

/// Handler for session lifecycle transitions.
pub struct SetStatusHandler {
    store: Arc<dyn SessionStore>,
}

impl SetStatusHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SetStatusCommand) -> Result<SetStatusResult, SessionCommandError> {
        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionCommandError::SessionNotFound(cmd.session_id))?;

        session.set_status(cmd.target)?;

        self.store.save(&session).await?;

        info!(
            session_id = %session.id(),
            status = ?session.status(),
            "Session status changed"
        );

        Ok(SetStatusResult { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::session::test_support::seeded_store;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn transitions_and_persists() {
        let (store, session_id) = seeded_store().await;
        let handler = SetStatusHandler::new(store.clone());

        let result = handler
            .handle(SetStatusCommand {
                session_id,
                target: SessionStatus::Running,
            })
            .await
            .unwrap();

        assert_eq!(result.session.status(), SessionStatus::Running);
        assert!(result.session.start_time().is_some());

        let stored = store.find_by_id(&session_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Running);
    }

    #[tokio::test]
    async fn rejects_invalid_transition_and_keeps_stored_state() {
        let (store, session_id) = seeded_store().await;
        let handler = SetStatusHandler::new(store.clone());

        let result = handler
            .handle(SetStatusCommand {
                session_id,
                target: SessionStatus::Completed,
            })
            .await;

        assert!(matches!(
            result,
            Err(SessionCommandError::Domain(ref e))
                if e.code == ErrorCode::InvalidStateTransition
        ));

        let stored = store.find_by_id(&session_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), SessionStatus::Preparing);
    }

    #[tokio::test]
    async fn fails_when_session_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = SetStatusHandler::new(store);

        let result = handler
            .handle(SetStatusCommand {
                session_id: SessionId::new(),
                target: SessionStatus::Running,
            })
            .await;

        assert!(matches!(
            result,
            Err(SessionCommandError::SessionNotFound(_))
        ));
    }
}
