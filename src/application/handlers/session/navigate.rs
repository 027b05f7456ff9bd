//! NavigateHandler - moves the current-item pointer across the agenda.
//!
//! A boundary move is a successful no-op; it returns the unchanged
//! snapshot without a store write.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::session::SessionCommandError;
use crate::domain::foundation::SessionId;
use crate::domain::protocol::{Direction, NavigationOutcome, ProtocolSession};
use crate::ports::SessionStore;

/// Command to navigate one step through the agenda.
#[derive(Debug, Clone)]
pub struct NavigateCommand {
    pub session_id: SessionId,
    pub direction: Direction,
}

/// Result of a navigation attempt.
#[derive(Debug)]
pub struct NavigateResult {
    /// Whether the pointer moved or hit a boundary.
    pub outcome: NavigationOutcome,
    /// The session snapshot after the attempt. Callers must resync any
    /// edit buffer for the current item from this snapshot.
    pub session: ProtocolSession,
}

/// Handler for agenda navigation.
pub struct NavigateHandler {
    store: Arc<dyn SessionStore>,
}

impl NavigateHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: NavigateCommand) -> Result<NavigateResult, SessionCommandError> {
        let mut session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SessionCommandError::SessionNotFound(cmd.session_id))?;

        let outcome = session.navigate(cmd.direction);

        if outcome.moved() {
            self.store.save(&session).await?;
        }

        debug!(
            session_id = %session.id(),
            direction = ?cmd.direction,
            current_item = session.current_item_index(),
            moved = outcome.moved(),
            "Agenda navigation"
        );

        Ok(NavigateResult { outcome, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session::test_support::running_store;
    use crate::ports::SessionStore;

    #[tokio::test]
    async fn moves_forward_and_persists_pointer() {
        let (store, session_id) = running_store().await;
        let handler = NavigateHandler::new(store.clone());

        let result = handler
            .handle(NavigateCommand {
                session_id,
                direction: Direction::Next,
            })
            .await
            .unwrap();

        assert_eq!(result.outcome, NavigationOutcome::Moved(1));
        assert_eq!(result.session.current_item_index(), 1);

        let stored = store.find_by_id(&session_id).await.unwrap().unwrap();
        assert_eq!(stored.current_item_index(), 1);
    }

    #[tokio::test]
    async fn boundary_move_is_a_noop() {
        let (store, session_id) = running_store().await;
        let handler = NavigateHandler::new(store.clone());

        let result = handler
            .handle(NavigateCommand {
                session_id,
                direction: Direction::Previous,
            })
            .await
            .unwrap();

        assert_eq!(result.outcome, NavigationOutcome::Boundary);
        assert_eq!(result.session.current_item_index(), 0);

        let stored = store.find_by_id(&session_id).await.unwrap().unwrap();
        assert_eq!(stored.current_item_index(), 0);
    }

    #[tokio::test]
    async fn returned_snapshot_carries_current_item() {
        let (store, session_id) = running_store().await;
        let handler = NavigateHandler::new(store);

        let result = handler
            .handle(NavigateCommand {
                session_id,
                direction: Direction::Next,
            })
            .await
            .unwrap();

        assert_eq!(
            result.session.current_item().title(),
            "Sonderumlage Dachsanierung"
        );
    }

    #[tokio::test]
    async fn fails_when_session_not_found() {
        let (store, _) = running_store().await;
        let handler = NavigateHandler::new(store);

        let result = handler
            .handle(NavigateCommand {
                session_id: SessionId::new(),
                direction: Direction::Next,
            })
            .await;

        assert!(matches!(
            result,
            Err(SessionCommandError::SessionNotFound(_))
        ));
    }
}
