//! CreateSessionHandler - bootstraps a live session from a planned agenda.

use std::sync::Arc;

use tracing::info;

use crate::application::handlers::session::SessionCommandError;
use crate::domain::protocol::{AgendaTemplate, ProtocolSession, SessionCapabilities, SessionConfig};
use crate::ports::SessionStore;

/// Command to create a new protocol session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    /// The planned agenda to run the meeting against.
    pub template: AgendaTemplate,
    /// Operator-entered bootstrap data.
    pub config: SessionConfig,
}

/// Result of successful session creation.
#[derive(Debug)]
pub struct CreateSessionResult {
    /// The freshly created session snapshot.
    pub session: ProtocolSession,
}

/// Handler for creating protocol sessions.
pub struct CreateSessionHandler {
    store: Arc<dyn SessionStore>,
    capabilities: SessionCapabilities,
}

impl CreateSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, capabilities: SessionCapabilities) -> Self {
        Self {
            store,
            capabilities,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSessionCommand,
    ) -> Result<CreateSessionResult, SessionCommandError> {
        let session = ProtocolSession::from_template(&cmd.template, &cmd.config, self.capabilities)?;

        self.store.save(&session).await?;

        info!(
            session_id = %session.id(),
            meeting_id = %session.meeting_ref(),
            items = session.items().len(),
            "Protocol session created"
        );

        Ok(CreateSessionResult { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::foundation::{
        DomainError, ErrorCode, MeetingId, SessionId, SessionStatus, Timestamp,
    };
    use async_trait::async_trait;

    fn test_template() -> AgendaTemplate {
        serde_json::from_value(serde_json::json!({
            "meeting_id": MeetingId::new().to_string(),
            "title": "Eigentümerversammlung 2026",
            "date": Timestamp::now(),
            "location": "Gemeindesaal",
            "agenda": [
                {"id": "top-1", "order": 1, "title": "Begrüßung"},
                {"id": "top-2", "order": 2, "title": "Sonderumlage", "requires_voting": true}
            ]
        }))
        .unwrap()
    }

    fn test_config() -> SessionConfig {
        SessionConfig {
            chairperson: "A. Huber".to_string(),
            secretary: "B. Keller".to_string(),
            total_voters: 17,
        }
    }

    #[tokio::test]
    async fn creates_and_persists_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = CreateSessionHandler::new(store.clone(), SessionCapabilities::default());

        let result = handler
            .handle(CreateSessionCommand {
                template: test_template(),
                config: test_config(),
            })
            .await
            .unwrap();

        assert_eq!(result.session.status(), SessionStatus::Preparing);
        assert_eq!(result.session.items().len(), 2);

        let stored = store.find_by_id(result.session.id()).await.unwrap();
        assert_eq!(stored, Some(result.session));
    }

    #[tokio::test]
    async fn rejects_invalid_bootstrap_data() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = CreateSessionHandler::new(store.clone(), SessionCapabilities::default());

        let result = handler
            .handle(CreateSessionCommand {
                template: test_template(),
                config: SessionConfig {
                    total_voters: 0,
                    ..test_config()
                },
            })
            .await;

        assert!(matches!(
            result,
            Err(SessionCommandError::Domain(ref e)) if e.code == ErrorCode::OutOfRange
        ));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn propagates_storage_failure() {
        struct FailingStore;

        #[async_trait]
        impl SessionStore for FailingStore {
            async fn save(&self, _session: &ProtocolSession) -> Result<(), DomainError> {
                Err(DomainError::new(
                    ErrorCode::StorageError,
                    "Simulated save failure",
                ))
            }

            async fn find_by_id(
                &self,
                _id: &SessionId,
            ) -> Result<Option<ProtocolSession>, DomainError> {
                Ok(None)
            }

            async fn exists(&self, _id: &SessionId) -> Result<bool, DomainError> {
                Ok(false)
            }

            async fn delete(&self, _id: &SessionId) -> Result<(), DomainError> {
                Ok(())
            }
        }

        let handler =
            CreateSessionHandler::new(Arc::new(FailingStore), SessionCapabilities::default());

        let result = handler
            .handle(CreateSessionCommand {
                template: test_template(),
                config: test_config(),
            })
            .await;

        assert!(matches!(
            result,
            Err(SessionCommandError::Domain(ref e)) if e.code == ErrorCode::StorageError
        ));
    }
}
