//! Port for persisting protocol sessions.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::protocol::ProtocolSession;

/// Persistence port for session state.
///
/// Implementations must store full snapshots; the handlers follow a
/// load-mutate-save cycle and never patch stored state in place.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Saves a session snapshot, overwriting any previous one.
    async fn save(&self, session: &ProtocolSession) -> Result<(), DomainError>;

    /// Loads a session by id, or `None` if unknown.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ProtocolSession>, DomainError>;

    /// Returns true if a session with the given id exists.
    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError>;

    /// Deletes a session. Deleting an unknown id is a no-op.
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}
