//! SuggestDiscussionHandler - turns live keywords into a formal discussion
//! draft via the text assistant.
//!
//! The assistant call is slow relative to meeting flow, so the handler
//! re-checks position and freshness after the response arrives: a reply
//! for an item the operator has left, or one superseded by a newer
//! request, is discarded rather than applied. The suggestion itself is
//! never written into the record here; acceptance stays an explicit
//! operator action.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::application::handlers::assistant::gate::SuggestionGate;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{AssistantError, DiscussionSuggestionRequest, SessionStore, TextAssistant};

/// Command to request a discussion text suggestion.
#[derive(Debug, Clone)]
pub struct SuggestDiscussionCommand {
    pub session_id: SessionId,
    /// Zero-based index of the item the operator is looking at.
    pub item_index: usize,
}

/// What happened to the suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionOutcome {
    /// The suggestion is fresh and ready for operator review.
    Suggested { suggested_text: String },
    /// The response arrived too late and was dropped.
    Discarded,
}

/// Result of a suggestion request.
#[derive(Debug)]
pub struct SuggestDiscussionResult {
    pub outcome: SuggestionOutcome,
}

/// Error type for discussion suggestions.
#[derive(Debug, Clone)]
pub enum SuggestDiscussionError {
    SessionNotFound(SessionId),
    Domain(DomainError),
    Assistant(AssistantError),
}

impl std::fmt::Display for SuggestDiscussionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestDiscussionError::SessionNotFound(id) => {
                write!(f, "Session not found: {}", id)
            }
            SuggestDiscussionError::Domain(err) => write!(f, "{}", err),
            SuggestDiscussionError::Assistant(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SuggestDiscussionError {}

impl From<DomainError> for SuggestDiscussionError {
    fn from(err: DomainError) -> Self {
        SuggestDiscussionError::Domain(err)
    }
}

impl From<AssistantError> for SuggestDiscussionError {
    fn from(err: AssistantError) -> Self {
        SuggestDiscussionError::Assistant(err)
    }
}

/// Handler for discussion text suggestions.
pub struct SuggestDiscussionHandler {
    store: Arc<dyn SessionStore>,
    assistant: Arc<dyn TextAssistant>,
    gate: Arc<SuggestionGate>,
    timeout: Duration,
}

impl SuggestDiscussionHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        assistant: Arc<dyn TextAssistant>,
        gate: Arc<SuggestionGate>,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            assistant,
            gate,
            timeout,
        }
    }

    pub async fn handle(
        &self,
        cmd: SuggestDiscussionCommand,
    ) -> Result<SuggestDiscussionResult, SuggestDiscussionError> {
        let session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SuggestDiscussionError::SessionNotFound(cmd.session_id))?;

        let item = session.item(cmd.item_index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::ItemNotFound,
                format!("No agenda item at index {}", cmd.item_index),
            )
        })?;

        let request = DiscussionSuggestionRequest {
            keywords: item.keywords().to_string(),
            context: format!("{}\n{}", item.title(), item.description()),
            existing_discussion: if item.discussion().is_empty() {
                None
            } else {
                Some(item.discussion().to_string())
            },
        };

        let ticket = self.gate.issue(cmd.item_index);

        let suggestion = tokio::time::timeout(
            self.timeout,
            self.assistant.suggest_discussion(&request),
        )
        .await
        .map_err(|_| AssistantError::Timeout {
            timeout_secs: self.timeout.as_secs(),
        })??;

        // Re-read position; the operator may have moved on meanwhile.
        let session = self
            .store
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or(SuggestDiscussionError::SessionNotFound(cmd.session_id))?;

        if !self.gate.should_apply(&ticket, session.current_item_index()) {
            warn!(
                session_id = %cmd.session_id,
                item_index = cmd.item_index,
                current_item = session.current_item_index(),
                "Discarding stale discussion suggestion"
            );
            return Ok(SuggestDiscussionResult {
                outcome: SuggestionOutcome::Discarded,
            });
        }

        info!(
            session_id = %cmd.session_id,
            item_index = cmd.item_index,
            "Discussion suggestion ready"
        );

        Ok(SuggestDiscussionResult {
            outcome: SuggestionOutcome::Suggested {
                suggested_text: suggestion.suggested_text,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::assistant::MockTextAssistant;
    use crate::application::handlers::session::test_support::running_store;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::protocol::Direction;
    use crate::ports::{DiscussionSuggestion, SessionStore};

    fn handler_with(
        store: Arc<crate::adapters::storage::InMemorySessionStore>,
        assistant: Arc<MockTextAssistant>,
    ) -> (SuggestDiscussionHandler, Arc<SuggestionGate>) {
        let gate = Arc::new(SuggestionGate::new());
        let handler = SuggestDiscussionHandler::new(
            store,
            assistant,
            gate.clone(),
            Duration::from_secs(5),
        );
        (handler, gate)
    }

    #[tokio::test]
    async fn returns_fresh_suggestion() {
        let (store, session_id) = running_store().await;
        let assistant = Arc::new(MockTextAssistant::new());
        assistant
            .queue_suggestion(Ok(DiscussionSuggestion {
                suggested_text: "Die Versammlung erörterte die Dachsanierung.".to_string(),
            }))
            .await;

        let (handler, _) = handler_with(store, assistant);

        let result = handler
            .handle(SuggestDiscussionCommand {
                session_id,
                item_index: 0,
            })
            .await
            .unwrap();

        assert_eq!(
            result.outcome,
            SuggestionOutcome::Suggested {
                suggested_text: "Die Versammlung erörterte die Dachsanierung.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn discards_suggestion_after_navigation() {
        let (store, session_id) = running_store().await;
        let assistant = Arc::new(MockTextAssistant::new());
        assistant
            .queue_suggestion(Ok(DiscussionSuggestion {
                suggested_text: "zu spät".to_string(),
            }))
            .await;
        assistant.set_delay(Duration::from_millis(50)).await;

        let (handler, _) = handler_with(store.clone(), assistant);

        let request = handler.handle(SuggestDiscussionCommand {
            session_id,
            item_index: 0,
        });

        // Navigate away while the assistant is still working.
        let navigate = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let mut session = store.find_by_id(&session_id).await.unwrap().unwrap();
            session.navigate(Direction::Next);
            store.save(&session).await.unwrap();
        };

        let (result, _) = tokio::join!(request, navigate);
        assert_eq!(result.unwrap().outcome, SuggestionOutcome::Discarded);
    }

    #[tokio::test]
    async fn newer_request_supersedes_older_one() {
        let (store, session_id) = running_store().await;
        let assistant = Arc::new(MockTextAssistant::new());
        assistant
            .queue_suggestion(Ok(DiscussionSuggestion {
                suggested_text: "erste Fassung".to_string(),
            }))
            .await;
        assistant
            .queue_suggestion(Ok(DiscussionSuggestion {
                suggested_text: "zweite Fassung".to_string(),
            }))
            .await;

        let gate = Arc::new(SuggestionGate::new());
        let handler = SuggestDiscussionHandler::new(
            store,
            assistant,
            gate.clone(),
            Duration::from_secs(5),
        );

        let first_ticket = gate.issue(0); // an older in-flight request
        let result = handler
            .handle(SuggestDiscussionCommand {
                session_id,
                item_index: 0,
            })
            .await
            .unwrap();

        // The handler's own (newer) request wins; the older ticket is dead.
        assert!(matches!(
            result.outcome,
            SuggestionOutcome::Suggested { .. }
        ));
        assert!(!gate.should_apply(&first_ticket, 0));
    }

    #[tokio::test]
    async fn surfaces_assistant_failure() {
        let (store, session_id) = running_store().await;
        let assistant = Arc::new(MockTextAssistant::new());
        assistant
            .queue_suggestion(Err(AssistantError::Unavailable {
                message: "overloaded".to_string(),
            }))
            .await;

        let (handler, _) = handler_with(store, assistant);

        let result = handler
            .handle(SuggestDiscussionCommand {
                session_id,
                item_index: 0,
            })
            .await;

        assert!(matches!(
            result,
            Err(SuggestDiscussionError::Assistant(
                AssistantError::Unavailable { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn times_out_slow_assistant() {
        let (store, session_id) = running_store().await;
        let assistant = Arc::new(MockTextAssistant::new());
        assistant
            .queue_suggestion(Ok(DiscussionSuggestion {
                suggested_text: "nie gesehen".to_string(),
            }))
            .await;
        assistant.set_delay(Duration::from_secs(60)).await;

        let gate = Arc::new(SuggestionGate::new());
        let handler = SuggestDiscussionHandler::new(
            store,
            assistant,
            gate,
            Duration::from_millis(20),
        );

        let result = handler
            .handle(SuggestDiscussionCommand {
                session_id,
                item_index: 0,
            })
            .await;

        assert!(matches!(
            result,
            Err(SuggestDiscussionError::Assistant(
                AssistantError::Timeout { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn rejects_out_of_range_item() {
        let (store, session_id) = running_store().await;
        let assistant = Arc::new(MockTextAssistant::new());
        let (handler, _) = handler_with(store, assistant);

        let result = handler
            .handle(SuggestDiscussionCommand {
                session_id,
                item_index: 9,
            })
            .await;

        assert!(matches!(
            result,
            Err(SuggestDiscussionError::Domain(ref e)) if e.code == ErrorCode::ItemNotFound
        ));
    }
}
