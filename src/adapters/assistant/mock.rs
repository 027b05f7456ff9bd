//! Mock text assistant for testing.
//!
//! Responses for each call shape are queued up front and consumed in
//! order; an exhausted queue yields a canned default. A configurable
//! delay makes timeout and stale-response paths testable.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::ports::{
    AgendaItemDraft, AssistantError, DiscussionSuggestion, DiscussionSuggestionRequest,
    DraftImprovementRequest, TextAssistant,
};

/// Configurable mock implementation of the [`TextAssistant`] port.
#[derive(Debug, Default)]
pub struct MockTextAssistant {
    suggestions: Mutex<VecDeque<Result<DiscussionSuggestion, AssistantError>>>,
    drafts: Mutex<VecDeque<Result<AgendaItemDraft, AssistantError>>>,
    delay: Mutex<Duration>,
    suggestion_calls: Mutex<Vec<DiscussionSuggestionRequest>>,
    draft_calls: Mutex<Vec<DraftImprovementRequest>>,
}

impl MockTextAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next `suggest_discussion` call.
    pub async fn queue_suggestion(&self, response: Result<DiscussionSuggestion, AssistantError>) {
        self.suggestions.lock().await.push_back(response);
    }

    /// Queues a response for the next `improve_agenda_item` call.
    pub async fn queue_draft(&self, response: Result<AgendaItemDraft, AssistantError>) {
        self.drafts.lock().await.push_back(response);
    }

    /// Sets simulated latency per request.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.lock().await = delay;
    }

    /// Returns all recorded suggestion requests.
    pub async fn suggestion_calls(&self) -> Vec<DiscussionSuggestionRequest> {
        self.suggestion_calls.lock().await.clone()
    }

    /// Returns all recorded draft requests.
    pub async fn draft_calls(&self) -> Vec<DraftImprovementRequest> {
        self.draft_calls.lock().await.clone()
    }

    async fn simulate_latency(&self) {
        let delay = *self.delay.lock().await;
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

#[async_trait]
impl TextAssistant for MockTextAssistant {
    async fn suggest_discussion(
        &self,
        request: &DiscussionSuggestionRequest,
    ) -> Result<DiscussionSuggestion, AssistantError> {
        self.suggestion_calls.lock().await.push(request.clone());
        self.simulate_latency().await;

        self.suggestions
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Ok(DiscussionSuggestion {
                    suggested_text: "Mock discussion text".to_string(),
                })
            })
    }

    async fn improve_agenda_item(
        &self,
        request: &DraftImprovementRequest,
    ) -> Result<AgendaItemDraft, AssistantError> {
        self.draft_calls.lock().await.push(request.clone());
        self.simulate_latency().await;

        self.drafts.lock().await.pop_front().unwrap_or_else(|| {
            Ok(AgendaItemDraft {
                improved_title: request.title.clone(),
                improved_description: request.description.clone(),
                legal_notes: None,
                vote_required: false,
            })
        })
    }
}
