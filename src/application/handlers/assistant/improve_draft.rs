//! ImproveDraftHandler - agenda item polish during meeting preparation.
//!
//! Drafting help is never load-bearing: when the assistant fails or times
//! out, the handler answers with the operator's own wording so preparation
//! continues uninterrupted. The `degraded` flag tells the caller which
//! case occurred.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::foundation::MeetingType;
use crate::ports::{AgendaItemDraft, AssistantError, DraftImprovementRequest, TextAssistant};

/// Command to improve a drafted agenda item.
#[derive(Debug, Clone)]
pub struct ImproveDraftCommand {
    pub title: String,
    pub description: String,
    pub meeting_type: MeetingType,
}

/// Result of a draft improvement; always available.
#[derive(Debug)]
pub struct ImproveDraftResult {
    pub draft: AgendaItemDraft,
    /// True when the assistant failed and the original wording was kept.
    pub degraded: bool,
}

/// Handler for agenda item draft improvement.
pub struct ImproveDraftHandler {
    assistant: Arc<dyn TextAssistant>,
    timeout: Duration,
}

impl ImproveDraftHandler {
    pub fn new(assistant: Arc<dyn TextAssistant>, timeout: Duration) -> Self {
        Self { assistant, timeout }
    }

    pub async fn handle(&self, cmd: ImproveDraftCommand) -> ImproveDraftResult {
        let request = DraftImprovementRequest {
            title: cmd.title.clone(),
            description: cmd.description.clone(),
            meeting_type: cmd.meeting_type,
        };

        let response = tokio::time::timeout(
            self.timeout,
            self.assistant.improve_agenda_item(&request),
        )
        .await
        .map_err(|_| AssistantError::Timeout {
            timeout_secs: self.timeout.as_secs(),
        })
        .and_then(|inner| inner);

        match response {
            Ok(draft) => {
                debug!(title = %cmd.title, "Draft improved by assistant");
                ImproveDraftResult {
                    draft,
                    degraded: false,
                }
            }
            Err(err) => {
                warn!(title = %cmd.title, error = %err, "Draft improvement failed, keeping original wording");
                ImproveDraftResult {
                    draft: AgendaItemDraft {
                        improved_title: cmd.title,
                        improved_description: cmd.description,
                        legal_notes: None,
                        vote_required: false,
                    },
                    degraded: true,
                }
            }
        }
    }
}
