//! Port for the drafting assistant backing the live protocol UI.
//!
//! The assistant is advisory: both call shapes return plain data, and the
//! application layer decides whether a response is still relevant (the
//! operator may have navigated away) and whether to fall back on failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::MeetingType;

/// Input for a discussion-text suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionSuggestionRequest {
    /// Keywords gathered during the live discussion.
    pub keywords: String,
    /// Item title and description, for grounding.
    pub context: String,
    /// Discussion text already on record, if any.
    pub existing_discussion: Option<String>,
}

/// A generated discussion text, ready for operator review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionSuggestion {
    pub suggested_text: String,
}

/// Input for improving a drafted agenda item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftImprovementRequest {
    pub title: String,
    pub description: String,
    pub meeting_type: MeetingType,
}

/// An improved agenda item draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaItemDraft {
    pub improved_title: String,
    pub improved_description: String,
    /// Statutory or procedural notes, when the assistant has any.
    pub legal_notes: Option<String>,
    /// Whether the assistant judged the item to need a formal vote.
    pub vote_required: bool,
}

/// Errors from the drafting assistant.
///
/// `Clone` so queued mock responses and retry paths can reuse a value.
#[derive(Debug, Clone, Error)]
pub enum AssistantError {
    #[error("Assistant request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse assistant response: {0}")]
    Parse(String),

    #[error("Assistant service unavailable: {message}")]
    Unavailable { message: String },

    #[error("Assistant authentication failed")]
    AuthenticationFailed,

    #[error("Invalid assistant request: {0}")]
    InvalidRequest(String),
}

/// Port for text generation during a live session.
#[async_trait]
pub trait TextAssistant: Send + Sync {
    /// Generates a formal discussion text from live keywords.
    async fn suggest_discussion(
        &self,
        request: &DiscussionSuggestionRequest,
    ) -> Result<DiscussionSuggestion, AssistantError>;

    /// Improves a drafted agenda item's title and description.
    async fn improve_agenda_item(
        &self,
        request: &DraftImprovementRequest,
    ) -> Result<AgendaItemDraft, AssistantError>;
}
