//! Ports - trait interfaces between the application core and the outside.

pub mod session_store;
pub mod text_assistant;

pub use session_store::SessionStore;
pub use text_assistant::{
    AgendaItemDraft, AssistantError, DiscussionSuggestion, DiscussionSuggestionRequest,
    DraftImprovementRequest, TextAssistant,
};
