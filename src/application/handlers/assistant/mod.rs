//! Handlers for the drafting assistant's two call shapes.

pub mod gate;
pub mod improve_draft;
pub mod suggest_discussion;

pub use gate::{SuggestionGate, SuggestionTicket};
pub use improve_draft::{ImproveDraftCommand, ImproveDraftHandler, ImproveDraftResult};
pub use suggest_discussion::{
    SuggestDiscussionCommand, SuggestDiscussionError, SuggestDiscussionHandler,
    SuggestDiscussionResult, SuggestionOutcome,
};
