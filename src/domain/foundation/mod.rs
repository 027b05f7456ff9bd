//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the protocol engine.

mod decision_result;
mod errors;
mod ids;
mod meeting_type;
mod session_status;
mod state_machine;
mod timestamp;
mod voter_count;

pub use decision_result::DecisionResult;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ItemId, MeetingId, SessionId};
pub use meeting_type::MeetingType;
pub use session_status::SessionStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use voter_count::VoterCount;
