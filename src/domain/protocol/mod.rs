//! Protocol session domain - aggregate, item records, tallying, navigation.

pub mod item;
pub mod navigator;
pub mod session;
pub mod tally;
pub mod template;

pub use item::{ItemRecord, ItemUpdate, VotingResult};
pub use navigator::{step, Direction, NavigationOutcome};
pub use session::{ProtocolSession, SessionCapabilities};
pub use tally::{tally, Ballot, VoteOutcome};
pub use template::{AgendaTemplate, AgendaTemplateItem, SessionConfig};
