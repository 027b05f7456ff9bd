//! Text assistant adapters.

pub mod http_drafting;
pub mod mock;

pub use http_drafting::{DraftingServiceConfig, HttpTextAssistant};
pub use mock::MockTextAssistant;
