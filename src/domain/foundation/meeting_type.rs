//! MeetingType enum - the kind of owners' assembly being held.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of owners' assembly, carried from the agenda template and passed
/// through to the text assistant for draft improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeetingType {
    /// Regular annual owners' assembly.
    #[default]
    Ordinary,
    /// Extraordinary assembly convened for urgent business.
    Extraordinary,
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MeetingType::Ordinary => "Ordinary",
            MeetingType::Extraordinary => "Extraordinary",
        };
        write!(f, "{}", s)
    }
}
