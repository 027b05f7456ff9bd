//! VoterCount value object - a strictly positive number of eligible voters.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Number of owners eligible to vote, always at least 1.
///
/// Used both for the session-wide total fixed at creation and for the
/// per-item override that may diverge when attendance changes between
/// agenda items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterCount(u32);

impl VoterCount {
    /// Creates a voter count, rejecting zero and negative values.
    pub fn new(count: i32) -> Result<Self, ValidationError> {
        if count <= 0 {
            return Err(ValidationError::out_of_range(
                "voter_count",
                1,
                i32::MAX,
                count,
            ));
        }
        Ok(Self(count as u32))
    }

    /// Returns the count as a plain integer.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for VoterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
