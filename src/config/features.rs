//! Feature flags configuration

use serde::Deserialize;

use crate::domain::protocol::SessionCapabilities;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Allow per-item voter count overrides during a session
    #[serde(default = "default_per_item_voter_override")]
    pub per_item_voter_override: bool,
}

impl FeatureFlags {
    /// Capabilities to stamp onto newly created sessions
    pub fn capabilities(&self) -> SessionCapabilities {
        SessionCapabilities {
            per_item_voter_override: self.per_item_voter_override,
        }
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            per_item_voter_override: default_per_item_voter_override(),
        }
    }
}

fn default_per_item_voter_override() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_enabled_by_default() {
        let flags = FeatureFlags::default();
        assert!(flags.per_item_voter_override);
        assert!(flags.capabilities().per_item_voter_override);
    }

    #[test]
    fn deserializes_explicit_value() {
        let json = r#"{"per_item_voter_override": false}"#;
        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.capabilities().per_item_voter_override);
    }
}
