//! External-interface types supplied by the meeting planner and operator.
//!
//! The agenda template is produced by the planning tool and consumed here
//! as pure data; the bootstrap config is entered by the operator right
//! before the meeting starts. Both are validated by
//! [`ProtocolSession::from_template`](super::ProtocolSession::from_template).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MeetingId, MeetingType, Timestamp};

/// Ordered agenda supplied by the meeting planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaTemplate {
    /// The planned meeting this agenda belongs to.
    pub meeting_id: MeetingId,
    /// Meeting title (e.g. "Eigentümerversammlung 2026").
    pub title: String,
    /// Scheduled date of the meeting.
    pub date: Timestamp,
    /// Venue, if known.
    pub location: Option<String>,
    /// Kind of assembly.
    #[serde(default)]
    pub meeting_type: MeetingType,
    /// Ordered points of business. Order is significant and becomes the
    /// TOP numbering of the session.
    pub agenda: Vec<AgendaTemplateItem>,
}

/// One planned point of business within the agenda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaTemplateItem {
    /// Planner-assigned identifier, opaque to the engine.
    pub id: String,
    /// Position within the agenda; lower comes first.
    pub order: u32,
    /// Item title.
    pub title: String,
    /// Item description.
    #[serde(default)]
    pub description: String,
    /// Planned duration in minutes, if estimated.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Whether a formal vote is required for this item.
    #[serde(default)]
    pub requires_voting: bool,
}

/// Operator-entered bootstrap data for a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Person chairing the assembly.
    pub chairperson: String,
    /// Person keeping the minutes.
    pub secretary: String,
    /// Nominal number of eligible voters for the whole meeting.
    ///
    /// Kept signed so that bad operator input reaches validation instead
    /// of failing at the deserialization boundary.
    pub total_voters: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agenda_template_deserializes_from_planner_json() {
        let json = r#"{
            "meeting_id": "550e8400-e29b-41d4-a716-446655440000",
            "title": "Eigentümerversammlung 2026",
            "date": "2026-03-20T18:00:00Z",
            "location": "Gemeindesaal",
            "meeting_type": "ordinary",
            "agenda": [
                {"id": "top-1", "order": 1, "title": "Begrüßung", "requires_voting": false},
                {"id": "top-2", "order": 2, "title": "Sonderumlage Dachsanierung",
                 "description": "Beschluss über die Sonderumlage",
                 "duration_minutes": 30, "requires_voting": true}
            ]
        }"#;

        let template: AgendaTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.agenda.len(), 2);
        assert_eq!(template.meeting_type, MeetingType::Ordinary);
        assert_eq!(template.agenda[1].title, "Sonderumlage Dachsanierung");
        assert!(template.agenda[1].requires_voting);
        assert_eq!(template.agenda[1].duration_minutes, Some(30));
    }

    #[test]
    fn agenda_item_defaults_optional_fields() {
        let json = r#"{"id": "top-1", "order": 1, "title": "Begrüßung"}"#;
        let item: AgendaTemplateItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.description, "");
        assert_eq!(item.duration_minutes, None);
        assert!(!item.requires_voting);
    }

    #[test]
    fn session_config_roundtrips_through_json() {
        let config = SessionConfig {
            chairperson: "A. Huber".to_string(),
            secretary: "B. Keller".to_string(),
            total_voters: 17,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_voters, 17);
        assert_eq!(back.chairperson, "A. Huber");
    }
}
