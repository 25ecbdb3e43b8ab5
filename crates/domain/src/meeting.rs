use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled event derived from a `Message`. Created once by extraction and
/// never mutated afterwards; re-extracting the same message yields a new
/// `Meeting` with a new id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: ID,
    /// Provider id of the message this meeting was extracted from.
    /// A foreign reference, not owned by this entity.
    pub message_id: String,
    pub title: String,
    /// Start instant, always normalized to UTC before storage or comparison.
    pub start: DateTime<Utc>,
    /// Free-text attendee identifiers, order-preserving and non-unique.
    pub attendees: Vec<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Entity for Meeting {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The loosely structured result the language-inference service returns for
/// a meeting extraction. Field validation happens in the extraction use case,
/// not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingDraft {
    pub title: Option<String>,
    /// Start instant as text, ideally RFC 3339 but possibly without an offset.
    #[serde(rename = "datetime")]
    pub start: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}
