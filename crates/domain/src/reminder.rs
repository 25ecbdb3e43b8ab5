use crate::meeting::Meeting;
use crate::shared::entity::ID;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived job id for the reminder of a meeting. Deterministic, so arming a
/// meeting twice addresses the same registry slot and supersedes the earlier
/// job instead of duplicating it.
pub fn reminder_job_id(meeting_id: &ID) -> String {
    format!("reminder_{}", meeting_id)
}

/// Snapshot of a meeting's display fields taken at arming time. The reminder
/// fires with exactly this content even if unrelated state changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderPayload {
    pub meeting_id: ID,
    pub title: String,
    pub start: DateTime<Utc>,
    pub location: Option<String>,
    pub attendees: Vec<String>,
}

impl ReminderPayload {
    pub fn from_meeting(meeting: &Meeting) -> Self {
        Self {
            meeting_id: meeting.id.clone(),
            title: meeting.title.clone(),
            start: meeting.start,
            location: meeting.location.clone(),
            attendees: meeting.attendees.clone(),
        }
    }
}

/// Payload of a conflict-warning notification: the meeting that was just
/// scheduled, what it collides with and the suggested alternative starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictWarning {
    pub meeting: Meeting,
    pub conflicts: Vec<Meeting>,
    pub alternatives: Vec<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn job_id_is_stable_for_a_meeting() {
        let id = ID::new();
        assert_eq!(reminder_job_id(&id), reminder_job_id(&id));
        assert_eq!(reminder_job_id(&id), format!("reminder_{}", id));
    }

    #[test]
    fn payload_snapshots_display_fields() {
        let meeting = Meeting {
            id: ID::new(),
            message_id: "msg-9".into(),
            title: "Planning".into(),
            start: Utc.ymd(2025, 6, 1).and_hms(14, 0, 0),
            attendees: vec!["a@x.com".into(), "b@x.com".into()],
            location: Some("Room 2".into()),
            description: Some("Q3 planning".into()),
        };

        let payload = ReminderPayload::from_meeting(&meeting);
        assert_eq!(payload.meeting_id, meeting.id);
        assert_eq!(payload.title, meeting.title);
        assert_eq!(payload.start, meeting.start);
        assert_eq!(payload.location, meeting.location);
        assert_eq!(payload.attendees, meeting.attendees);
    }
}
