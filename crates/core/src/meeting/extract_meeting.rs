use crate::error::CoreError;
use crate::shared::usecase::UseCase;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use mailsense_domain::{Meeting, Message};
use mailsense_infra::Context;
use tracing::warn;

/// Turns the language-inference extraction result for a message into a
/// validated, UTC-normalized `Meeting` and persists it. `Ok(None)` means no
/// meeting was found, which is a normal outcome; an inference failure is
/// treated the same way.
#[derive(Debug)]
pub struct ExtractMeetingUseCase {
    pub message: Message,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    /// Required fields missing or the start instant text was unparseable
    MalformedExtraction(String),
    StorageError,
}

impl From<UseCaseError> for CoreError {
    fn from(e: UseCaseError) -> Self {
        match e {
            // Malformed extractions are downgraded before they reach the
            // public surface; mapping them here keeps `?` usable anyway.
            UseCaseError::MalformedExtraction(_) => Self::Internal,
            UseCaseError::StorageError => Self::Storage,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ExtractMeetingUseCase {
    type Response = Option<Meeting>;

    type Error = UseCaseError;

    const NAME: &'static str = "ExtractMeeting";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let draft = match ctx
            .services
            .inference
            .extract_meeting(&self.message.subject, &self.message.body)
            .await
        {
            Ok(Some(draft)) => draft,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(
                    "Meeting extraction failed for message {}, treating as no meeting: {:?}",
                    self.message.id, e
                );
                return Ok(None);
            }
        };

        let title = match draft.title.filter(|title| !title.trim().is_empty()) {
            Some(title) => title,
            None => {
                return Err(UseCaseError::MalformedExtraction(
                    "missing meeting title".into(),
                ))
            }
        };
        let start_text = match draft.start {
            Some(start) => start,
            None => {
                return Err(UseCaseError::MalformedExtraction(
                    "missing start instant".into(),
                ))
            }
        };
        let start = parse_start_instant(&start_text, ctx.config.naive_time_tz).ok_or_else(|| {
            UseCaseError::MalformedExtraction(format!("unparseable start instant: {}", start_text))
        })?;

        let meeting = Meeting {
            id: Default::default(),
            message_id: self.message.id.clone(),
            title,
            start,
            attendees: draft.attendees,
            location: draft.location,
            description: draft.description,
        };

        ctx.repos
            .meetings
            .insert(&meeting)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(Some(meeting))
    }
}

/// Parses the extracted instant text. Offset-carrying text is normalized to
/// UTC directly; naive text is resolved in `naive_tz` first (which timezone a
/// sender without an offset meant is host policy, so it is configurable).
fn parse_start_instant(text: &str, naive_tz: Tz) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return naive_tz
                .from_local_datetime(&naive)
                .single()
                .map(|instant| instant.with_timezone(&Utc));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use chrono::TimeZone;
    use mailsense_domain::{MeetingDraft, MessageCategory};
    use mailsense_infra::{setup_context, ScriptedInference};
    use std::sync::Arc;

    fn message() -> Message {
        Message {
            id: "msg-1".into(),
            subject: "Team sync".into(),
            sender: "a@x.com".into(),
            recipients: vec!["b@x.com".into()],
            body: "Team sync at 2025-06-01T14:00:00Z".into(),
            timestamp: Utc.ymd(2025, 5, 30).and_hms(9, 0, 0),
            category: None,
            is_read: false,
        }
    }

    fn ctx_with_draft(draft: Option<MeetingDraft>) -> Context {
        let mut ctx = setup_context();
        ctx.services.inference = Arc::new(ScriptedInference {
            category: Some(MessageCategory::Meetings),
            draft,
        });
        ctx
    }

    #[tokio::test]
    async fn extracts_and_persists_a_meeting() {
        let ctx = ctx_with_draft(Some(MeetingDraft {
            title: Some("Team sync".into()),
            start: Some("2025-06-01T14:00:00Z".into()),
            location: Some("Room 2".into()),
            description: None,
            attendees: vec!["a@x.com".into(), "b@x.com".into()],
        }));

        let meeting = execute(ExtractMeetingUseCase { message: message() }, &ctx)
            .await
            .expect("To extract meeting")
            .expect("A meeting to be found");

        assert_eq!(meeting.title, "Team sync");
        assert_eq!(meeting.start, Utc.ymd(2025, 6, 1).and_hms(14, 0, 0));
        assert_eq!(meeting.message_id, "msg-1");
        assert!(ctx.repos.meetings.find(&meeting.id).await.is_some());
    }

    #[tokio::test]
    async fn re_extraction_produces_a_fresh_meeting() {
        let ctx = ctx_with_draft(Some(MeetingDraft {
            title: Some("Team sync".into()),
            start: Some("2025-06-01T14:00:00Z".into()),
            ..Default::default()
        }));

        let first = execute(ExtractMeetingUseCase { message: message() }, &ctx)
            .await
            .unwrap()
            .unwrap();
        let second = execute(ExtractMeetingUseCase { message: message() }, &ctx)
            .await
            .unwrap()
            .unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn no_draft_means_no_meeting() {
        let ctx = ctx_with_draft(None);

        let res = execute(ExtractMeetingUseCase { message: message() }, &ctx)
            .await
            .expect("To succeed");
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn missing_title_is_malformed() {
        let ctx = ctx_with_draft(Some(MeetingDraft {
            title: None,
            start: Some("2025-06-01T14:00:00Z".into()),
            ..Default::default()
        }));

        let res = execute(ExtractMeetingUseCase { message: message() }, &ctx).await;
        assert!(matches!(
            res,
            Err(UseCaseError::MalformedExtraction(_))
        ));
    }

    #[tokio::test]
    async fn unparseable_instant_is_malformed() {
        let ctx = ctx_with_draft(Some(MeetingDraft {
            title: Some("Team sync".into()),
            start: Some("next Tuesday-ish".into()),
            ..Default::default()
        }));

        let res = execute(ExtractMeetingUseCase { message: message() }, &ctx).await;
        assert!(matches!(
            res,
            Err(UseCaseError::MalformedExtraction(_))
        ));
    }

    #[test]
    fn offset_carrying_instants_are_normalized_to_utc() {
        let parsed = parse_start_instant("2025-06-01T16:00:00+02:00", chrono_tz::Tz::UTC)
            .expect("To parse instant");
        assert_eq!(parsed, Utc.ymd(2025, 6, 1).and_hms(14, 0, 0));
    }

    #[test]
    fn naive_instants_resolve_in_the_configured_timezone() {
        let parsed = parse_start_instant("2025-06-01T14:00:00", chrono_tz::Europe::Oslo)
            .expect("To parse instant");
        // Oslo is UTC+2 in June
        assert_eq!(parsed, Utc.ymd(2025, 6, 1).and_hms(12, 0, 0));

        let parsed_utc = parse_start_instant("2025-06-01T14:00:00", chrono_tz::Tz::UTC)
            .expect("To parse instant");
        assert_eq!(parsed_utc, Utc.ymd(2025, 6, 1).and_hms(14, 0, 0));
    }
}
