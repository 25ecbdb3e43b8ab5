use chrono::{Duration, TimeZone, Utc};
use mailsense::domain::{Meeting, MeetingDraft, Message, MessageCategory, ID};
use mailsense::infra::{
    setup_context, Context, InMemoryNotifier, ScriptedInference, StaticSys,
};
use mailsense::{Agent, ResolutionOutcome};
use std::sync::Arc;

fn message(id: &str, body: &str) -> Message {
    Message {
        id: id.into(),
        subject: "Team sync".into(),
        sender: "alice@example.com".into(),
        recipients: vec!["bob@example.com".into()],
        body: body.into(),
        timestamp: Utc.ymd(2025, 5, 30).and_hms(9, 0, 0),
        category: None,
        is_read: false,
    }
}

fn meeting_draft(start: &str) -> MeetingDraft {
    MeetingDraft {
        title: Some("Team sync".into()),
        start: Some(start.into()),
        location: None,
        description: None,
        attendees: vec!["alice@example.com".into(), "bob@example.com".into()],
    }
}

struct TestApp {
    agent: Agent,
    notifier: Arc<InMemoryNotifier>,
}

fn spawn_app(draft: Option<MeetingDraft>) -> TestApp {
    let mut ctx: Context = setup_context();
    ctx.sys = Arc::new(StaticSys {
        now: Utc.ymd(2025, 5, 30).and_hms(9, 0, 0),
    });
    ctx.services.inference = Arc::new(ScriptedInference {
        category: Some(MessageCategory::Meetings),
        draft,
    });
    let notifier = Arc::new(InMemoryNotifier::new());
    ctx.services.notifier = notifier.clone();
    TestApp {
        agent: Agent::new(ctx),
        notifier,
    }
}

#[tokio::test]
async fn clean_calendar_schedules_and_arms_a_reminder() {
    let app = spawn_app(Some(meeting_draft("2025-06-01T14:00:00Z")));

    let outcome = app
        .agent
        .resolve(message("msg-1", "Team sync at 2025-06-01T14:00:00Z"))
        .await
        .expect("To resolve message");

    let meeting = match outcome {
        ResolutionOutcome::Scheduled(meeting) => meeting,
        other => panic!("Expected Scheduled, got {:?}", other),
    };
    assert_eq!(meeting.start, Utc.ymd(2025, 6, 1).and_hms(14, 0, 0));
    assert!(app.agent.scheduler().is_armed(&meeting.id));
    assert!(app.notifier.conflict_warnings().is_empty());
}

#[tokio::test]
async fn overlapping_proposal_warns_and_suggests_alternatives() {
    let app = spawn_app(Some(meeting_draft("2025-06-01T14:10:00Z")));
    let existing = Meeting {
        id: ID::new(),
        message_id: "msg-0".into(),
        title: "Planning".into(),
        start: Utc.ymd(2025, 6, 1).and_hms(14, 0, 0),
        attendees: Vec::new(),
        location: None,
        description: None,
    };
    app.agent
        .context()
        .repos
        .meetings
        .insert(&existing)
        .await
        .unwrap();

    let outcome = app
        .agent
        .resolve(message("msg-1", "Can we meet 2025-06-01T14:10:00Z?"))
        .await
        .expect("To resolve message");

    let (meeting, report) = match outcome {
        ResolutionOutcome::ScheduledWithConflicts { meeting, report } => (meeting, report),
        other => panic!("Expected ScheduledWithConflicts, got {:?}", other),
    };
    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(report.conflicts[0].id, existing.id);
    assert!(report.alternatives.len() <= 3);
    for alternative in &report.alternatives {
        // Every suggestion clears the existing meeting's 30 minute window
        let gap = (*alternative - existing.start).num_minutes().abs();
        assert!(gap > 30);
    }
    assert!(app.agent.scheduler().is_armed(&meeting.id));
    assert_eq!(app.notifier.conflict_warnings().len(), 1);
}

#[tokio::test]
async fn restart_recovery_rearms_future_meetings_only() {
    let app = spawn_app(None);
    let now = Utc.ymd(2025, 5, 30).and_hms(9, 0, 0);
    let repo = &app.agent.context().repos.meetings;

    for hour in 1..=5 {
        repo.insert(&Meeting {
            id: ID::new(),
            message_id: format!("msg-{}", hour),
            title: "Future".into(),
            start: now + Duration::hours(hour),
            attendees: Vec::new(),
            location: None,
            description: None,
        })
        .await
        .unwrap();
    }
    for hour in 1..=2 {
        repo.insert(&Meeting {
            id: ID::new(),
            message_id: format!("msg-past-{}", hour),
            title: "Past".into(),
            start: now - Duration::hours(hour),
            attendees: Vec::new(),
            location: None,
            description: None,
        })
        .await
        .unwrap();
    }

    let armed = app.agent.rearm_reminders().await.expect("To rearm");
    assert_eq!(armed, 5);
    assert_eq!(app.agent.scheduler().armed_count(), 5);
}
