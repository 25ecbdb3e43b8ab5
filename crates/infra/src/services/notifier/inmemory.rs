use super::INotifier;
use mailsense_domain::{ConflictWarning, ReminderPayload};
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub enum NotifierEvent {
    Reminder(ReminderPayload),
    ConflictWarning(ConflictWarning),
}

/// Records every delivered notification. For tests.
pub struct InMemoryNotifier {
    events: Mutex<Vec<NotifierEvent>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<NotifierEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn reminders(&self) -> Vec<ReminderPayload> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NotifierEvent::Reminder(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }

    pub fn conflict_warnings(&self) -> Vec<ConflictWarning> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NotifierEvent::ConflictWarning(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn deliver_reminder(&self, payload: &ReminderPayload) {
        self.events
            .lock()
            .unwrap()
            .push(NotifierEvent::Reminder(payload.clone()));
    }

    async fn deliver_conflict_warning(&self, payload: &ConflictWarning) {
        self.events
            .lock()
            .unwrap()
            .push(NotifierEvent::ConflictWarning(payload.clone()));
    }
}
