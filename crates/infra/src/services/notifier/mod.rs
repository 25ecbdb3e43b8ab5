mod inmemory;
mod webhook;

pub use inmemory::{InMemoryNotifier, NotifierEvent};
use mailsense_domain::{ConflictWarning, ReminderPayload};
pub use webhook::WebhookNotifier;

/// Notification delivery boundary. Fire-and-forget: implementations log
/// delivery failures and never surface them, so the scheduler's timer task is
/// not blocked on a slow or broken channel beyond the dispatch itself.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn deliver_reminder(&self, payload: &ReminderPayload);
    async fn deliver_conflict_warning(&self, payload: &ConflictWarning);
}
