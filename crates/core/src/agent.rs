use crate::error::CoreError;
use crate::meeting::{ResolutionOutcome, ResolveMeetingUseCase};
use crate::message::{ProcessMessageUseCase, ProcessedMessage, SyncMessagesUseCase, SyncReport};
use crate::reminder::{ReminderScheduler, ScheduleUpcomingRemindersUseCase};
use crate::shared::usecase::execute;
use mailsense_domain::{Message, ID};
use mailsense_infra::Context;

/// The application surface of the meeting engine. Owns the one
/// `ReminderScheduler` of the process; everything else is reached through the
/// injected `Context`.
pub struct Agent {
    ctx: Context,
    scheduler: ReminderScheduler,
}

impl Agent {
    pub fn new(ctx: Context) -> Self {
        let scheduler = ReminderScheduler::new(&ctx);
        Self { ctx, scheduler }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn scheduler(&self) -> &ReminderScheduler {
        &self.scheduler
    }

    /// Turns one inbound message into scheduling action. Callers that want
    /// classification first should use `process_message` instead.
    pub async fn resolve(&self, message: Message) -> Result<ResolutionOutcome, CoreError> {
        let usecase = ResolveMeetingUseCase {
            message,
            scheduler: &self.scheduler,
        };
        execute(usecase, &self.ctx).await.map_err(CoreError::from)
    }

    /// Stores, classifies and (for meeting messages) resolves one message.
    pub async fn process_message(&self, message: Message) -> Result<ProcessedMessage, CoreError> {
        let usecase = ProcessMessageUseCase {
            message,
            scheduler: &self.scheduler,
        };
        execute(usecase, &self.ctx).await.map_err(CoreError::from)
    }

    /// One fetch-and-process pass against the mail provider.
    pub async fn sync_messages(
        &self,
        max_messages: usize,
        query: Option<String>,
    ) -> Result<SyncReport, CoreError> {
        let usecase = SyncMessagesUseCase {
            scheduler: &self.scheduler,
            max_messages,
            query,
        };
        execute(usecase, &self.ctx).await.map_err(CoreError::from)
    }

    /// Explicit reminder teardown, e.g. when a meeting is deleted upstream.
    pub fn cancel_reminder(&self, meeting_id: &ID) {
        self.scheduler.cancel(meeting_id);
    }

    /// Startup recovery: re-arms reminders for every stored future meeting.
    pub async fn rearm_reminders(&self) -> Result<usize, CoreError> {
        let usecase = ScheduleUpcomingRemindersUseCase {
            scheduler: &self.scheduler,
        };
        execute(usecase, &self.ctx).await.map_err(CoreError::from)
    }

    pub fn shutdown(&self) {
        self.scheduler.shutdown();
    }
}
