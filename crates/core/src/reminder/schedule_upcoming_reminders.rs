use super::ReminderScheduler;
use crate::error::CoreError;
use crate::shared::usecase::UseCase;
use mailsense_infra::Context;

/// Bulk re-arming at process startup. Reminder jobs are not persisted, only
/// the meetings are, so after a restart every stored meeting with a future
/// start gets its reminder recomputed and armed again.
#[derive(Debug)]
pub struct ScheduleUpcomingRemindersUseCase<'a> {
    pub scheduler: &'a ReminderScheduler,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for CoreError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::Storage,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<'a> UseCase for ScheduleUpcomingRemindersUseCase<'a> {
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleUpcomingReminders";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let upcoming = ctx
            .repos
            .meetings
            .find_starting_after(now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut armed = 0;
        for meeting in &upcoming {
            if self.scheduler.arm(meeting) {
                armed += 1;
            }
        }
        Ok(armed)
    }
}
