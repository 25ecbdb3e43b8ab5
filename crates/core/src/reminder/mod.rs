mod schedule_upcoming_reminders;
mod scheduler;

pub use schedule_upcoming_reminders::ScheduleUpcomingRemindersUseCase;
pub use scheduler::ReminderScheduler;
