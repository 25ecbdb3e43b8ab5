mod agent;
mod error;
mod meeting;
mod message;
mod reminder;
mod shared;

pub use agent::Agent;
pub use error::CoreError;
pub use meeting::{
    ExtractMeetingUseCase, ProposeAlternativesUseCase, ResolutionOutcome, ResolveMeetingUseCase,
};
pub use message::{ProcessMessageUseCase, ProcessedMessage, SyncMessagesUseCase, SyncReport};
pub use reminder::{ReminderScheduler, ScheduleUpcomingRemindersUseCase};
pub use shared::usecase::{execute, Subscriber, UseCase};
