use super::extract_meeting::{self, ExtractMeetingUseCase};
use super::propose_alternatives::{self, ProposeAlternativesUseCase};
use super::subscribers::NotifyMeetingConflicts;
use crate::error::CoreError;
use crate::reminder::ReminderScheduler;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use chrono::Duration;
use mailsense_domain::{find_conflicts, ConflictReport, Meeting, Message, CONFLICT_WINDOW_MINUTES};
use mailsense_infra::Context;
use std::fmt;
use tracing::info;

/// The sole entry point for turning an inbound message into scheduling
/// action: extraction, conflict check and alternative search composed into a
/// single linear decision. A conflicting meeting is still scheduled and gets
/// its reminder; the conflict is advisory.
pub struct ResolveMeetingUseCase<'a> {
    pub message: Message,
    pub scheduler: &'a ReminderScheduler,
}

#[derive(Debug, Clone)]
pub enum ResolutionOutcome {
    /// The message does not describe a meeting (including the case where the
    /// extraction result was malformed or the inference call failed)
    NoMeeting,
    Scheduled(Meeting),
    ScheduledWithConflicts {
        meeting: Meeting,
        report: ConflictReport,
    },
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
impl<'a> UseCase for ResolveMeetingUseCase<'a> {
    type Response = ResolutionOutcome;

    type Error = UseCaseError;

    const NAME: &'static str = "ResolveMeeting";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let usecase = ExtractMeetingUseCase {
            message: self.message.clone(),
        };
        let meeting = match execute(usecase, ctx).await {
            Ok(Some(meeting)) => meeting,
            Ok(None) => return Ok(ResolutionOutcome::NoMeeting),
            Err(extract_meeting::UseCaseError::MalformedExtraction(reason)) => {
                info!(
                    "Malformed meeting extraction for message {}: {}. Treating as no meeting.",
                    self.message.id, reason
                );
                return Ok(ResolutionOutcome::NoMeeting);
            }
            Err(extract_meeting::UseCaseError::StorageError) => {
                return Err(UseCaseError::StorageError)
            }
        };

        let radius = Duration::minutes(CONFLICT_WINDOW_MINUTES);
        let nearby = ctx
            .repos
            .meetings
            .find_in_range(meeting.start - radius, meeting.start + radius)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        // The meeting itself was just persisted and must not conflict with
        // itself
        let nearby: Vec<Meeting> = nearby
            .into_iter()
            .filter(|existing| existing.id != meeting.id)
            .collect();

        let conflicts = find_conflicts(meeting.start, &nearby);
        if conflicts.is_empty() {
            self.scheduler.arm(&meeting);
            return Ok(ResolutionOutcome::Scheduled(meeting));
        }

        let usecase = ProposeAlternativesUseCase::new(meeting.start, conflicts.clone());
        let alternatives = match execute(usecase, ctx).await {
            Ok(alternatives) => alternatives,
            Err(propose_alternatives::UseCaseError::StorageError) => {
                return Err(UseCaseError::StorageError)
            }
        };

        self.scheduler.arm(&meeting);
        Ok(ResolutionOutcome::ScheduledWithConflicts {
            meeting,
            report: ConflictReport {
                conflicts,
                alternatives,
            },
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyMeetingConflicts)]
    }
}

impl<'a> fmt::Debug for ResolveMeetingUseCase<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveMeetingUseCase")
            .field("message", &self.message.id)
            .finish()
    }
}
