use crate::error::CoreError;
use crate::meeting::{ResolutionOutcome, ResolveMeetingUseCase};
use crate::reminder::ReminderScheduler;
use crate::shared::usecase::{execute, UseCase};
use mailsense_domain::{Message, MessageCategory};
use mailsense_infra::Context;
use std::fmt;
use tracing::warn;

/// Handles one inbound message: stores it if unseen, classifies it and, for
/// meeting messages, runs the conflict-resolution pipeline. Messages already
/// in the store are skipped, which makes the at-least-once provider fetch
/// safe to replay.
pub struct ProcessMessageUseCase<'a> {
    pub message: Message,
    pub scheduler: &'a ReminderScheduler,
}

#[derive(Debug, Clone)]
pub struct ProcessedMessage {
    pub category: Option<MessageCategory>,
    pub outcome: Option<ResolutionOutcome>,
    /// False when the message was already known and nothing was done
    pub newly_stored: bool,
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
impl<'a> UseCase for ProcessMessageUseCase<'a> {
    type Response = ProcessedMessage;

    type Error = UseCaseError;

    const NAME: &'static str = "ProcessMessage";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if let Some(known) = ctx.repos.messages.find(&self.message.id).await {
            return Ok(ProcessedMessage {
                category: known.category,
                outcome: None,
                newly_stored: false,
            });
        }
        ctx.repos
            .messages
            .insert(&self.message)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let category = match ctx
            .services
            .inference
            .classify(&self.message.subject, &self.message.body)
            .await
        {
            Ok(category) => Some(category),
            Err(e) => {
                // An opaque inference failure means no classification, not a
                // failed message
                warn!(
                    "Classification failed for message {}: {:?}",
                    self.message.id, e
                );
                None
            }
        };

        let outcome = match category {
            Some(MessageCategory::Meetings) => {
                let usecase = ResolveMeetingUseCase {
                    message: self.message.clone(),
                    scheduler: self.scheduler,
                };
                Some(
                    execute(usecase, ctx)
                        .await
                        .map_err(|_| UseCaseError::StorageError)?,
                )
            }
            _ => None,
        };

        let mut stored = self.message.clone();
        stored.category = category;
        ctx.repos
            .messages
            .save(&stored)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(ProcessedMessage {
            category,
            outcome,
            newly_stored: true,
        })
    }
}

impl<'a> fmt::Debug for ProcessMessageUseCase<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessMessageUseCase")
            .field("message", &self.message.id)
            .finish()
    }
}
