use super::process_message::ProcessMessageUseCase;
use crate::error::CoreError;
use crate::reminder::ReminderScheduler;
use crate::shared::usecase::{execute, UseCase};
use mailsense_infra::Context;
use std::fmt;
use tracing::{info, warn};

/// One sync pass against the mail provider: fetch a batch, process every
/// unseen message and label it at the provider with its category.
pub struct SyncMessagesUseCase<'a> {
    pub scheduler: &'a ReminderScheduler,
    pub max_messages: usize,
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub fetched: usize,
    pub processed: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    ProviderError(String),
    StorageError,
}

impl From<UseCaseError> for CoreError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ProviderError(msg) => Self::Provider(msg),
            UseCaseError::StorageError => Self::Storage,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<'a> UseCase for SyncMessagesUseCase<'a> {
    type Response = SyncReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SyncMessages";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let messages = ctx
            .services
            .mail
            .fetch_messages(self.max_messages, self.query.as_deref())
            .await
            .map_err(|e| UseCaseError::ProviderError(e.to_string()))?;

        let fetched = messages.len();
        let mut processed = 0;
        for message in messages {
            let message_id = message.id.clone();
            let usecase = ProcessMessageUseCase {
                message,
                scheduler: self.scheduler,
            };
            let result = execute(usecase, ctx)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            if !result.newly_stored {
                continue;
            }
            processed += 1;

            if let Some(category) = result.category {
                // The G. prefix keeps our labels apart from the provider's
                // own label namespace
                let label = format!("G.{}", category);
                if let Err(e) = ctx.services.mail.add_label(&message_id, &label).await {
                    warn!("Unable to label message {}: {:?}", message_id, e);
                }
            }
        }

        info!("Message sync done: {} fetched, {} new", fetched, processed);
        Ok(SyncReport { fetched, processed })
    }
}

impl<'a> fmt::Debug for SyncMessagesUseCase<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncMessagesUseCase")
            .field("max_messages", &self.max_messages)
            .field("query", &self.query)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mailsense_domain::{Message, MessageCategory};
    use mailsense_infra::{
        setup_context, InMemoryMailProvider, ScriptedInference, StaticSys,
    };
    use std::sync::Arc;

    fn message(id: &str) -> Message {
        Message {
            id: id.into(),
            subject: "Status update".into(),
            sender: "a@x.com".into(),
            recipients: vec!["b@x.com".into()],
            body: "All green.".into(),
            timestamp: Utc.ymd(2025, 5, 30).and_hms(9, 0, 0),
            category: None,
            is_read: false,
        }
    }

    struct TestContext {
        ctx: Context,
        mail: Arc<InMemoryMailProvider>,
    }

    fn setup() -> TestContext {
        let mut ctx = setup_context();
        ctx.sys = Arc::new(StaticSys {
            now: Utc.ymd(2025, 5, 30).and_hms(9, 0, 0),
        });
        ctx.services.inference =
            Arc::new(ScriptedInference::classifying(MessageCategory::Important));
        let mail = Arc::new(InMemoryMailProvider::new());
        ctx.services.mail = mail.clone();
        TestContext { ctx, mail }
    }

    #[tokio::test]
    async fn syncs_and_labels_new_messages() {
        let test = setup();
        test.mail.receive(message("m-1"));
        test.mail.receive(message("m-2"));
        let scheduler = ReminderScheduler::new(&test.ctx);

        let report = execute(
            SyncMessagesUseCase {
                scheduler: &scheduler,
                max_messages: 50,
                query: None,
            },
            &test.ctx,
        )
        .await
        .expect("To sync messages");

        assert_eq!(
            report,
            SyncReport {
                fetched: 2,
                processed: 2
            }
        );
        let labels = test.mail.labels();
        assert!(labels.contains(&("m-1".to_string(), "G.Important".to_string())));
        assert!(labels.contains(&("m-2".to_string(), "G.Important".to_string())));
    }

    #[tokio::test]
    async fn replayed_fetches_do_not_reprocess() {
        let test = setup();
        test.mail.receive(message("m-1"));
        let scheduler = ReminderScheduler::new(&test.ctx);

        for _ in 0..2 {
            execute(
                SyncMessagesUseCase {
                    scheduler: &scheduler,
                    max_messages: 50,
                    query: None,
                },
                &test.ctx,
            )
            .await
            .expect("To sync messages");
        }

        // Second pass fetched the same message again but stored nothing new
        assert_eq!(test.mail.labels().len(), 1);
    }

    #[tokio::test]
    async fn respects_the_batch_limit() {
        let test = setup();
        for i in 0..5 {
            test.mail.receive(message(&format!("m-{}", i)));
        }
        let scheduler = ReminderScheduler::new(&test.ctx);

        let report = execute(
            SyncMessagesUseCase {
                scheduler: &scheduler,
                max_messages: 3,
                query: None,
            },
            &test.ctx,
        )
        .await
        .expect("To sync messages");

        assert_eq!(report.fetched, 3);
    }
}
