mod inmemory;

pub use inmemory::{InMemoryMailProvider, OutboundMail};
use mailsense_domain::Message;

/// The external mailbox provider. Fetches have at-least-once semantics, so
/// callers must deduplicate against their own store.
#[async_trait::async_trait]
pub trait IMailProvider: Send + Sync {
    async fn fetch_messages(
        &self,
        max_results: usize,
        query: Option<&str>,
    ) -> anyhow::Result<Vec<Message>>;
    async fn add_label(&self, message_id: &str, label: &str) -> anyhow::Result<()>;
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}
