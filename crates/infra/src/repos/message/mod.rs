mod inmemory;

pub use inmemory::InMemoryMessageRepo;
use mailsense_domain::Message;

#[async_trait::async_trait]
pub trait IMessageRepo: Send + Sync {
    async fn insert(&self, message: &Message) -> anyhow::Result<()>;
    /// Replaces the stored message with the same provider id, if any
    async fn save(&self, message: &Message) -> anyhow::Result<()>;
    async fn find(&self, message_id: &str) -> Option<Message>;
}
