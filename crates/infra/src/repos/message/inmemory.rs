use super::IMessageRepo;
use crate::repos::shared::inmemory_repo::find_by;
use mailsense_domain::Message;

// Messages are keyed by the provider's string id, so the `Entity`-based
// helpers do not apply here.
pub struct InMemoryMessageRepo {
    messages: std::sync::Mutex<Vec<Message>>,
}

impl InMemoryMessageRepo {
    pub fn new() -> Self {
        Self {
            messages: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryMessageRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMessageRepo for InMemoryMessageRepo {
    async fn insert(&self, message: &Message) -> anyhow::Result<()> {
        let mut messages = self.messages.lock().unwrap();
        messages.push(message.clone());
        Ok(())
    }

    async fn save(&self, message: &Message) -> anyhow::Result<()> {
        let mut messages = self.messages.lock().unwrap();
        for i in 0..messages.len() {
            if messages[i].id == message.id {
                messages.splice(i..i + 1, vec![message.clone()]);
            }
        }
        Ok(())
    }

    async fn find(&self, message_id: &str) -> Option<Message> {
        find_by(&self.messages, |message| message.id == message_id)
            .into_iter()
            .next()
    }
}
