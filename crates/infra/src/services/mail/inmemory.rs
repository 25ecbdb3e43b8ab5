use super::IMailProvider;
use mailsense_domain::Message;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub struct InMemoryMailProvider {
    inbox: Mutex<Vec<Message>>,
    labels: Mutex<Vec<(String, String)>>,
    outbox: Mutex<Vec<OutboundMail>>,
}

impl InMemoryMailProvider {
    pub fn new() -> Self {
        Self {
            inbox: Mutex::new(Vec::new()),
            labels: Mutex::new(Vec::new()),
            outbox: Mutex::new(Vec::new()),
        }
    }

    pub fn receive(&self, message: Message) {
        self.inbox.lock().unwrap().push(message);
    }

    pub fn labels(&self) -> Vec<(String, String)> {
        self.labels.lock().unwrap().clone()
    }

    pub fn outbox(&self) -> Vec<OutboundMail> {
        self.outbox.lock().unwrap().clone()
    }
}

impl Default for InMemoryMailProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMailProvider for InMemoryMailProvider {
    async fn fetch_messages(
        &self,
        max_results: usize,
        _query: Option<&str>,
    ) -> anyhow::Result<Vec<Message>> {
        let inbox = self.inbox.lock().unwrap();
        Ok(inbox.iter().take(max_results).cloned().collect())
    }

    async fn add_label(&self, message_id: &str, label: &str) -> anyhow::Result<()> {
        self.labels
            .lock()
            .unwrap()
            .push((message_id.to_string(), label.to_string()));
        Ok(())
    }

    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        self.outbox.lock().unwrap().push(OutboundMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
