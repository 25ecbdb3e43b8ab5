use super::INotifier;
use crate::config::Config;
use mailsense_domain::{ConflictWarning, ReminderPayload};
use reqwest::Client;
use serde::Serialize;
use tracing::error;

/// Delivers notifications as JSON POSTs to a single host-configured endpoint,
/// authenticated with a shared key header.
pub struct WebhookNotifier {
    client: Client,
    url: String,
    key: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum WebhookBody<'a> {
    Reminder(&'a ReminderPayload),
    ConflictWarning(&'a ConflictWarning),
}

impl WebhookNotifier {
    pub fn new(url: String, key: String) -> Self {
        Self {
            client: Client::new(),
            url,
            key,
        }
    }

    /// Notifier for the webhook endpoint named in the configuration, or
    /// `None` when no endpoint is configured. A missing key falls back to an
    /// empty key rather than disabling the endpoint.
    pub fn from_config(config: &Config) -> Option<Self> {
        config
            .webhook_url
            .as_ref()
            .map(|url| Self::new(url.clone(), config.webhook_key.clone().unwrap_or_default()))
    }

    async fn post(&self, body: WebhookBody<'_>) {
        if let Err(e) = self
            .client
            .post(&self.url)
            .header("mailsense-webhook-key", &self.key)
            .json(&body)
            .send()
            .await
        {
            error!("Error informing client of notification: {:?}", e);
        }
    }
}

#[async_trait::async_trait]
impl INotifier for WebhookNotifier {
    async fn deliver_reminder(&self, payload: &ReminderPayload) {
        self.post(WebhookBody::Reminder(payload)).await;
    }

    async fn deliver_conflict_warning(&self, payload: &ConflictWarning) {
        self.post(WebhookBody::ConflictWarning(payload)).await;
    }
}
