mod chat_api;
mod scripted;

pub use chat_api::ChatApiInference;
use mailsense_domain::{MeetingDraft, MessageCategory};
pub use scripted::ScriptedInference;

/// The external language-inference capability. Latency and failure modes are
/// opaque to the callers; a failed call is treated as "no result" at the use
/// case boundary.
#[async_trait::async_trait]
pub trait ILanguageInference: Send + Sync {
    async fn classify(&self, subject: &str, body: &str) -> anyhow::Result<MessageCategory>;
    async fn extract_meeting(
        &self,
        subject: &str,
        body: &str,
    ) -> anyhow::Result<Option<MeetingDraft>>;
}
