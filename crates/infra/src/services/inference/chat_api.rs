use super::ILanguageInference;
use anyhow::Context;
use mailsense_domain::{MeetingDraft, MessageCategory};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

const CLASSIFY_PROMPT: &str = "You are an email classifier. Classify the email into one of these categories:
- Meetings
- Important
- Follow-Up
- Spam";

const EXTRACT_PROMPT: &str = "Extract meeting information from the email and format as JSON with these fields:
- title: meeting title
- datetime: ISO format datetime
- location: meeting location (optional)
- attendees: list of attendee email addresses
- description: meeting description/agenda (optional)

Return null if no meeting information is found.";

/// Language inference backed by an OpenAI-compatible chat-completions
/// endpoint.
pub struct ChatApiInference {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatApiInference {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    async fn complete(&self, system: &str, user: String) -> anyhow::Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: 0.7,
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: system.into(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: user,
                },
            ],
        };

        let response: ChatResponse = self
            .client
            .post(&format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Chat completion request failed")?
            .error_for_status()
            .context("Chat completion request was rejected")?
            .json()
            .await
            .context("Chat completion response was not valid JSON")?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("Chat completion response contained no choices")
    }
}

#[async_trait::async_trait]
impl ILanguageInference for ChatApiInference {
    async fn classify(&self, subject: &str, body: &str) -> anyhow::Result<MessageCategory> {
        let user = format!("Subject: {}\nContent: {}\n\nCategory:", subject, body);
        let label = self.complete(CLASSIFY_PROMPT, user).await?;
        label
            .trim()
            .parse::<MessageCategory>()
            .map_err(anyhow::Error::from)
    }

    async fn extract_meeting(
        &self,
        subject: &str,
        body: &str,
    ) -> anyhow::Result<Option<MeetingDraft>> {
        let user = format!("Subject: {}\nContent: {}\n\nJSON:", subject, body);
        let raw = self.complete(EXTRACT_PROMPT, user).await?;
        Ok(parse_draft(&raw))
    }
}

/// Best-effort parse of the model output. Anything that is not a JSON meeting
/// object counts as "no meeting found".
fn parse_draft(raw: &str) -> Option<MeetingDraft> {
    let stripped = strip_code_fence(raw.trim());
    if stripped.is_empty() || stripped == "null" {
        return None;
    }
    match serde_json::from_str::<MeetingDraft>(stripped) {
        Ok(draft) => Some(draft),
        Err(e) => {
            warn!("Discarding unparseable meeting extraction: {}", e);
            None
        }
    }
}

fn strip_code_fence(raw: &str) -> &str {
    raw.trim()
        .strip_prefix("```json")
        .or_else(|| raw.trim().strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or_else(|| raw.trim())
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    temperature: f64,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json_draft() {
        let raw = r#"{"title": "Sync", "datetime": "2025-06-01T14:00:00Z", "attendees": ["a@x.com"]}"#;
        let draft = parse_draft(raw).expect("To parse draft");
        assert_eq!(draft.title.as_deref(), Some("Sync"));
        assert_eq!(draft.start.as_deref(), Some("2025-06-01T14:00:00Z"));
        assert_eq!(draft.attendees, vec!["a@x.com".to_string()]);
    }

    #[test]
    fn strips_markdown_fences() {
        let raw = "```json\n{\"title\": \"Sync\", \"datetime\": \"2025-06-01T14:00:00\"}\n```";
        let draft = parse_draft(raw).expect("To parse fenced draft");
        assert_eq!(draft.title.as_deref(), Some("Sync"));
    }

    #[test]
    fn null_and_garbage_mean_no_meeting() {
        assert!(parse_draft("null").is_none());
        assert!(parse_draft("").is_none());
        assert!(parse_draft("I could not find a meeting here.").is_none());
    }
}
