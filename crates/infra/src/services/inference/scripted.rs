use super::ILanguageInference;
use mailsense_domain::{MeetingDraft, MessageCategory};

/// Canned inference responses for tests. A missing classification behaves
/// like an inference failure; a missing draft behaves like "no meeting".
#[derive(Debug, Default)]
pub struct ScriptedInference {
    pub category: Option<MessageCategory>,
    pub draft: Option<MeetingDraft>,
}

impl ScriptedInference {
    pub fn classifying(category: MessageCategory) -> Self {
        Self {
            category: Some(category),
            draft: None,
        }
    }

    pub fn extracting(category: MessageCategory, draft: MeetingDraft) -> Self {
        Self {
            category: Some(category),
            draft: Some(draft),
        }
    }
}

#[async_trait::async_trait]
impl ILanguageInference for ScriptedInference {
    async fn classify(&self, _subject: &str, _body: &str) -> anyhow::Result<MessageCategory> {
        self.category
            .ok_or_else(|| anyhow::anyhow!("Scripted inference has no classification"))
    }

    async fn extract_meeting(
        &self,
        _subject: &str,
        _body: &str,
    ) -> anyhow::Result<Option<MeetingDraft>> {
        Ok(self.draft.clone())
    }
}
