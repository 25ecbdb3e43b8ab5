mod inference;
mod mail;
mod notifier;

pub use inference::{ChatApiInference, ILanguageInference, ScriptedInference};
pub use mail::{IMailProvider, InMemoryMailProvider, OutboundMail};
pub use notifier::{INotifier, InMemoryNotifier, NotifierEvent, WebhookNotifier};
