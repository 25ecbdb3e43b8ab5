mod process_message;
mod sync_messages;

pub use process_message::{ProcessMessageUseCase, ProcessedMessage};
pub use sync_messages::{SyncMessagesUseCase, SyncReport};
