mod meeting;
mod message;
mod shared;

pub use meeting::{IMeetingRepo, InMemoryMeetingRepo};
pub use message::{IMessageRepo, InMemoryMessageRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub meetings: Arc<dyn IMeetingRepo>,
    pub messages: Arc<dyn IMessageRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            meetings: Arc::new(InMemoryMeetingRepo::new()),
            messages: Arc::new(InMemoryMessageRepo::new()),
        }
    }
}
