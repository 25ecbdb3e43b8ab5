mod inmemory;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryMeetingRepo;
use mailsense_domain::{Meeting, ID};

#[async_trait::async_trait]
pub trait IMeetingRepo: Send + Sync {
    async fn insert(&self, meeting: &Meeting) -> anyhow::Result<()>;
    async fn find(&self, meeting_id: &ID) -> Option<Meeting>;
    /// Every meeting with `start` in the closed range `[start, end]`
    async fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Meeting>>;
    /// Whether some meeting already starts at exactly this instant
    async fn exists_at(&self, instant: DateTime<Utc>) -> anyhow::Result<bool>;
    /// Every meeting starting strictly after `instant`
    async fn find_starting_after(&self, instant: DateTime<Utc>) -> anyhow::Result<Vec<Meeting>>;
    async fn delete(&self, meeting_id: &ID) -> Option<Meeting>;
}
