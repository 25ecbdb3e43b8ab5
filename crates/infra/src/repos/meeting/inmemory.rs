use super::IMeetingRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use mailsense_domain::{Meeting, ID};

pub struct InMemoryMeetingRepo {
    meetings: std::sync::Mutex<Vec<Meeting>>,
}

impl InMemoryMeetingRepo {
    pub fn new() -> Self {
        Self {
            meetings: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryMeetingRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMeetingRepo for InMemoryMeetingRepo {
    async fn insert(&self, meeting: &Meeting) -> anyhow::Result<()> {
        insert(meeting, &self.meetings);
        Ok(())
    }

    async fn find(&self, meeting_id: &ID) -> Option<Meeting> {
        find(meeting_id, &self.meetings)
    }

    async fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Meeting>> {
        let res = find_by(&self.meetings, |meeting| {
            meeting.start >= start && meeting.start <= end
        });
        Ok(res)
    }

    async fn exists_at(&self, instant: DateTime<Utc>) -> anyhow::Result<bool> {
        Ok(exists_by(&self.meetings, |meeting| meeting.start == instant))
    }

    async fn find_starting_after(&self, instant: DateTime<Utc>) -> anyhow::Result<Vec<Meeting>> {
        let res = find_by(&self.meetings, |meeting| meeting.start > instant);
        Ok(res)
    }

    async fn delete(&self, meeting_id: &ID) -> Option<Meeting> {
        delete(meeting_id, &self.meetings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meeting_at(start: DateTime<Utc>) -> Meeting {
        Meeting {
            id: ID::new(),
            message_id: "msg-1".into(),
            title: "Sync".into(),
            start,
            attendees: Vec::new(),
            location: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn range_query_is_inclusive() {
        let repo = InMemoryMeetingRepo::new();
        let start = Utc.ymd(2025, 6, 1).and_hms(14, 0, 0);
        let meeting = meeting_at(start);
        repo.insert(&meeting).await.unwrap();

        let hits = repo.find_in_range(start, start).await.unwrap();
        assert_eq!(hits.len(), 1);

        let misses = repo
            .find_in_range(start + chrono::Duration::seconds(1), start + chrono::Duration::hours(1))
            .await
            .unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn exists_at_matches_exact_start_only() {
        let repo = InMemoryMeetingRepo::new();
        let start = Utc.ymd(2025, 6, 1).and_hms(14, 0, 0);
        repo.insert(&meeting_at(start)).await.unwrap();

        assert!(repo.exists_at(start).await.unwrap());
        assert!(!repo
            .exists_at(start + chrono::Duration::minutes(1))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn find_starting_after_is_strict() {
        let repo = InMemoryMeetingRepo::new();
        let start = Utc.ymd(2025, 6, 1).and_hms(14, 0, 0);
        repo.insert(&meeting_at(start)).await.unwrap();

        assert!(repo.find_starting_after(start).await.unwrap().is_empty());
        assert_eq!(
            repo.find_starting_after(start - chrono::Duration::seconds(1))
                .await
                .unwrap()
                .len(),
            1
        );
    }
}
