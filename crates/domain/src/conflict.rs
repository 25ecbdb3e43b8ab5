use crate::meeting::Meeting;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Radius of the window around a meeting's start that is considered occupied.
pub const CONFLICT_WINDOW_MINUTES: i64 = 30;

/// The meetings a candidate start collides with, together with alternative
/// starts that avoid all of them. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReport {
    pub conflicts: Vec<Meeting>,
    pub alternatives: Vec<DateTime<Utc>>,
}

fn window(start: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let radius = Duration::minutes(CONFLICT_WINDOW_MINUTES);
    (start - radius, start + radius)
}

/// Returns every meeting whose `[start - 30m, start + 30m]` window contains
/// `candidate_start`. Both window ends are inclusive. Result order follows
/// the order of `existing`; callers must not read anything else into it.
pub fn find_conflicts(candidate_start: DateTime<Utc>, existing: &[Meeting]) -> Vec<Meeting> {
    existing
        .iter()
        .filter(|meeting| {
            let (window_start, window_end) = window(meeting.start);
            candidate_start >= window_start && candidate_start <= window_end
        })
        .cloned()
        .collect()
}

/// True iff `candidate` lies outside the conflict window of every meeting in
/// `conflicts`.
pub fn fits_outside_conflicts(candidate: DateTime<Utc>, conflicts: &[Meeting]) -> bool {
    conflicts.iter().all(|conflict| {
        let (window_start, window_end) = window(conflict.start);
        candidate < window_start || candidate > window_end
    })
}
