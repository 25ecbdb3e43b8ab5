use crate::error::CoreError;
use crate::shared::usecase::UseCase;
use chrono::{DateTime, Duration, Utc};
use mailsense_domain::{fits_outside_conflicts, Meeting};
use mailsense_infra::Context;

pub const DEFAULT_MAX_RESULTS: usize = 3;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Best-effort search for alternative starts: bounded random draws of 1 to 24
/// hours past the candidate, accepted when they clear every conflict window
/// and no stored meeting already starts at exactly that instant. Returning
/// fewer than `max_results` alternatives, including none, is a normal
/// outcome.
#[derive(Debug)]
pub struct ProposeAlternativesUseCase {
    pub candidate_start: DateTime<Utc>,
    pub conflicts: Vec<Meeting>,
    pub max_results: usize,
    pub max_attempts: usize,
}

impl ProposeAlternativesUseCase {
    pub fn new(candidate_start: DateTime<Utc>, conflicts: Vec<Meeting>) -> Self {
        Self {
            candidate_start,
            conflicts,
            max_results: DEFAULT_MAX_RESULTS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for CoreError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::Storage,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ProposeAlternativesUseCase {
    type Response = Vec<DateTime<Utc>>;

    type Error = UseCaseError;

    const NAME: &'static str = "ProposeAlternatives";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut alternatives: Vec<DateTime<Utc>> = Vec::new();
        let mut attempts = 0;

        while alternatives.len() < self.max_results && attempts < self.max_attempts {
            attempts += 1;
            let offset_hours = ctx.rng.int_in_range(1, 24);
            let candidate = self.candidate_start + Duration::hours(offset_hours);

            if !fits_outside_conflicts(candidate, &self.conflicts) {
                continue;
            }
            if alternatives.contains(&candidate) {
                continue;
            }
            // The duplicate-booking guard consults the authoritative store,
            // not just the conflict set handed in by the caller.
            let taken = ctx
                .repos
                .meetings
                .exists_at(candidate)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            if !taken {
                alternatives.push(candidate);
            }
        }

        Ok(alternatives)
    }
}
