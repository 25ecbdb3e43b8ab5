mod extract_meeting;
mod propose_alternatives;
mod resolve_meeting;
mod subscribers;

pub use extract_meeting::ExtractMeetingUseCase;
pub use propose_alternatives::ProposeAlternativesUseCase;
pub use resolve_meeting::{ResolutionOutcome, ResolveMeetingUseCase};
