mod conflict;
mod meeting;
mod message;
mod reminder;
mod shared;

pub use conflict::{find_conflicts, fits_outside_conflicts, ConflictReport, CONFLICT_WINDOW_MINUTES};
pub use meeting::{Meeting, MeetingDraft};
pub use message::{Message, MessageCategory, UnknownCategoryError};
pub use reminder::{reminder_job_id, ConflictWarning, ReminderPayload};
pub use shared::entity::{Entity, InvalidIDError, ID};
