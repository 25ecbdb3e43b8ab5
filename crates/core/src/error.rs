use thiserror::Error;

/// Crate-level error surfaced by the `Agent` entry points. Every use case
/// error converts into one of these; recoverable conditions (no meeting
/// found, malformed extraction, past-due reminder, unknown cancel) never
/// appear here.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("The meeting repository is unavailable")]
    Storage,
    #[error("The mail provider is unavailable. Error message: `{0}`")]
    Provider(String),
    #[error("Internal error")]
    Internal,
}
