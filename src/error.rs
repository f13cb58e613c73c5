use thiserror::Error;

/// Failures that end an administrative operation early.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("operation was not confirmed, stopping")]
    NotConfirmed,

    #[error("gave up clearing the bucket after {cycles} delete cycle(s) with objects still present")]
    CycleLimitReached { cycles: u32 },
}
