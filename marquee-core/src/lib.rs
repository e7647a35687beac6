pub mod booking;
pub mod repository;

pub use booking::{BookingService, CancelOutcome};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("User not found: {0}")]
    UserNotFound(i64),
    #[error("Movie not found: {0}")]
    MovieNotFound(i64),
    #[error("Storage error: {0}")]
    Storage(#[from] repository::StoreError),
}

pub type CoreResult<T> = Result<T, CoreError>;
