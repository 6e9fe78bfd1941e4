// Error types for the storage layer and the HTTP-facing taxonomy, built on thiserror.
use thiserror::Error;

pub mod response;
pub mod store;

pub use store::{StoreError, StoreResult};

#[derive(Error, Debug)]
pub enum AppError {
    // The requested record or collection is absent (404).
    #[error("{0}")]
    NotFound(String),

    // The backing file refused a write (500 with its own message).
    #[error("{0}")]
    WriteDenied(String),

    // Anything else that went wrong while handling a request.
    #[error("{0}")]
    Internal(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

pub type AppResult<T> = Result<T, AppError>;
