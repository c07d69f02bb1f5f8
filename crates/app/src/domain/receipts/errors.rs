//! Receipts service errors.

use thiserror::Error;

use crate::domain::receipts::repository::ReceiptsRepositoryError;

/// Errors returned by the receipts service.
#[derive(Debug, Error)]
pub enum ReceiptsServiceError {
    /// A field failed to normalise; details are logged, not returned.
    #[error("the receipt is invalid")]
    InvalidReceipt,

    /// No receipt is stored under the requested UUID.
    #[error("receipt not found")]
    NotFound,

    /// The repository failed for a reason other than a missing receipt.
    #[error("storage error")]
    Storage(#[source] ReceiptsRepositoryError),
}

impl From<ReceiptsRepositoryError> for ReceiptsServiceError {
    fn from(error: ReceiptsRepositoryError) -> Self {
        match error {
            ReceiptsRepositoryError::NotFound => Self::NotFound,
            other @ ReceiptsRepositoryError::AlreadyExists => Self::Storage(other),
        }
    }
}
