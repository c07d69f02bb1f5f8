//! Receipts service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tally::{normalize::normalize_receipt, receipt::RawReceipt, scoring::breakdown};
use tracing::{debug, info, warn};

use crate::domain::receipts::{
    errors::ReceiptsServiceError,
    models::{Points, ReceiptUuid},
    repository::ReceiptsRepository,
};

/// Normalises, scores and stores receipts through an injected repository.
#[derive(Clone)]
pub struct DefaultReceiptsService {
    repository: Arc<dyn ReceiptsRepository>,
}

impl DefaultReceiptsService {
    /// Create a service storing receipts in `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn ReceiptsRepository>) -> Self {
        Self { repository }
    }
}

impl Debug for DefaultReceiptsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DefaultReceiptsService")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ReceiptsService for DefaultReceiptsService {
    async fn process_receipt(
        &self,
        receipt: RawReceipt,
    ) -> Result<ReceiptUuid, ReceiptsServiceError> {
        let receipt = normalize_receipt(receipt).map_err(|error| {
            warn!(
                field = error.field(),
                value = error.value(),
                "rejected receipt: {error}"
            );

            ReceiptsServiceError::InvalidReceipt
        })?;

        let breakdown = breakdown(&receipt);

        for (rule, points) in breakdown.contributions() {
            debug!(rule = rule.name(), points, "rule contribution");
        }

        let record = self
            .repository
            .create_receipt(receipt, breakdown.total())
            .await?;

        info!(
            receipt_uuid = %record.uuid,
            points = record.points,
            "processed receipt"
        );

        Ok(record.uuid)
    }

    async fn get_points(&self, receipt: ReceiptUuid) -> Result<Points, ReceiptsServiceError> {
        let points = self.repository.get_points(receipt).await?;

        Ok(points)
    }
}

/// Receipt processing and points lookup.
#[automock]
#[async_trait]
pub trait ReceiptsService: Send + Sync {
    /// Validates, scores and stores a receipt, returning its new UUID.
    async fn process_receipt(
        &self,
        receipt: RawReceipt,
    ) -> Result<ReceiptUuid, ReceiptsServiceError>;

    /// Retrieves the points awarded to a stored receipt.
    async fn get_points(&self, receipt: ReceiptUuid) -> Result<Points, ReceiptsServiceError>;
}
