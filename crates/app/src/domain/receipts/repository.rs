//! Receipts Repository

use std::collections::hash_map::Entry;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use rustc_hash::FxHashMap;
use tally::receipt::Receipt;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::receipts::models::{Points, ReceiptRecord, ReceiptUuid};

/// Errors returned by receipt storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptsRepositoryError {
    /// No receipt is stored under the UUID.
    #[error("receipt not found")]
    NotFound,

    /// A receipt is already stored under the UUID.
    #[error("receipt already exists")]
    AlreadyExists,
}

/// Receipt storage.
#[automock]
#[async_trait]
pub trait ReceiptsRepository: Send + Sync {
    /// Stores a receipt and its points under a newly generated UUID.
    async fn create_receipt(
        &self,
        receipt: Receipt,
        points: u64,
    ) -> Result<ReceiptRecord, ReceiptsRepositoryError>;

    /// Retrieves the points stored for a receipt.
    async fn get_points(&self, receipt: ReceiptUuid) -> Result<Points, ReceiptsRepositoryError>;
}

/// Process-local receipt storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryReceiptsRepository {
    receipts: RwLock<FxHashMap<ReceiptUuid, ReceiptRecord>>,
}

impl InMemoryReceiptsRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, ReceiptsRepositoryError> {
        let mut receipts = self.receipts.write().await;

        match receipts.entry(record.uuid) {
            Entry::Occupied(_) => Err(ReceiptsRepositoryError::AlreadyExists),
            Entry::Vacant(entry) => Ok(entry.insert(record).clone()),
        }
    }
}

#[async_trait]
impl ReceiptsRepository for InMemoryReceiptsRepository {
    async fn create_receipt(
        &self,
        receipt: Receipt,
        points: u64,
    ) -> Result<ReceiptRecord, ReceiptsRepositoryError> {
        self.insert(ReceiptRecord {
            uuid: ReceiptUuid::new(),
            receipt,
            points,
            created_at: Timestamp::now(),
        })
        .await
    }

    async fn get_points(&self, receipt: ReceiptUuid) -> Result<Points, ReceiptsRepositoryError> {
        self.receipts
            .read()
            .await
            .get(&receipt)
            .map(Points::from)
            .ok_or(ReceiptsRepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use crate::test::helpers::scored_receipt;

    use super::*;

    #[tokio::test]
    async fn create_receipt_assigns_uuid_and_keeps_points() -> TestResult {
        let repository = InMemoryReceiptsRepository::new();
        let receipt = scored_receipt();

        let record = repository.create_receipt(receipt.clone(), 28).await?;

        assert_eq!(record.receipt, receipt);
        assert_eq!(record.points, 28);

        let points = repository.get_points(record.uuid).await?;

        assert_eq!(
            points,
            Points {
                uuid: record.uuid,
                points: 28
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_receipt_never_reuses_uuids() -> TestResult {
        let repository = InMemoryReceiptsRepository::new();

        let first = repository.create_receipt(scored_receipt(), 1).await?;
        let second = repository.create_receipt(scored_receipt(), 2).await?;

        assert_ne!(first.uuid, second.uuid);
        assert_eq!(repository.get_points(first.uuid).await?.points, 1);
        assert_eq!(repository.get_points(second.uuid).await?.points, 2);

        Ok(())
    }

    #[tokio::test]
    async fn get_points_unknown_uuid_returns_not_found() {
        let repository = InMemoryReceiptsRepository::new();

        let result = repository.get_points(ReceiptUuid::new()).await;

        assert_eq!(result, Err(ReceiptsRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn insert_rejects_occupied_uuid() -> TestResult {
        let repository = InMemoryReceiptsRepository::new();
        let record = repository.create_receipt(scored_receipt(), 5).await?;

        let result = repository
            .insert(ReceiptRecord {
                points: 99,
                ..record.clone()
            })
            .await;

        assert_eq!(result, Err(ReceiptsRepositoryError::AlreadyExists));
        assert_eq!(repository.get_points(record.uuid).await?.points, 5);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_are_all_stored() -> TestResult {
        let repository = Arc::new(InMemoryReceiptsRepository::new());

        let tasks = (0..32_u64)
            .map(|points| {
                let repository = Arc::clone(&repository);

                tokio::spawn(async move { repository.create_receipt(scored_receipt(), points).await })
            })
            .collect::<Vec<_>>();

        for (expected, task) in (0..32_u64).zip(tasks) {
            let record = task.await??;

            assert_eq!(repository.get_points(record.uuid).await?.points, expected);
        }

        Ok(())
    }
}
