//! Receipt Models

use jiff::Timestamp;
use tally::receipt::Receipt;

use crate::uuids::TypedUuid;

/// Receipt UUID
pub type ReceiptUuid = TypedUuid<ReceiptRecord>;

/// Stored Receipt
///
/// A normalised receipt together with the points it earned. Identifiers are
/// assigned by storage, so a receipt only gains one once it is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptRecord {
    /// Storage-assigned identifier.
    pub uuid: ReceiptUuid,

    /// The normalised receipt as scored.
    pub receipt: Receipt,

    /// Points awarded when the receipt was processed.
    pub points: u64,

    /// When the receipt was stored.
    pub created_at: Timestamp,
}

/// Points awarded to a stored receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Points {
    /// The receipt the points belong to.
    pub uuid: ReceiptUuid,

    /// Points awarded.
    pub points: u64,
}

impl From<&ReceiptRecord> for Points {
    fn from(record: &ReceiptRecord) -> Self {
        Self {
            uuid: record.uuid,
            points: record.points,
        }
    }
}
