//! Receipt path parameter parsing.

use salvo::{oapi::extract::PathParam, prelude::StatusError};
use tracing::debug;

use tally_app::domain::receipts::{ReceiptsServiceError, models::ReceiptUuid};

use crate::receipts::errors::into_status_error;

pub(crate) trait ReceiptPathExt {
    /// Parse the path segment as a receipt UUID. Malformed ids cannot name a
    /// stored receipt, so they are reported as not found.
    fn into_receipt_uuid(self) -> Result<ReceiptUuid, StatusError>;
}

impl ReceiptPathExt for PathParam<String> {
    fn into_receipt_uuid(self) -> Result<ReceiptUuid, StatusError> {
        let id = self.into_inner();

        id.parse::<ReceiptUuid>().map_err(|source| {
            debug!(%id, "receipt id is not a uuid: {source}");

            into_status_error(ReceiptsServiceError::NotFound)
        })
    }
}
