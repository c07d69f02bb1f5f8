//! Errors

use salvo::http::StatusError;
use tracing::{debug, error};

use tally_app::domain::receipts::ReceiptsServiceError;

pub(crate) fn into_status_error(error: ReceiptsServiceError) -> StatusError {
    match error {
        ReceiptsServiceError::InvalidReceipt => {
            StatusError::bad_request().brief("The receipt is invalid.")
        }
        ReceiptsServiceError::NotFound => {
            debug!("receipt not found");

            StatusError::not_found().brief("No receipt found for that ID.")
        }
        ReceiptsServiceError::Storage(source) => {
            error!("failed to store receipt: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use tally_app::domain::receipts::repository::ReceiptsRepositoryError;

    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ReceiptsServiceError::InvalidReceipt, StatusCode::BAD_REQUEST),
            (ReceiptsServiceError::NotFound, StatusCode::NOT_FOUND),
            (
                ReceiptsServiceError::Storage(ReceiptsRepositoryError::AlreadyExists),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(into_status_error(error).code, expected);
        }
    }

    #[test]
    fn client_errors_carry_a_description() {
        let invalid = into_status_error(ReceiptsServiceError::InvalidReceipt);
        let missing = into_status_error(ReceiptsServiceError::NotFound);

        assert_eq!(invalid.brief, "The receipt is invalid.");
        assert_eq!(missing.brief, "No receipt found for that ID.");
    }
}
