//! Get Receipt Points Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, receipts::errors::into_status_error, state::State};

/// Points Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PointsResponse {
    /// The number of points awarded to the receipt
    pub points: u64,
}

/// Get Receipt Points Handler
///
/// Returns the points awarded to a processed receipt.
#[endpoint(
    tags("receipts"),
    summary = "Get Receipt Points",
    responses(
        (status_code = StatusCode::OK, description = "Points awarded to the receipt"),
        (status_code = StatusCode::NOT_FOUND, description = "No receipt found for that ID"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PointsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let receipt = id.into_receipt_uuid()?;

    let points = state
        .app
        .receipts
        .get_points(receipt)
        .await
        .map_err(into_status_error)?;

    Ok(Json(PointsResponse {
        points: points.points,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tally_app::domain::receipts::{
        MockReceiptsService, ReceiptsServiceError,
        models::{Points, ReceiptUuid},
    };

    use crate::test_helpers::receipts_service;

    use super::*;

    fn make_service(receipts: MockReceiptsService) -> Service {
        receipts_service(
            receipts,
            Router::with_path("receipts/{id}/points").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_points_returns_200() -> TestResult {
        let uuid = ReceiptUuid::new();

        let mut receipts = MockReceiptsService::new();

        receipts
            .expect_get_points()
            .once()
            .withf(move |receipt| *receipt == uuid)
            .return_once(move |_| Ok(Points { uuid, points: 28 }));

        receipts.expect_process_receipt().never();

        let mut res = TestClient::get(format!("http://example.com/receipts/{uuid}/points"))
            .send(&make_service(receipts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: PointsResponse = res.take_json().await?;

        assert_eq!(body.points, 28);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_points_zero_is_still_found() -> TestResult {
        let uuid = ReceiptUuid::new();

        let mut receipts = MockReceiptsService::new();

        receipts
            .expect_get_points()
            .once()
            .return_once(move |_| Ok(Points { uuid, points: 0 }));

        receipts.expect_process_receipt().never();

        let mut res = TestClient::get(format!("http://example.com/receipts/{uuid}/points"))
            .send(&make_service(receipts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_json::<PointsResponse>().await?.points, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_points_unknown_receipt_returns_404() -> TestResult {
        let uuid = ReceiptUuid::new();

        let mut receipts = MockReceiptsService::new();

        receipts
            .expect_get_points()
            .once()
            .withf(move |receipt| *receipt == uuid)
            .return_once(|_| Err(ReceiptsServiceError::NotFound));

        receipts.expect_process_receipt().never();

        let mut res = TestClient::get(format!("http://example.com/receipts/{uuid}/points"))
            .send(&make_service(receipts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(
            res.take_string().await?.contains("No receipt found for that ID."),
            "expected not found description in body"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_points_malformed_id_returns_404() -> TestResult {
        let mut receipts = MockReceiptsService::new();

        receipts.expect_get_points().never();
        receipts.expect_process_receipt().never();

        let res = TestClient::get("http://example.com/receipts/not-a-receipt/points")
            .send(&make_service(receipts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
