//! Process Receipt Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tally::receipt::{RawItem, RawReceipt};

use crate::{extensions::*, receipts::errors::into_status_error, state::State};

/// Receipt Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemRequest {
    /// The short product description for the item
    pub short_description: String,

    /// The total price paid for this item, e.g. "6.49"
    pub price: String,
}

impl From<ItemRequest> for RawItem {
    fn from(request: ItemRequest) -> Self {
        RawItem {
            short_description: request.short_description,
            price: request.price,
        }
    }
}

/// Process Receipt Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProcessReceiptRequest {
    /// The name of the retailer or store the receipt is from
    pub retailer: String,

    /// The date of the purchase printed on the receipt, "YYYY-MM-DD"
    pub purchase_date: String,

    /// The time of the purchase printed on the receipt, 24-hour "HH:MM"
    pub purchase_time: String,

    /// The purchased items
    pub items: Vec<ItemRequest>,

    /// The total amount paid on the receipt, e.g. "35.35"
    pub total: String,
}

impl From<ProcessReceiptRequest> for RawReceipt {
    fn from(request: ProcessReceiptRequest) -> Self {
        RawReceipt {
            retailer: request.retailer,
            purchase_date: request.purchase_date,
            purchase_time: request.purchase_time,
            items: request.items.into_iter().map(RawItem::from).collect(),
            total: request.total,
        }
    }
}

/// Receipt Processed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReceiptProcessedResponse {
    /// The id assigned to the stored receipt
    pub id: Uuid,
}

/// Process Receipt Handler
///
/// Scores a receipt and stores it, returning the id to look its points up by.
#[endpoint(
    tags("receipts"),
    summary = "Process Receipt",
    responses(
        (status_code = StatusCode::OK, description = "Receipt processed"),
        (status_code = StatusCode::BAD_REQUEST, description = "The receipt is invalid"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProcessReceiptRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReceiptProcessedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = state
        .app
        .receipts
        .process_receipt(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/receipts/{uuid}/points"), true)
        .or_500("failed to set location header")?;

    Ok(Json(ReceiptProcessedResponse { id: uuid.into() }))
}
