//! Test Helpers

use jiff::civil::{date, time};
use tally::receipt::{Item, RawItem, RawReceipt, Receipt};

fn raw_item(short_description: &str, price: &str) -> RawItem {
    RawItem {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

pub(crate) fn target() -> RawReceipt {
    RawReceipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            raw_item("Mountain Dew 12PK", "6.49"),
            raw_item("Emils Cheese Pizza", "12.25"),
            raw_item("Knorr Creamy Chicken", "1.26"),
            raw_item("Doritos Nacho Cheese", "3.35"),
            raw_item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

pub(crate) fn corner_market() -> RawReceipt {
    RawReceipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![raw_item("Gatorade", "2.25"); 4],
        total: "9.00".to_string(),
    }
}

pub(crate) fn scored_receipt() -> Receipt {
    Receipt::new(
        "Walgreens",
        date(2022, 1, 2),
        time(8, 13, 0, 0),
        vec![Item::new("Pepsi - 12-oz", 125), Item::new("Dasani", 140)],
        265,
    )
}
