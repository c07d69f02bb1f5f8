//! Receipts

use jiff::civil::{Date, Time};

/// A receipt line exactly as it was received, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    /// Short product description.
    pub short_description: String,

    /// Price as a decimal string, e.g. `"6.49"`.
    pub price: String,
}

/// A receipt exactly as it was received, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReceipt {
    /// Name of the retailer or store the receipt is from.
    pub retailer: String,

    /// Purchase date, expected as `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, expected as 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Purchased items.
    pub items: Vec<RawItem>,

    /// Total paid as a decimal string.
    pub total: String,
}

/// A validated receipt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    short_description: String,
    price: u64,
}

impl Item {
    /// Creates a new item with a price in minor units.
    pub fn new(short_description: impl Into<String>, price: u64) -> Self {
        Self {
            short_description: short_description.into(),
            price,
        }
    }

    /// Returns the description as printed, untrimmed.
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Returns the price in minor units.
    pub fn price(&self) -> u64 {
        self.price
    }
}

/// A validated receipt with all amounts held as minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    retailer: String,
    purchase_date: Date,
    purchase_time: Time,
    items: Vec<Item>,
    total: u64,
}

impl Receipt {
    /// Create a new receipt from already validated parts.
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: Date,
        purchase_time: Time,
        items: Vec<Item>,
        total: u64,
    ) -> Self {
        Self {
            retailer: retailer.into(),
            purchase_date,
            purchase_time,
            items,
            total,
        }
    }

    /// Retailer name as printed.
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    /// Calendar date of purchase.
    pub fn purchase_date(&self) -> Date {
        self.purchase_date
    }

    /// Time of day of purchase.
    pub fn purchase_time(&self) -> Time {
        self.purchase_time
    }

    /// Purchased items, in receipt order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Total paid in minor units.
    pub fn total(&self) -> u64 {
        self.total
    }
}
