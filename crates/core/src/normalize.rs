//! Normalisation
//!
//! Converts untrusted [`RawReceipt`]s into validated [`Receipt`]s. Validation
//! is fail-fast: the first field that does not parse is reported and the rest
//! of the receipt is not inspected.

use std::str::FromStr;

use jiff::civil::{Date, Time};
use thiserror::Error;

use crate::{
    money::parse_money,
    receipt::{Item, RawItem, RawReceipt, Receipt},
};

/// A field did not match its expected wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidFormat {
    /// Not a real calendar date in `YYYY-MM-DD` form.
    #[error("expected a calendar date in YYYY-MM-DD form")]
    Date,

    /// Not a real time of day in 24-hour `HH:MM` form.
    #[error("expected a 24-hour time in HH:MM form")]
    Time,

    /// Not a non-negative decimal amount.
    #[error("expected a non-negative decimal amount")]
    Money,
}

/// The first receipt field that failed to normalise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The purchase date did not parse.
    #[error("invalid purchase date {value:?}")]
    PurchaseDate {
        /// Value as received.
        value: String,
        /// Underlying format failure.
        #[source]
        source: InvalidFormat,
    },

    /// The purchase time did not parse.
    #[error("invalid purchase time {value:?}")]
    PurchaseTime {
        /// Value as received.
        value: String,
        /// Underlying format failure.
        #[source]
        source: InvalidFormat,
    },

    /// An item price did not parse.
    #[error("invalid price {value:?} for item {index}")]
    ItemPrice {
        /// Zero-based position of the item on the receipt.
        index: usize,
        /// Value as received.
        value: String,
        /// Underlying format failure.
        #[source]
        source: InvalidFormat,
    },

    /// The receipt total did not parse.
    #[error("invalid total {value:?}")]
    Total {
        /// Value as received.
        value: String,
        /// Underlying format failure.
        #[source]
        source: InvalidFormat,
    },
}

impl NormalizeError {
    /// Wire name of the offending field, for logging.
    pub fn field(&self) -> &'static str {
        match self {
            Self::PurchaseDate { .. } => "purchaseDate",
            Self::PurchaseTime { .. } => "purchaseTime",
            Self::ItemPrice { .. } => "items.price",
            Self::Total { .. } => "total",
        }
    }

    /// Offending value as received.
    pub fn value(&self) -> &str {
        match self {
            Self::PurchaseDate { value, .. }
            | Self::PurchaseTime { value, .. }
            | Self::ItemPrice { value, .. }
            | Self::Total { value, .. } => value,
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`InvalidFormat::Date`] if the text is not exactly four, two and
/// two ASCII digits separated by hyphens, or names an impossible date.
pub fn parse_date(text: &str) -> Result<Date, InvalidFormat> {
    let mut parts = text.split('-');

    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(InvalidFormat::Date);
    };

    let year = fixed_width(year, 4).ok_or(InvalidFormat::Date)?;
    let month = fixed_width(month, 2).ok_or(InvalidFormat::Date)?;
    let day = fixed_width(day, 2).ok_or(InvalidFormat::Date)?;

    Date::new(year, month, day).map_err(|_ignored| InvalidFormat::Date)
}

/// Parse a 24-hour `HH:MM` time of day.
///
/// # Errors
///
/// Returns [`InvalidFormat::Time`] if the text is not exactly two and two
/// ASCII digits separated by a colon, or the hour or minute is out of range.
pub fn parse_time(text: &str) -> Result<Time, InvalidFormat> {
    let Some((hour, minute)) = text.split_once(':') else {
        return Err(InvalidFormat::Time);
    };

    let hour = fixed_width(hour, 2).ok_or(InvalidFormat::Time)?;
    let minute = fixed_width(minute, 2).ok_or(InvalidFormat::Time)?;

    Time::new(hour, minute, 0, 0).map_err(|_ignored| InvalidFormat::Time)
}

/// Validate a wire receipt and convert its amounts to minor units.
///
/// Fields are checked in order: purchase date, purchase time, each item price,
/// then the total. Retailer and item descriptions are copied verbatim.
///
/// # Errors
///
/// Returns the [`NormalizeError`] for the first field that fails to parse.
pub fn normalize_receipt(raw: RawReceipt) -> Result<Receipt, NormalizeError> {
    let RawReceipt {
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    } = raw;

    let purchase_date = parse_date(&purchase_date).map_err(|source| {
        NormalizeError::PurchaseDate {
            value: purchase_date,
            source,
        }
    })?;

    let purchase_time = parse_time(&purchase_time).map_err(|source| {
        NormalizeError::PurchaseTime {
            value: purchase_time,
            source,
        }
    })?;

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| normalize_item(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    let total = parse_money(&total).map_err(|source| NormalizeError::Total {
        value: total,
        source,
    })?;

    Ok(Receipt::new(
        retailer,
        purchase_date,
        purchase_time,
        items,
        total,
    ))
}

fn normalize_item(index: usize, raw: RawItem) -> Result<Item, NormalizeError> {
    let RawItem {
        short_description,
        price,
    } = raw;

    let price = parse_money(&price).map_err(|source| NormalizeError::ItemPrice {
        index,
        value: price,
        source,
    })?;

    Ok(Item::new(short_description, price))
}

/// Parse a run of exactly `width` ASCII digits.
fn fixed_width<T: FromStr>(text: &str, width: usize) -> Option<T> {
    if text.len() != width || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}
