//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    money::{format_cents, parse_money},
    normalize::{InvalidFormat, NormalizeError, normalize_receipt, parse_date, parse_time},
    receipt::{Item, RawItem, RawReceipt, Receipt},
    scoring::{Rule, ScoreBreakdown, breakdown, score},
};
