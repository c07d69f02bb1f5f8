//! Tally Domain Concerns

pub mod receipts;
