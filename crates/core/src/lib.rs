//! Tally
//!
//! Tally turns scanned purchase receipts into loyalty points. Untrusted wire
//! receipts are normalised into exact minor-unit amounts, then scored by a
//! fixed set of independent rules.

pub mod money;
pub mod normalize;
pub mod prelude;
pub mod receipt;
pub mod scoring;
