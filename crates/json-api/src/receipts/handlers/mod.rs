//! Receipt Handlers

pub(crate) mod points;
pub(crate) mod process;
