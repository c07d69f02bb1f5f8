//! Extension traits

mod depot;
mod receipt_path;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use receipt_path::ReceiptPathExt as _;
pub(crate) use result::ResultExt as _;
