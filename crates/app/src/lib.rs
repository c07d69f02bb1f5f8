//! Shared application domain and storage modules.

pub mod context;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;
