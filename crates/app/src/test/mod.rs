//! Test context for service-level tests.

use std::sync::Arc;

use crate::domain::receipts::{DefaultReceiptsService, repository::InMemoryReceiptsRepository};

pub(crate) mod helpers;

pub(crate) struct TestContext {
    pub(crate) receipts: DefaultReceiptsService,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        Self {
            receipts: DefaultReceiptsService::new(Arc::new(InMemoryReceiptsRepository::new())),
        }
    }
}
