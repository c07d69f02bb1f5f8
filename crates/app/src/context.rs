//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::domain::receipts::{
    DefaultReceiptsService, ReceiptsService, repository::InMemoryReceiptsRepository,
};

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    /// Receipt processing and points lookup.
    pub receipts: Arc<dyn ReceiptsService>,
}

impl AppContext {
    /// Build an application context backed by process-local storage.
    #[must_use]
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryReceiptsRepository::new());

        Self {
            receipts: Arc::new(DefaultReceiptsService::new(repository)),
        }
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
