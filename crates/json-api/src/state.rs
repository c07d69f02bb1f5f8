//! State

use std::sync::Arc;

use tally_app::context::AppContext;

/// Request-scoped view of the receipts services, injected into every route.
#[derive(Clone, Debug)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    /// Wrap the application context for depot injection.
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
