//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use tally_app::{context::AppContext, domain::receipts::MockReceiptsService};

use crate::state::State;

pub(crate) fn state_with_receipts(receipts: MockReceiptsService) -> Arc<State> {
    State::from_app_context(AppContext {
        receipts: Arc::new(receipts),
    })
}

pub(crate) fn receipts_service(receipts: MockReceiptsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_receipts(receipts)))
            .push(route),
    )
}
