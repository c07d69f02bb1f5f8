//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    healthcheck,
    observability::{metrics_handler, request_logging},
    receipts,
    state::State,
};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Routes served by the API, without middleware or documentation.
fn api_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("receipts")
                .push(Router::with_path("process").post(receipts::process::handler))
                .push(Router::with_path("{id}/points").get(receipts::points::handler)),
        )
}

/// The full application router: middleware, API routes, metrics and docs.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(api_router());

    let doc = OpenApi::new("Tally API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}
