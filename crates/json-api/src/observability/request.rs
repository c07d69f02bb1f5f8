//! Request-level logging, request IDs and HTTP metrics.

mod request_ids;
mod routes;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// What the completion log lines need to know about a request.
#[derive(Debug)]
struct RequestSummary {
    request_id: String,
    method: String,
    path: String,
    route: &'static str,
}

impl RequestSummary {
    fn span(&self, remote_addr: &str) -> Span {
        tracing::info_span!(
            parent: None,
            "http.request",
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            route = self.route,
            remote_addr = %remote_addr,
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        )
    }

    fn complete(&self, span: &Span, status: StatusCode, duration: Duration) {
        let duration_ms = duration.as_millis();
        let threshold_ms = u128::from(settings::slow_request_threshold_ms());

        metrics::observe_request(
            &self.method,
            self.route,
            status.as_u16(),
            duration.as_secs_f64(),
        );

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status = status.as_u16(), duration_ms, "request.completed");

            if status.is_server_error() {
                error!(
                    status = status.as_u16(),
                    method = %self.method,
                    path = %self.path,
                    request_id = %self.request_id,
                    "server error response"
                );
            } else if status.is_client_error() {
                warn!(
                    status = status.as_u16(),
                    method = %self.method,
                    path = %self.path,
                    request_id = %self.request_id,
                    "client error response"
                );
            }

            if duration_ms > threshold_ms {
                warn!(
                    method = %self.method,
                    path = %self.path,
                    request_id = %self.request_id,
                    duration_ms,
                    threshold_ms,
                    "slow request detected"
                );
            }
        });
    }
}

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    // Metrics scrapes are neither logged nor counted.
    if req.uri().path() == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

    request_ids::set_request_id_header(res, &request_id);

    let path = req.uri().path().to_owned();

    let summary = RequestSummary {
        request_id,
        method: req.method().to_string(),
        route: routes::route_label(&path),
        path,
    };

    let span = summary.span(&req.remote_addr().to_string());
    let _in_flight_request = metrics::InFlightRequestGuard::track();

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    summary.complete(
        &span,
        request_ids::response_status_or_ok(res.status_code),
        started.elapsed(),
    );
}
