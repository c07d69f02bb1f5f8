//! Route labels for request spans and metrics.

/// Label for requests that match no known route.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path onto the route template it was served by.
///
/// Labels come from a fixed set so client-chosen ids and unknown paths never
/// create new metric series.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments = path.trim_matches('/').split('/').collect::<Vec<_>>();

    match segments.as_slice() {
        [""] => "/",
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["receipts", "process"] => "/receipts/process",
        ["receipts", _, "points"] => "/receipts/{id}/points",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        _ => UNMATCHED_ROUTE,
    }
}
