//! Request-level logging and request IDs.

mod request_ids;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, info, warn};

use super::{metrics, routes::route_label};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Hoop that gives every request an ID, a span and a line in the access log.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RequestLogging {
    slow_request_threshold: Duration,
}

impl RequestLogging {
    pub(crate) fn new(slow_request_threshold_ms: u64) -> Self {
        Self {
            slow_request_threshold: Duration::from_millis(slow_request_threshold_ms),
        }
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        if req.uri().path() == "/metrics" {
            ctrl.call_next(req, depot, res).await;
            return;
        }

        let started = Instant::now();

        let request_id =
            request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

        depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

        request_ids::set_request_id_header(res, &request_id);

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();
        let route = route_label(&path);
        let _in_flight = metrics::InFlight::enter();

        let span = tracing::info_span!(
            "http.request",
            request_id = %request_id,
            method = %method,
            path = %path,
            route,
            remote_addr = %req.remote_addr(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let status = request_ids::response_status_or_ok(res.status_code);
        let duration_ms = elapsed.as_millis();

        metrics::observe_request(&method, route, status, elapsed);

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status = status.as_u16(), duration_ms, "request.completed");

            if status.is_server_error() {
                error!(status = status.as_u16(), "server error response");
            } else if status.is_client_error() {
                warn!(status = status.as_u16(), "client error response");
            }

            if elapsed > self.slow_request_threshold {
                warn!(
                    duration_ms,
                    threshold_ms = self.slow_request_threshold.as_millis(),
                    "slow request detected"
                );
            }
        });
    }
}
