//! Prometheus metrics for HTTP traffic and checkout outcomes.

use std::{sync::LazyLock, time::Duration};

use prometheus::{
    HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TEXT_FORMAT,
    TextEncoder,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

use autos_app::domain::checkout::{CheckoutServiceError, models::Purchase};

const DURATION_BUCKETS: [f64; 10] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0];

static METRICS: LazyLock<Option<Metrics>> = LazyLock::new(|| {
    Metrics::register()
        .inspect_err(|source| error!("failed to register metrics: {source}"))
        .ok()
});

#[derive(Debug)]
struct Metrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    checkouts_total: IntCounterVec,
    cars_sold_total: IntCounter,
}

impl Metrics {
    fn register() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("autos_json".to_string()), None)?;

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests by method, route and status."),
            &["method", "route", "status"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request latency by method and route.",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "HTTP requests currently being served.",
        )?;

        let checkouts_total = IntCounterVec::new(
            Opts::new(
                "checkouts_total",
                "Purchase confirmations by outcome.",
            ),
            &["outcome"],
        )?;

        let cars_sold_total = IntCounter::new(
            "cars_sold_total",
            "Units taken out of stock by confirmed purchases.",
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(requests_in_flight.clone()))?;
        registry.register(Box::new(checkouts_total.clone()))?;
        registry.register(Box::new(cars_sold_total.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration_seconds,
            requests_in_flight,
            checkouts_total,
            cars_sold_total,
        })
    }
}

/// Holds the in-flight gauge up for as long as a request is being served.
#[derive(Debug)]
pub(super) struct InFlight(());

impl InFlight {
    pub(super) fn enter() -> Self {
        if let Some(metrics) = METRICS.as_ref() {
            metrics.requests_in_flight.inc();
        }

        Self(())
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(metrics) = METRICS.as_ref() {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status: StatusCode, elapsed: Duration) {
    let Some(metrics) = METRICS.as_ref() else {
        return;
    };

    metrics
        .requests_total
        .with_label_values(&[method, route, status.as_str()])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(elapsed.as_secs_f64());
}

fn checkout_outcome(result: &Result<Purchase, CheckoutServiceError>) -> &'static str {
    match result {
        Ok(_) => "confirmed",
        Err(CheckoutServiceError::MissingRequiredData | CheckoutServiceError::MissingProduct) => {
            "invalid_request"
        }
        Err(CheckoutServiceError::NotFound(_)) => "unknown_car",
        Err(CheckoutServiceError::InsufficientStock { .. }) => "insufficient_stock",
        Err(CheckoutServiceError::Sql(_)) => "storage_error",
    }
}

/// Counts a purchase confirmation and, when it succeeded, the cars it sold.
pub(crate) fn observe_checkout(result: &Result<Purchase, CheckoutServiceError>) {
    let Some(metrics) = METRICS.as_ref() else {
        return;
    };

    metrics
        .checkouts_total
        .with_label_values(&[checkout_outcome(result)])
        .inc();

    if let Ok(purchase) = result {
        let sold = purchase.changes.iter().map(|change| change.quantity).sum();

        metrics.cars_sold_total.inc_by(sold);
    }
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = METRICS.as_ref() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    match TextEncoder::new().encode_to_string(&metrics.registry.gather()) {
        Ok(body) => {
            res.render(body);
            res.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_FORMAT));
        }
        Err(source) => {
            error!("failed to encode metrics: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
